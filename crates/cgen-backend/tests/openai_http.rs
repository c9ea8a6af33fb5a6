//! HTTP-level behaviour of the chat completions backend against a mock
//! server.

use cgen_backend::{BackendConfig, BackendError, GenerationBackend, OpenAiBackend};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> OpenAiBackend {
    OpenAiBackend::new(
        BackendConfig::new()
            .with_api_key("test-key")
            .with_base_url(format!("{}/v1", server.uri())),
    )
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-5-mini",
            "messages": [{ "role": "user", "content": "generate Button" }],
            "temperature": 1.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"stories\":\"s\"}" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = backend_for(&server).complete("generate Button").await.unwrap();

    assert_eq!(text, "{\"stories\":\"s\"}");
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let err = backend_for(&server).complete("p").await.unwrap_err();

    match err {
        BackendError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn empty_choices_are_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = backend_for(&server).complete("p").await.unwrap_err();
    assert!(matches!(err, BackendError::EmptyResponse));
}

#[tokio::test]
async fn undecodable_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).complete("p").await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
}

#[tokio::test]
async fn missing_credential_fails_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(
        BackendConfig::new().with_base_url(format!("{}/v1", server.uri())),
    );
    let err = backend.complete("p").await.unwrap_err();

    assert!(matches!(err, BackendError::MissingCredential("OPENAI_API_KEY")));
}
