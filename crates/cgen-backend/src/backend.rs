//! Backend capability

use std::sync::Arc;

/// Errors calling a generation backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// No API credential was configured at startup
    #[error("missing API credential: set {0}")]
    MissingCredential(&'static str),

    /// Network or decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend answered successfully but without any text
    #[error("backend returned no content")]
    EmptyResponse,
}

/// Text generation capability
///
/// One attempt per call. Implementations must not retry and must not
/// stream; the orchestrator treats every error as final for a component.
#[async_trait::async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit one prompt and return the raw response text
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

#[async_trait::async_trait]
impl<B> GenerationBackend for Arc<B>
where
    B: GenerationBackend + ?Sized,
{
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        (**self).complete(prompt).await
    }
}
