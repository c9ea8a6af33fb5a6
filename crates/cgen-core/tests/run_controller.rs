//! End-to-end runs over a temporary component tree

use std::path::Path;
use std::sync::Arc;

use cgen_artifact::{scan, ArtifactKind, ComponentDescriptor, MissingArtifacts, ScanEntry};
use cgen_backend::BackendError;
use cgen_core::{
    ArtifactFilter, ComponentOutcome, NoopReporter, Orchestrator, OutcomeStatus, RunController,
    RunError, RunOptions, RunReporter, RunSummary,
};
use cgen_test_utils::{
    valid_response, ComponentWorkspace, ScriptedBackend, BARREL_SOURCE, BUTTON_SOURCE, CARD_SOURCE,
};
use pretty_assertions::assert_eq;

fn controller(workspace: &ComponentWorkspace, backend: &Arc<ScriptedBackend>) -> RunController {
    let orchestrator = Orchestrator::new(backend.clone()).with_layout(workspace.layout().clone());
    RunController::new(orchestrator)
}

#[derive(Default)]
struct RecordingReporter {
    events: Vec<String>,
    reported: Vec<ScanEntry>,
}

impl RunReporter for RecordingReporter {
    fn scan_started(&mut self, _dir: &Path) {
        self.events.push("scan".to_string());
    }

    fn report(&mut self, entries: &[ScanEntry]) {
        self.reported = entries.to_vec();
        self.events.push(format!("report {}", entries.len()));
    }

    fn dry_run_complete(&mut self) {
        self.events.push("dry run".to_string());
    }

    fn component_started(&mut self, component: &ComponentDescriptor) {
        self.events.push(format!("start {}", component.name()));
    }

    fn component_finished(&mut self, outcome: &ComponentOutcome) {
        let status = if outcome.is_success() { "ok" } else { "failed" };
        self.events.push(format!("{status} {}", outcome.component));
    }

    fn run_finished(&mut self, _summary: &RunSummary) {
        self.events.push("done".to_string());
    }
}

#[tokio::test]
async fn generates_only_incomplete_components() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Button", BUTTON_SOURCE);
    workspace.add_component("Card", CARD_SOURCE);
    workspace.add_file("index.tsx", BARREL_SOURCE);
    workspace.complete("Card");

    let backend = ScriptedBackend::shared();
    backend.push_valid("Button");

    let mut reporter = RecordingReporter::default();
    let summary = controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new(), &mut reporter)
        .await
        .unwrap();

    assert_eq!(
        reporter.events,
        vec!["scan", "report 1", "start Button", "ok Button", "done"]
    );
    assert_eq!(reporter.reported[0].missing, MissingArtifacts::all());
    assert_eq!(backend.call_count(), 1);
    assert!(backend.prompts()[0].contains("Component: Button"));

    assert_eq!(summary.outcomes.len(), 1);
    assert!(matches!(
        &summary.outcomes[0].status,
        OutcomeStatus::Succeeded { written } if written.len() == 3
    ));
    assert_eq!(
        workspace.read_artifact(ArtifactKind::Test, "Button").unwrap(),
        "test(\"renders Button\", () => {});\n"
    );
    // the complete component is untouched
    assert_eq!(
        workspace.read_artifact(ArtifactKind::Docs, "Card").unwrap(),
        "// hand written docs\n"
    );
}

#[tokio::test]
async fn scan_after_run_reports_nothing() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Button", BUTTON_SOURCE);
    workspace.add_component("Card", CARD_SOURCE);

    let backend = ScriptedBackend::shared();
    backend.push_valid("Button").push_valid("Card");

    let summary = controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new(), &mut NoopReporter)
        .await
        .unwrap();
    assert_eq!(summary.succeeded().count(), 2);

    assert!(scan(workspace.component_dir(), workspace.layout()).unwrap().is_empty());
}

#[tokio::test]
async fn dry_run_writes_nothing() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Button", BUTTON_SOURCE);

    let backend = ScriptedBackend::shared();
    backend.push_valid("Button");

    let mut reporter = RecordingReporter::default();
    let summary = controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new().dry_run(true), &mut reporter)
        .await
        .unwrap();

    assert_eq!(reporter.events, vec!["scan", "report 1", "dry run", "done"]);
    assert!(summary.dry_run);
    assert_eq!(summary.flagged.len(), 1);
    assert!(summary.outcomes.is_empty());
    assert_eq!(backend.call_count(), 0);
    assert!(workspace.artifact_files().is_empty());
}

#[tokio::test]
async fn complete_directory_is_zero_work() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Card", CARD_SOURCE);
    workspace.complete("Card");

    let backend = ScriptedBackend::shared();
    let mut reporter = RecordingReporter::default();
    let summary = controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new(), &mut reporter)
        .await
        .unwrap();

    assert!(summary.is_complete());
    assert_eq!(reporter.events, vec!["scan", "report 0", "done"]);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn malformed_response_writes_no_files() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Button", BUTTON_SOURCE);

    let backend = ScriptedBackend::shared();
    backend.push_response(r##"{"stories": "export default {};", "docs": "# Button"}"##);

    let summary = controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new(), &mut NoopReporter)
        .await
        .unwrap();

    match &summary.outcomes[0].status {
        OutcomeStatus::Failed { reason } => assert!(reason.contains("\"test\""), "{reason}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(workspace.artifact_files().is_empty());
}

#[tokio::test]
async fn one_failure_does_not_stop_the_run() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Avatar", BUTTON_SOURCE);
    workspace.add_component("Button", BUTTON_SOURCE);
    workspace.add_component("Card", CARD_SOURCE);

    let backend = ScriptedBackend::shared();
    backend
        .push_valid("Avatar")
        .push_error(BackendError::Status {
            status: 500,
            body: "upstream exploded".to_string(),
        })
        .push_valid("Card");

    let summary = controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new(), &mut NoopReporter)
        .await
        .unwrap();

    let statuses: Vec<(&str, bool)> = summary
        .outcomes
        .iter()
        .map(|o| (o.component.as_str(), o.is_success()))
        .collect();
    assert_eq!(statuses, vec![("Avatar", true), ("Button", false), ("Card", true)]);
    assert_eq!(backend.call_count(), 3);
    assert!(workspace.read_artifact(ArtifactKind::Stories, "Button").is_none());
    assert!(workspace.read_artifact(ArtifactKind::Stories, "Card").is_some());
}

#[tokio::test]
async fn filter_limits_report_and_writes() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Button", BUTTON_SOURCE);
    workspace.add_component("Card", CARD_SOURCE);
    // Card only lacks its story; Button lacks everything
    workspace.add_artifacts("Card", &[ArtifactKind::Test, ArtifactKind::Docs]);

    let backend = ScriptedBackend::shared();
    backend.push_valid("Button");

    let summary = controller(&workspace, &backend)
        .run(
            workspace.component_dir(),
            RunOptions::new().filter(ArtifactFilter::DocsOnly),
            &mut NoopReporter,
        )
        .await
        .unwrap();

    assert_eq!(summary.flagged.len(), 1);
    assert_eq!(summary.flagged[0].component.name(), "Button");
    let mut docs_only = MissingArtifacts::none();
    docs_only.set(ArtifactKind::Docs, true);
    assert_eq!(summary.flagged[0].missing, docs_only);

    assert_eq!(backend.call_count(), 1);
    assert!(workspace.read_artifact(ArtifactKind::Docs, "Button").is_some());
    assert!(workspace.read_artifact(ArtifactKind::Stories, "Button").is_none());
    assert!(workspace.read_artifact(ArtifactKind::Test, "Button").is_none());
}

#[tokio::test]
async fn present_artifacts_are_not_overwritten() {
    let workspace = ComponentWorkspace::new();
    workspace.add_component("Button", BUTTON_SOURCE);
    workspace.add_artifacts("Button", &[ArtifactKind::Stories]);

    let backend = ScriptedBackend::shared();
    backend.push_response(valid_response("Button"));

    controller(&workspace, &backend)
        .run(workspace.component_dir(), RunOptions::new(), &mut NoopReporter)
        .await
        .unwrap();

    assert_eq!(
        workspace.read_artifact(ArtifactKind::Stories, "Button").unwrap(),
        "// hand written stories\n"
    );
    assert!(workspace.read_artifact(ArtifactKind::Test, "Button").is_some());
}

#[tokio::test]
async fn missing_directory_aborts() {
    let workspace = ComponentWorkspace::new();
    let backend = ScriptedBackend::shared();

    let err = controller(&workspace, &backend)
        .run(workspace.root().join("nope"), RunOptions::new(), &mut NoopReporter)
        .await
        .unwrap_err();
    assert!(matches!(err, RunError::DirectoryNotFound(_)));
}
