//! Single-component generation

use std::sync::Arc;

use cgen_artifact::{scan, ArtifactKind};
use cgen_core::{ComponentError, GenerateError, GenerationParseError, Orchestrator, RunController};
use cgen_test_utils::{ComponentWorkspace, ScriptedBackend, BUTTON_SOURCE};
use pretty_assertions::assert_eq;

fn controller(workspace: &ComponentWorkspace, backend: &Arc<ScriptedBackend>) -> RunController {
    RunController::new(Orchestrator::new(backend.clone()).with_layout(workspace.layout().clone()))
}

#[tokio::test]
async fn writes_three_files_at_documented_paths() {
    let workspace = ComponentWorkspace::new();
    let source = workspace.add_component("Widget", BUTTON_SOURCE);
    workspace.add_artifacts("Widget", &[ArtifactKind::Stories]);

    let backend = ScriptedBackend::shared();
    backend.push_valid("Widget");
    let controller = controller(&workspace, &backend);

    let written = controller.generate_one(&source).await.unwrap();

    let root = workspace.root();
    assert_eq!(
        written,
        vec![
            root.join("storybook/src/stories/Widget.stories.tsx"),
            root.join("storybook/src/stories/Widget.test.tsx"),
            root.join("docs/docs/components/Widget.mdx"),
        ]
    );
    // generate-one always overwrites
    assert!(workspace
        .read_artifact(ArtifactKind::Stories, "Widget")
        .unwrap()
        .contains("UI/Widget"));
    assert!(scan(workspace.component_dir(), workspace.layout()).unwrap().is_empty());
}

#[tokio::test]
async fn parse_failure_leaves_disk_untouched() {
    let workspace = ComponentWorkspace::new();
    let source = workspace.add_component("Widget", BUTTON_SOURCE);

    let backend = ScriptedBackend::shared();
    backend.push_response("Sure! Here are your files.");
    let controller = controller(&workspace, &backend);

    let err = controller.generate_one(&source).await.unwrap_err();
    assert!(matches!(
        err,
        ComponentError::Generate(GenerateError::Parse(GenerationParseError::Malformed(_)))
    ));
    assert!(workspace.artifact_files().is_empty());
}

#[tokio::test]
async fn missing_story_dir_is_write_failure() {
    let workspace = ComponentWorkspace::new();
    let source = workspace.add_component("Widget", BUTTON_SOURCE);
    std::fs::remove_dir_all(&workspace.layout().story_dir).unwrap();

    let backend = ScriptedBackend::shared();
    backend.push_valid("Widget");
    let controller = controller(&workspace, &backend);

    match controller.generate_one(&source).await.unwrap_err() {
        ComponentError::Write(failure) => {
            assert_eq!(failure.failed_kinds(), vec![ArtifactKind::Stories, ArtifactKind::Test]);
            assert_eq!(failure.written.len(), 1);
        }
        other => panic!("expected write failure, got {other:?}"),
    }
    assert!(workspace.read_artifact(ArtifactKind::Docs, "Widget").is_some());
}
