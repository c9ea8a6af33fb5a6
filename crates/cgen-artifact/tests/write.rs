//! Artifact writing: layout agreement with the scanner, overwrite semantics
//! and partial-progress behaviour on failure.

use cgen_artifact::{
    scan, write, write_kinds, ArtifactContents, ArtifactKind, ArtifactLayout, MissingArtifacts,
};
use pretty_assertions::assert_eq;
use std::fs;

struct Bodies;

impl ArtifactContents for Bodies {
    fn contents(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Stories => "export default { title: 'UI/Widget' };",
            ArtifactKind::Test => "test('renders Widget', () => {});",
            ArtifactKind::Docs => "# Widget",
        }
    }
}

#[tokio::test]
async fn writes_three_files_at_documented_paths() {
    let root = tempfile::tempdir().unwrap();
    let layout = ArtifactLayout::new(root.path().join("stories"), root.path().join("docs"));
    fs::create_dir_all(&layout.story_dir).unwrap();

    let written = write("Widget", &Bodies, &layout).await.unwrap();

    assert_eq!(
        written,
        vec![
            root.path().join("stories/Widget.stories.tsx"),
            root.path().join("stories/Widget.test.tsx"),
            root.path().join("docs/Widget.mdx"),
        ]
    );
    assert_eq!(
        fs::read_to_string(root.path().join("docs/Widget.mdx")).unwrap(),
        "# Widget"
    );
    assert_eq!(fs::read_dir(&layout.story_dir).unwrap().count(), 2);
    assert_eq!(fs::read_dir(&layout.docs_dir).unwrap().count(), 1);
}

#[tokio::test]
async fn overwrites_existing_files() {
    let root = tempfile::tempdir().unwrap();
    let layout = ArtifactLayout::new(root.path().join("stories"), root.path().join("docs"));
    fs::create_dir_all(&layout.story_dir).unwrap();
    fs::create_dir_all(&layout.docs_dir).unwrap();
    let story = layout.path_for(ArtifactKind::Stories, "Widget");
    fs::write(&story, "hand written story that is much longer than the new one").unwrap();

    write("Widget", &Bodies, &layout).await.unwrap();

    assert_eq!(
        fs::read_to_string(&story).unwrap(),
        "export default { title: 'UI/Widget' };"
    );
}

#[tokio::test]
async fn creates_nested_docs_directory() {
    let root = tempfile::tempdir().unwrap();
    let layout = ArtifactLayout::new(root.path(), root.path().join("docs/docs/components"));

    write("Widget", &Bodies, &layout).await.unwrap();

    assert!(root.path().join("docs/docs/components/Widget.mdx").is_file());
}

#[tokio::test]
async fn failed_write_does_not_stop_siblings() {
    let root = tempfile::tempdir().unwrap();
    // story directory is never created, so story and test writes fail
    let layout = ArtifactLayout::new(root.path().join("missing"), root.path().join("docs"));

    let failure = write("Widget", &Bodies, &layout).await.unwrap_err();

    assert_eq!(failure.component, "Widget");
    assert_eq!(
        failure.failed_kinds(),
        vec![ArtifactKind::Stories, ArtifactKind::Test]
    );
    assert_eq!(failure.written, vec![root.path().join("docs/Widget.mdx")]);
    assert!(root.path().join("docs/Widget.mdx").is_file());
}

#[tokio::test]
async fn write_kinds_touches_only_selected_artifacts() {
    let root = tempfile::tempdir().unwrap();
    let layout = ArtifactLayout::new(root.path().join("stories"), root.path().join("docs"));
    fs::create_dir_all(&layout.story_dir).unwrap();

    let written = write_kinds("Widget", &Bodies, &layout, &[ArtifactKind::Test])
        .await
        .unwrap();

    assert_eq!(written, vec![layout.path_for(ArtifactKind::Test, "Widget")]);
    assert!(!layout.path_for(ArtifactKind::Stories, "Widget").exists());
    assert!(!layout.docs_dir.exists());
}

#[tokio::test]
async fn scan_after_write_reports_nothing_missing() {
    let root = tempfile::tempdir().unwrap();
    let components = root.path().join("src");
    let layout = ArtifactLayout::new(root.path().join("stories"), root.path().join("docs"));
    fs::create_dir_all(&components).unwrap();
    fs::create_dir_all(&layout.story_dir).unwrap();
    fs::write(components.join("Widget.tsx"), "export const Widget = () => null;").unwrap();

    let before = scan(&components, &layout).unwrap();
    assert_eq!(before[0].missing, MissingArtifacts::all());

    write("Widget", &Bodies, &layout).await.unwrap();

    assert!(scan(&components, &layout).unwrap().is_empty());
}
