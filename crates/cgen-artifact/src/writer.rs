//! Artifact persistence
//!
//! Writes are independent per file. There is no multi-file transaction: a
//! failed write does not roll back its siblings and does not stop them.

use std::path::{Path, PathBuf};

use crate::error::{ArtifactWriteError, WriteFailure};
use crate::kind::ArtifactKind;
use crate::layout::ArtifactLayout;

/// Source of artifact bodies
pub trait ArtifactContents {
    /// Full file contents for an artifact kind
    fn contents(&self, kind: ArtifactKind) -> &str;
}

/// Write all three artifacts of a component
///
/// # Errors
/// `WriteFailure` if any write failed; the remaining writes were still
/// attempted.
pub async fn write<C>(
    component_name: &str,
    contents: &C,
    layout: &ArtifactLayout,
) -> Result<Vec<PathBuf>, WriteFailure>
where
    C: ArtifactContents + ?Sized,
{
    write_kinds(component_name, contents, layout, &ArtifactKind::ALL).await
}

/// Write the selected artifacts of a component
///
/// Existing files are overwritten. The docs directory is created when
/// absent; the story directory must already exist.
///
/// # Errors
/// `WriteFailure` listing every failed artifact and every written path.
pub async fn write_kinds<C>(
    component_name: &str,
    contents: &C,
    layout: &ArtifactLayout,
    kinds: &[ArtifactKind],
) -> Result<Vec<PathBuf>, WriteFailure>
where
    C: ArtifactContents + ?Sized,
{
    let mut written = Vec::with_capacity(kinds.len());
    let mut errors = Vec::new();

    for &kind in kinds {
        let path = layout.path_for(kind, component_name);
        match write_one(kind, &path, contents.contents(kind), layout).await {
            Ok(()) => {
                tracing::debug!(
                    component = component_name,
                    %kind,
                    path = %path.display(),
                    "wrote artifact"
                );
                written.push(path);
            }
            Err(err) => {
                tracing::warn!(
                    component = component_name,
                    %kind,
                    error = %err,
                    "artifact write failed"
                );
                errors.push(err);
            }
        }
    }

    if errors.is_empty() {
        Ok(written)
    } else {
        Err(WriteFailure {
            component: component_name.to_string(),
            written,
            errors,
        })
    }
}

async fn write_one(
    kind: ArtifactKind,
    path: &Path,
    body: &str,
    layout: &ArtifactLayout,
) -> Result<(), ArtifactWriteError> {
    let wrap = |source| ArtifactWriteError {
        kind,
        path: path.to_path_buf(),
        source,
    };

    if kind == ArtifactKind::Docs && !layout.docs_dir.as_os_str().is_empty() {
        tokio::fs::create_dir_all(&layout.docs_dir).await.map_err(wrap)?;
    }
    tokio::fs::write(path, body).await.map_err(wrap)
}
