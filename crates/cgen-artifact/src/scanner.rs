//! Completeness scanning of a component directory

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ScanError;
use crate::layout::ArtifactLayout;
use crate::locator::{locate, MissingArtifacts};

/// Identity of one discovered component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentDescriptor {
    name: String,
    source_path: PathBuf,
}

impl ComponentDescriptor {
    /// Create descriptor
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
        }
    }

    /// Component name (file stem)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the component definition
    #[inline]
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// A component with at least one missing artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    /// The component
    pub component: ComponentDescriptor,
    /// Its missing artifacts (at least one flag set)
    pub missing: MissingArtifacts,
}

/// Report components in `component_dir` that lack at least one artifact
///
/// Only files directly inside the directory are considered. The barrel
/// module and story/test files living next to sources are never treated as
/// components. Entries are ordered by file name.
///
/// # Errors
/// - `ScanError::DirectoryNotFound` if `component_dir` is not a directory
/// - `ScanError::Io` if it cannot be enumerated
pub fn scan(
    component_dir: impl AsRef<Path>,
    layout: &ArtifactLayout,
) -> Result<Vec<ScanEntry>, ScanError> {
    let requested = component_dir.as_ref();
    if !requested.is_dir() {
        return Err(ScanError::DirectoryNotFound(requested.to_path_buf()));
    }
    let dir = requested
        .canonicalize()
        .map_err(|e| ScanError::io_error(requested, e))?;

    let mut file_names = Vec::new();
    for entry in std::fs::read_dir(&dir).map_err(|e| ScanError::io_error(&dir, e))? {
        let entry = entry.map_err(|e| ScanError::io_error(&dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => file_names.push(name),
            Err(raw) => tracing::debug!(?raw, "skipping non UTF-8 file name"),
        }
    }
    file_names.sort();

    let mut candidates = 0usize;
    let report: Vec<ScanEntry> = file_names
        .iter()
        .filter_map(|file_name| {
            let name = layout.component_name(file_name)?;
            candidates += 1;
            let component = ComponentDescriptor::new(name, dir.join(file_name));
            let missing = locate(component.source_path(), name, layout);
            missing.any().then_some(ScanEntry { component, missing })
        })
        .collect();

    tracing::info!(
        dir = %dir.display(),
        components = candidates,
        incomplete = report.len(),
        "scan complete"
    );
    Ok(report)
}
