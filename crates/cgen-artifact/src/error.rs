//! Error types for scanning and writing artifacts

use std::path::PathBuf;

use crate::kind::ArtifactKind;

/// Errors while scanning a component directory
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Component directory does not exist or is not a directory
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Directory exists but could not be enumerated
    #[error("io error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// One artifact that could not be written
#[derive(Debug, thiserror::Error)]
#[error("failed to write {kind} artifact to {path}: {source}")]
pub struct ArtifactWriteError {
    /// Artifact being written
    pub kind: ArtifactKind,
    /// Target path
    pub path: PathBuf,
    /// Underlying IO error
    #[source]
    pub source: std::io::Error,
}

/// At least one artifact write failed for a component
///
/// Writes are independent: `written` lists the artifacts that did land.
#[derive(Debug, thiserror::Error)]
#[error("{} of {} artifact writes failed for {component}", .errors.len(), .errors.len() + .written.len())]
pub struct WriteFailure {
    /// Component name
    pub component: String,
    /// Paths written successfully before and after the failures
    pub written: Vec<PathBuf>,
    /// Individual failures, in attempt order
    pub errors: Vec<ArtifactWriteError>,
}

impl WriteFailure {
    /// Kinds that failed to write
    #[must_use]
    pub fn failed_kinds(&self) -> Vec<ArtifactKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_display() {
        let err = ScanError::DirectoryNotFound(PathBuf::from("packages/ui/src"));
        assert_eq!(err.to_string(), "directory not found: packages/ui/src");
    }

    #[test]
    fn write_failure_counts_attempts() {
        let failure = WriteFailure {
            component: "Widget".to_string(),
            written: vec![PathBuf::from("a"), PathBuf::from("b")],
            errors: vec![ArtifactWriteError {
                kind: ArtifactKind::Docs,
                path: PathBuf::from("docs/Widget.mdx"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }],
        };
        assert_eq!(failure.to_string(), "1 of 3 artifact writes failed for Widget");
        assert_eq!(failure.failed_kinds(), vec![ArtifactKind::Docs]);
    }
}
