//! Errors raised while reading component sources

use std::path::PathBuf;

/// Schema extraction errors
///
/// Only unreadable sources are errors. Parse and resolution failures degrade
/// to an empty [`PropSchema`](crate::PropSchema) instead.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Source file could not be read (missing, permissions, not UTF-8)
    #[error("cannot read component source {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Create unreadable-source error for path
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// Path of the offending source file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Unreadable { path, .. } => path,
        }
    }
}
