//! Error types for generation runs
//!
//! Scoping matters more than shape here:
//! - `RunError` aborts a run (the component directory is unusable)
//! - `ComponentError` and everything it wraps fails one component only
//! - `ConfigError` is raised before any work starts

use std::path::PathBuf;

use cgen_artifact::{ArtifactKind, ScanError, WriteFailure};
use cgen_backend::BackendError;
use cgen_schema::SchemaError;

/// Structured response could not be interpreted
#[derive(Debug, thiserror::Error)]
pub enum GenerationParseError {
    /// Response text is not JSON
    #[error("response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Response is JSON but not an object
    #[error("response is not a JSON object")]
    NotAnObject,

    /// A required key is absent
    #[error("response is missing the \"{0}\" key")]
    MissingKey(ArtifactKind),

    /// A key outside `stories`, `test`, `docs` is present
    #[error("response has unexpected key \"{0}\"")]
    UnexpectedKey(String),

    /// A required key does not hold a string
    #[error("\"{0}\" is not a string")]
    NotAString(ArtifactKind),

    /// A required key holds only whitespace
    #[error("\"{0}\" is empty")]
    Empty(ArtifactKind),
}

/// Generation failed for one component
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Component source could not be read
    #[error("schema unavailable: {0}")]
    SchemaUnavailable(#[from] SchemaError),

    /// Backend call failed
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Backend response was not a valid three-artifact record
    #[error("generation parse error: {0}")]
    Parse(#[from] GenerationParseError),
}

/// Anything that fails a single component during a run
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// Generation failed; nothing was written
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Generation succeeded but at least one artifact write failed
    #[error("write failed: {0}")]
    Write(#[from] WriteFailure),
}

/// Run-level errors
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Component directory does not exist
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Component directory could not be enumerated
    #[error("scan failed: {0}")]
    Scan(#[source] ScanError),
}

impl From<ScanError> for RunError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::DirectoryNotFound(path) => Self::DirectoryNotFound(path),
            other => Self::Scan(other),
        }
    }
}

/// Configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
