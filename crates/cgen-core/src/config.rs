//! Generator configuration
//!
//! Resolution order, later wins:
//! 1. built-in defaults
//! 2. `cgen.toml` in the working directory, or an explicit `--config` file
//! 3. environment (`OPENAI_API_KEY`, `CGEN_MODEL`, `CGEN_BASE_URL`)
//!
//! The resulting value is built once at startup and never mutated.

use std::path::{Path, PathBuf};

use cgen_artifact::ArtifactLayout;
use cgen_backend::{BackendConfig, API_KEY_ENV};
use serde::Deserialize;

use crate::error::ConfigError;

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "cgen.toml";
/// Default import prefix from the story directory to component sources
pub const DEFAULT_IMPORT_PREFIX: &str = "../../../packages/ui/src";
/// Model override
pub const MODEL_ENV: &str = "CGEN_MODEL";
/// API root override
pub const BASE_URL_ENV: &str = "CGEN_BASE_URL";

/// Prompt settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Module path generated files use to import components
    pub import_prefix: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
        }
    }
}

/// Full generator configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Artifact directories and extensions
    pub layout: ArtifactLayout,
    /// Backend connection
    pub backend: BackendConfig,
    /// Prompt settings
    pub prompt: PromptConfig,
}

impl GeneratorConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` if the text is not valid for this schema.
    pub fn from_toml_str(text: &str, origin: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.into(),
            source,
        })
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Read` or `ConfigError::Parse`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Load configuration for this process
    ///
    /// An explicit path must exist. Without one, `cgen.toml` in the working
    /// directory is used if present. Environment overrides are applied last.
    ///
    /// # Errors
    /// `ConfigError` if a config file exists but cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_FILE_NAME).is_file() => Self::from_file(CONFIG_FILE_NAME)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply environment overrides using `lookup`
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = lookup(API_KEY_ENV) {
            self.backend.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.backend.model = model;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.backend.base_url = base_url;
        }
        self
    }
}
