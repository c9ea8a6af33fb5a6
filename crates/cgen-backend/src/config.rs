//! Backend configuration
//!
//! Loaded once at process start and read-only afterwards. The credential
//! only ever comes from the environment; it is never read from or written to
//! configuration files.

use serde::Deserialize;

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Default model
pub const DEFAULT_MODEL: &str = "gpt-5-mini";
/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// Backend connection settings
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// API credential (environment only)
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// API root, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Sampling temperature; `None` leaves the server default
    pub temperature: Option<f32>,
}

impl BackendConfig {
    /// Create default configuration without credential
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With API credential
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With API root
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With sampling temperature
    #[inline]
    #[must_use]
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Check if a credential is configured
    #[inline]
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .finish()
    }
}
