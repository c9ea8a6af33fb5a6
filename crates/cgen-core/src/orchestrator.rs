//! Generation orchestrator
//!
//! One component in, three artifact bodies out:
//!
//! ```text
//! source → PropSchema → GenerationRequest → backend (one attempt) → GenerationResult
//! ```
//!
//! The orchestrator never touches artifact files. Writing is the caller's
//! decision, so a failed parse can never leave partial output behind.

use std::path::Path;
use std::sync::Arc;

use cgen_artifact::ArtifactLayout;
use cgen_backend::GenerationBackend;
use cgen_schema::{extract_schema_from_source, SchemaError, SourceLanguage};

use crate::config::DEFAULT_IMPORT_PREFIX;
use crate::error::GenerateError;
use crate::request::GenerationRequest;
use crate::result::GenerationResult;

/// Component name of a source file: its file stem
#[must_use]
pub fn component_name(source_path: &Path) -> String {
    source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Per-component generation pipeline
#[derive(Clone)]
pub struct Orchestrator {
    backend: Arc<dyn GenerationBackend>,
    import_prefix: String,
    layout: ArtifactLayout,
}

impl Orchestrator {
    /// Create orchestrator over a backend with default prompt settings
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
            layout: ArtifactLayout::default(),
        }
    }

    /// With import prefix used in generated files
    #[inline]
    #[must_use]
    pub fn with_import_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.import_prefix = prefix.into();
        self
    }

    /// With layout (extensions named in the prompt)
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: ArtifactLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Layout in use
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Build the request for a component without calling the backend
    ///
    /// # Errors
    /// `GenerateError::SchemaUnavailable` if the source cannot be read.
    pub async fn prepare(&self, source_path: &Path) -> Result<GenerationRequest, GenerateError> {
        let source = tokio::fs::read_to_string(source_path)
            .await
            .map_err(|e| SchemaError::unreadable(source_path, e))?;

        let name = component_name(source_path);
        let props = extract_schema_from_source(&source, SourceLanguage::from_path(source_path));
        tracing::debug!(component = %name, props = props.len(), "extracted prop schema");

        Ok(GenerationRequest::new(name, props, self.import_prefix.as_str())
            .with_source_extension(self.layout.source_extension.as_str())
            .with_docs_extension(self.layout.docs_extension.as_str()))
    }

    /// Generate the three artifacts of one component
    ///
    /// Exactly one backend call is made once the source has been read.
    ///
    /// # Errors
    /// - `SchemaUnavailable` if the source cannot be read (no backend call)
    /// - `Backend` if the backend call fails
    /// - `Parse` if the response is not a valid three-artifact record
    pub async fn generate(&self, source_path: &Path) -> Result<GenerationResult, GenerateError> {
        let request = self.prepare(source_path).await?;
        let prompt = request.render_prompt();

        tracing::info!(component = request.component(), "requesting generation");
        let raw = self.backend.complete(&prompt).await?;

        let result = GenerationResult::parse(&raw)?;
        tracing::debug!(component = request.component(), "generation response accepted");
        Ok(result)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("import_prefix", &self.import_prefix)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
