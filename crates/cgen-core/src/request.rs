//! Generation request and prompt rendering

use std::fmt::Write as _;

use cgen_schema::PropSchema;

const SYSTEM_PREAMBLE: &str = "\
You are an expert React/TypeScript developer.
You generate boilerplate code for a monorepo with pnpm, Storybook, Docusaurus, Vitest, and Playwright.
Follow the project conventions strictly.";

/// Everything the backend needs to produce one component's artifacts
///
/// Lives for a single orchestrator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    component: String,
    props: PropSchema,
    import_prefix: String,
    source_extension: String,
    docs_extension: String,
}

impl GenerationRequest {
    /// Create request with default file extensions
    #[must_use]
    pub fn new(
        component: impl Into<String>,
        props: PropSchema,
        import_prefix: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            props,
            import_prefix: import_prefix.into(),
            source_extension: cgen_artifact::DEFAULT_SOURCE_EXTENSION.to_string(),
            docs_extension: cgen_artifact::DEFAULT_DOCS_EXTENSION.to_string(),
        }
    }

    /// With component/story/test extension
    #[inline]
    #[must_use]
    pub fn with_source_extension(mut self, ext: impl Into<String>) -> Self {
        self.source_extension = ext.into();
        self
    }

    /// With documentation extension
    #[inline]
    #[must_use]
    pub fn with_docs_extension(mut self, ext: impl Into<String>) -> Self {
        self.docs_extension = ext.into();
        self
    }

    /// Component name
    #[inline]
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Extracted props
    #[inline]
    #[must_use]
    pub fn props(&self) -> &PropSchema {
        &self.props
    }

    /// Module path generated files import the component from
    #[must_use]
    pub fn import_path(&self) -> String {
        format!("{}/{}", self.import_prefix.trim_end_matches('/'), self.component)
    }

    /// Render the full prompt text
    #[must_use]
    pub fn render_prompt(&self) -> String {
        let name = &self.component;
        let import = self.import_path();
        let src = &self.source_extension;
        let docs = &self.docs_extension;
        let props = serde_json::to_string_pretty(&self.props).unwrap_or_else(|_| "{}".to_string());

        let mut prompt = String::with_capacity(2048);
        prompt.push_str(SYSTEM_PREAMBLE);
        prompt.push_str("\n\n");

        // writing into a String cannot fail
        let _ = write!(
            prompt,
            "\
Generate three artifacts for the following React component:

Component: {name}
Props: {props}

Artifacts to generate:
1. Storybook CSF 3.0 story file (TypeScript, .stories.{src}).
- Use {{ Meta, StoryObj }} from \"@storybook/react-vite\".
- Import from \"{import}\".
- Export a default Meta.
- Include at least \"Default\" and \"WithCustomProps\" stories.

2. Vitest + React Testing Library test file (.test.{src}).
- Import from \"{import}\".
- At minimum: render test + one interaction (e.g. click, change).
- Use screen.getByRole where possible.
- No snapshot tests.

3. Docusaurus MDX doc file (.{docs}).
- Title = {name}.
- Import the component from \"{import}\".
- Include a description, an example usage, and a ## Props section in table form.

Return your result as a JSON object with exactly the keys \"stories\", \"test\", and \"docs\",
each containing the full file contents as a string.
Do not add explanations or prose outside the JSON.
"
        );
        prompt
    }
}
