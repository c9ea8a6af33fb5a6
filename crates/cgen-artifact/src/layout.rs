//! Artifact naming convention
//!
//! Presence is decided by exact path equality, so every path in the system
//! must come from here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kind::ArtifactKind;

/// Default directory shared by story and test files
pub const DEFAULT_STORY_DIR: &str = "storybook/src/stories";
/// Default documentation directory
pub const DEFAULT_DOCS_DIR: &str = "docs/docs/components";
/// Default component source extension
pub const DEFAULT_SOURCE_EXTENSION: &str = "tsx";
/// Default documentation extension
pub const DEFAULT_DOCS_EXTENSION: &str = "mdx";

/// Where companion artifacts live and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactLayout {
    /// Directory holding story and test files
    pub story_dir: PathBuf,
    /// Directory holding documentation pages
    pub docs_dir: PathBuf,
    /// Extension of component sources, stories and tests (without dot)
    pub source_extension: String,
    /// Extension of documentation pages (without dot)
    pub docs_extension: String,
}

impl ArtifactLayout {
    /// Create layout with default extensions
    #[must_use]
    pub fn new(story_dir: impl Into<PathBuf>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            story_dir: story_dir.into(),
            docs_dir: docs_dir.into(),
            ..Self::default()
        }
    }

    /// With component source extension
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

    /// File name of an artifact
    #[must_use]
    pub fn file_name(&self, kind: ArtifactKind, component: &str) -> String {
        match kind {
            ArtifactKind::Stories => format!("{component}.stories.{}", self.source_extension),
            ArtifactKind::Test => format!("{component}.test.{}", self.source_extension),
            ArtifactKind::Docs => format!("{component}.{}", self.docs_extension),
        }
    }

    /// Directory an artifact kind lives in
    #[inline]
    #[must_use]
    pub fn dir_for(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Stories | ArtifactKind::Test => &self.story_dir,
            ArtifactKind::Docs => &self.docs_dir,
        }
    }

    /// Full path of an artifact
    #[must_use]
    pub fn path_for(&self, kind: ArtifactKind, component: &str) -> PathBuf {
        self.dir_for(kind).join(self.file_name(kind, component))
    }

    /// Name of the directory's aggregation (barrel) module
    #[must_use]
    pub fn barrel_file_name(&self) -> String {
        format!("index.{}", self.source_extension)
    }

    /// Component name for a file in a component directory
    ///
    /// Returns `None` for files that are not components: wrong extension,
    /// the barrel module, and story or test files that sit next to sources.
    #[must_use]
    pub fn component_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let ext = &self.source_extension;
        let stem = file_name.strip_suffix(ext.as_str())?.strip_suffix('.')?;

        if stem.is_empty()
            || file_name == self.barrel_file_name()
            || stem.ends_with(".test")
            || stem.ends_with(".stories")
        {
            return None;
        }
        Some(stem)
    }
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            story_dir: PathBuf::from(DEFAULT_STORY_DIR),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            docs_extension: DEFAULT_DOCS_EXTENSION.to_string(),
        }
    }
}
