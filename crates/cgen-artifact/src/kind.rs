//! Artifact kinds

use serde::{Deserialize, Serialize};

/// One of the three companion artifacts of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Story file exposing example variants
    Stories,
    /// Test file
    Test,
    /// Documentation page
    Docs,
}

impl ArtifactKind {
    /// All kinds in write order
    pub const ALL: [ArtifactKind; 3] = [Self::Stories, Self::Test, Self::Docs];

    /// Key used in structured generation responses
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Stories => "stories",
            Self::Test => "test",
            Self::Docs => "docs",
        }
    }

    /// Singular noun used in human-facing reports
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Stories => "story",
            Self::Test => "test",
            Self::Docs => "docs",
        }
    }

    /// Look up kind by response key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
