//! Artifact presence checks

use std::path::Path;

use serde::Serialize;

use crate::kind::ArtifactKind;
use crate::layout::ArtifactLayout;

/// Which companion artifacts of one component are absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MissingArtifacts {
    /// Story file absent
    pub missing_story: bool,
    /// Test file absent
    pub missing_test: bool,
    /// Documentation page absent
    pub missing_docs: bool,
}

impl MissingArtifacts {
    /// Nothing missing
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything missing
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self {
            missing_story: true,
            missing_test: true,
            missing_docs: true,
        }
    }

    /// Check a single kind
    #[inline]
    #[must_use]
    pub fn is_missing(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Stories => self.missing_story,
            ArtifactKind::Test => self.missing_test,
            ArtifactKind::Docs => self.missing_docs,
        }
    }

    /// Set a single kind
    #[inline]
    pub fn set(&mut self, kind: ArtifactKind, missing: bool) {
        match kind {
            ArtifactKind::Stories => self.missing_story = missing,
            ArtifactKind::Test => self.missing_test = missing,
            ArtifactKind::Docs => self.missing_docs = missing,
        }
    }

    /// Check if at least one artifact is missing
    #[inline]
    #[must_use]
    pub fn any(&self) -> bool {
        self.missing_story || self.missing_test || self.missing_docs
    }

    /// Missing kinds in write order
    pub fn kinds(self) -> impl Iterator<Item = ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(move |kind| self.is_missing(*kind))
    }

    /// Keep only the flags whose kind satisfies `keep`
    #[must_use]
    pub fn restrict_to(self, keep: impl Fn(ArtifactKind) -> bool) -> Self {
        let mut restricted = Self::none();
        for kind in self.kinds() {
            restricted.set(kind, keep(kind));
        }
        restricted
    }
}

/// Determine which artifacts of a component are absent
///
/// An artifact is present iff a file exists at exactly
/// [`ArtifactLayout::path_for`]. No fuzzy matching, no content inspection.
#[must_use]
pub fn locate(
    component_source_path: &Path,
    component_name: &str,
    layout: &ArtifactLayout,
) -> MissingArtifacts {
    let mut missing = MissingArtifacts::none();
    for kind in ArtifactKind::ALL {
        missing.set(kind, !layout.path_for(kind, component_name).is_file());
    }

    tracing::trace!(
        component = component_name,
        source = %component_source_path.display(),
        ?missing,
        "located artifacts"
    );
    missing
}
