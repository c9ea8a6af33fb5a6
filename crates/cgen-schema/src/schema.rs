//! Prop schema value type

use indexmap::IndexMap;
use serde::Serialize;

use crate::resolver::PropField;

/// Mapping from prop name to the display string of its declared type
///
/// Declaration order is preserved so prompts and docs tables list props the
/// way the component author wrote them. Names are unique; a repeated name
/// keeps its first position and takes the last declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropSchema {
    props: IndexMap<String, String>,
}

impl PropSchema {
    /// Create empty schema
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type display for a prop, if declared
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Number of props
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check if no props were extracted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Prop names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// `(name, type)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PropSchema {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<PropField> for PropSchema {
    fn from_iter<I: IntoIterator<Item = PropField>>(iter: I) -> Self {
        iter.into_iter().map(|f| (f.name, f.type_display)).collect()
    }
}
