//! Strict interpretation of backend responses
//!
//! A response is accepted only when it is a JSON object with exactly the keys
//! `stories`, `test` and `docs`, each holding a non-blank string. One
//! surrounding Markdown code fence is stripped first; nothing else is
//! repaired.

use cgen_artifact::{ArtifactContents, ArtifactKind};
use serde_json::Value;

use crate::error::GenerationParseError;

/// The three generated artifact bodies of one component
///
/// Cannot be constructed with a missing or blank artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    stories: String,
    test: String,
    docs: String,
}

impl GenerationResult {
    /// Create result from the three bodies
    ///
    /// # Errors
    /// `GenerationParseError::Empty` for the first blank body.
    pub fn new(
        stories: impl Into<String>,
        test: impl Into<String>,
        docs: impl Into<String>,
    ) -> Result<Self, GenerationParseError> {
        let result = Self {
            stories: stories.into(),
            test: test.into(),
            docs: docs.into(),
        };
        for kind in ArtifactKind::ALL {
            if result.get(kind).trim().is_empty() {
                return Err(GenerationParseError::Empty(kind));
            }
        }
        Ok(result)
    }

    /// Parse raw backend text
    ///
    /// # Errors
    /// See [`GenerationParseError`].
    pub fn parse(raw: &str) -> Result<Self, GenerationParseError> {
        let value: Value =
            serde_json::from_str(strip_code_fence(raw)).map_err(GenerationParseError::Malformed)?;
        let Value::Object(mut object) = value else {
            return Err(GenerationParseError::NotAnObject);
        };

        if let Some(unexpected) = object.keys().find(|key| ArtifactKind::from_key(key).is_none()) {
            return Err(GenerationParseError::UnexpectedKey(unexpected.clone()));
        }

        let mut take = |kind: ArtifactKind| match object.remove(kind.key()) {
            None => Err(GenerationParseError::MissingKey(kind)),
            Some(Value::String(body)) => Ok(body),
            Some(_) => Err(GenerationParseError::NotAString(kind)),
        };
        let stories = take(ArtifactKind::Stories)?;
        let test = take(ArtifactKind::Test)?;
        let docs = take(ArtifactKind::Docs)?;

        Self::new(stories, test, docs)
    }

    /// Body of one artifact
    #[inline]
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Stories => &self.stories,
            ArtifactKind::Test => &self.test,
            ArtifactKind::Docs => &self.docs,
        }
    }
}

impl ArtifactContents for GenerationResult {
    fn contents(&self, kind: ArtifactKind) -> &str {
        self.get(kind)
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // drop the info string (`json`) on the opening line
    match inner.split_once('\n') {
        Some((_info, body)) => body.trim(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID: &str = r##"{"stories": "export default {};", "test": "test('renders', () => {});", "docs": "# Button"}"##;

    #[test]
    fn parses_three_keys() {
        let result = GenerationResult::parse(VALID).unwrap();
        assert_eq!(result.get(ArtifactKind::Stories), "export default {};");
        assert_eq!(result.get(ArtifactKind::Test), "test('renders', () => {});");
        assert_eq!(result.contents(ArtifactKind::Docs), "# Button");
    }

    #[test]
    fn strips_one_code_fence() {
        let fenced = format!("```json\n{VALID}\n```\n");
        assert_eq!(
            GenerationResult::parse(&fenced).unwrap(),
            GenerationResult::parse(VALID).unwrap()
        );
    }

    #[test]
    fn prose_around_json_is_rejected() {
        let err = GenerationResult::parse(&format!("Here you go:\n{VALID}")).unwrap_err();
        assert!(matches!(err, GenerationParseError::Malformed(_)));
    }

    #[test]
    fn missing_test_key() {
        let err = GenerationResult::parse(r##"{"stories": "s", "docs": "# d"}"##).unwrap_err();
        assert!(matches!(err, GenerationParseError::MissingKey(ArtifactKind::Test)));
    }

    #[test]
    fn unexpected_key() {
        let err = GenerationResult::parse(r#"{"stories": "s", "test": "t", "docs": "d", "notes": "n"}"#)
            .unwrap_err();
        assert!(matches!(err, GenerationParseError::UnexpectedKey(ref key) if key == "notes"));
    }

    #[test]
    fn non_string_value() {
        let err = GenerationResult::parse(r#"{"stories": ["a"], "test": "t", "docs": "d"}"#).unwrap_err();
        assert!(matches!(err, GenerationParseError::NotAString(ArtifactKind::Stories)));
    }

    #[test]
    fn blank_value() {
        let err = GenerationResult::parse(r#"{"stories": "s", "test": "t", "docs": "  \n"}"#).unwrap_err();
        assert!(matches!(err, GenerationParseError::Empty(ArtifactKind::Docs)));
    }

    #[test]
    fn array_is_not_an_object() {
        let err = GenerationResult::parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, GenerationParseError::NotAnObject));
    }
}
