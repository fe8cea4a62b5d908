use unicode_segmentation::UnicodeSegmentation;

use super::ValidationError;

const MIN_NAME_LENGTH: usize = 2;

/// A trimmed name at least two user-perceived characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeName(String);

impl WelcomeName {
    /// Length is measured in extended grapheme clusters, not UTF-16 code
    /// units or `char`s: `"e\u{301}"` (e + combining acute) is one character
    /// and is rejected as too short, while `"a°"` is two and passes.
    pub fn parse(s: String) -> Result<WelcomeName, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if trimmed.graphemes(true).count() < MIN_NAME_LENGTH {
            return Err(ValidationError::NameTooShort);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for WelcomeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WelcomeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
