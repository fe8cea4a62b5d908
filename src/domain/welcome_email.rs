use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// `local@domain.suffix`, none of the parts containing whitespace or a second `@`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeEmail(String);

impl WelcomeEmail {
    /// Trims `s` and checks it against the address shape the form accepts.
    /// No case folding is applied.
    pub fn parse(s: String) -> Result<WelcomeEmail, ValidationError> {
        let trimmed = s.trim();
        if EMAIL_REGEX.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidEmailFormat)
        }
    }
}

impl AsRef<str> for WelcomeEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WelcomeEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
