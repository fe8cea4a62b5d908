use super::{ValidationError, WelcomeEmail, WelcomeName};

/// A submission that passed validation, holding the trimmed values.
#[derive(Debug, Clone)]
pub struct NewWelcome {
    pub name: WelcomeName,
    pub email: WelcomeEmail,
}

impl NewWelcome {
    /// Checks presence, then the email shape, then the name length.
    /// The first rule that fails decides the error.
    pub fn parse(name: Option<String>, email: Option<String>) -> Result<Self, ValidationError> {
        let (name, email) = match (name, email) {
            (Some(name), Some(email)) if !name.trim().is_empty() && !email.trim().is_empty() => {
                (name, email)
            }
            _ => return Err(ValidationError::MissingField),
        };

        let email = WelcomeEmail::parse(email)?;
        let name = WelcomeName::parse(name)?;

        Ok(Self { name, email })
    }
}
