mod new_welcome;
mod validation_error;
mod welcome_email;
mod welcome_name;

pub use new_welcome::NewWelcome;
pub use validation_error::ValidationError;
pub use welcome_email::WelcomeEmail;
pub use welcome_name::WelcomeName;
