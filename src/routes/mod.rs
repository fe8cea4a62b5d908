mod api_response;
mod health_check;
mod not_found;
mod send_welcome;
mod status;

pub use api_response::*;
pub use health_check::*;
pub use not_found::*;
pub use send_welcome::*;
pub use status::*;
