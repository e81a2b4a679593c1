pub mod email;
pub mod record;

pub use email::{EmailAddress, InvalidEmail};
pub use record::{SIGNUP_SOURCE, SignupRecord};
