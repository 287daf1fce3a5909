//! Core domain types
//!
//! Submission payloads, auth outcomes, screens and form validation.
//! Pure data and pure functions - no I/O.

mod auth;
mod credentials;
mod image;
mod screen;
pub mod result;
pub mod validation;

pub use auth::{AuthResult, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};
pub use credentials::{Credentials, SignupForm, SignupRequest};
pub use image::{ImageUri, PickerResponse};
pub use screen::Screen;
pub use validation::ValidationError;
