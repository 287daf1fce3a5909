//! Normalized outcome of an authentication call

/// Shown when a login attempt fails for any reason
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Shown when a signup attempt fails for any reason
pub const SIGNUP_FAILED_MESSAGE: &str = "An error occurred while signing up. Please try again.";

/// Result of a login or signup request
///
/// Wrong credentials, server errors and an unreachable host all end up as
/// the same `Failure`; the detail only goes to the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success,
    Failure { message: String },
}

impl AuthResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn login_failed() -> Self {
        Self::failure(LOGIN_FAILED_MESSAGE)
    }

    pub fn signup_failed() -> Self {
        Self::failure(SIGNUP_FAILED_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
