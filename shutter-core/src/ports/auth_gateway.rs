//! Authentication API port

use async_trait::async_trait;

use crate::domain::{AuthResult, Credentials, SignupRequest};

/// Remote authentication API
///
/// Implementations never return an error: every failure is folded into
/// [`AuthResult::Failure`] with the fixed user-facing message, and the
/// detail goes to the event log.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Log in with an email and password
    async fn login(&self, credentials: &Credentials) -> AuthResult;

    /// Register a new user
    async fn signup(&self, request: &SignupRequest) -> AuthResult;
}
