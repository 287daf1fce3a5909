//! Client-side form validation
//!
//! The signup screen only accepts Gmail and Outlook addresses. This is an
//! allow-list, not a general email syntax check, so inputs like
//! `user@GMAIL.com` or `user@gmail.co` are rejected on purpose.

use std::sync::OnceLock;

use regex::Regex;

use super::SignupForm;

/// Pattern accepted by the signup form
pub const EMAIL_DOMAIN_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@(gmail\.com|outlook\.com)$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_DOMAIN_PATTERN).expect("email pattern is valid"))
}

/// True iff `email` is `local-part@gmail.com` or `local-part@outlook.com`
pub fn validate_email_domain(email: &str) -> bool {
    email_regex().is_match(email)
}

/// True iff both strings are byte-for-byte identical
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password.as_bytes() == confirm_password.as_bytes()
}

/// Reason a signup form was rejected before reaching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmailDomain,
    PasswordMismatch,
}

impl ValidationError {
    /// Dialog title shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::EmailDomain => "Invalid Email",
            ValidationError::PasswordMismatch => "Passwords do not match",
        }
    }

    /// Dialog message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmailDomain => "Please use a Gmail or Outlook email address.",
            ValidationError::PasswordMismatch => "Please ensure your passwords match.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a signup form, email first, then password confirmation
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if !validate_email_domain(&form.email) {
        return Err(ValidationError::EmailDomain);
    }
    if !passwords_match(&form.password, &form.confirm_password) {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
