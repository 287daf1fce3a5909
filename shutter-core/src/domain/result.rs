//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Auth failures never show up here: the gateway collapses them into
/// [`AuthResult::Failure`](crate::domain::AuthResult). These are the
/// errors of the surrounding plumbing (settings, event log, I/O).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Create an HTTP client error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}

impl From<duckdb::Error> for Error {
    fn from(e: duckdb::Error) -> Self {
        Self::Logging(e.to_string())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
