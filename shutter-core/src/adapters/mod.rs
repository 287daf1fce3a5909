//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the AuthGateway port
//! - Stack navigator for the Navigator port
//! - In-memory alert presenter and event sink for headless use

pub mod http_auth;
pub mod memory;
pub mod navigation;

#[cfg(test)]
pub mod mock_auth_server;
