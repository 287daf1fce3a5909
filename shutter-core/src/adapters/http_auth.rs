//! HTTP client for the authentication API
//!
//! Two JSON endpoints:
//! - `POST {base}/api/auth/login` with `{ email, password }`, success is 200
//! - `POST {base}/api/auth/signup` with `{ name, email, password }`, success is 201
//!
//! Response bodies are ignored. Anything other than the expected status,
//! including transport errors, becomes the screen's generic failure.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::domain::{AuthResult, Credentials, SignupRequest};
use crate::ports::{AuthGateway, EventSink, LogEvent};

/// Login endpoint path
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Signup endpoint path
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Base URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Validate a base URL and strip any trailing slash
pub fn parse_base_url(raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|e| DomainError::config(format!("Invalid API base URL '{}': {}", trimmed, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(DomainError::config(format!(
            "API base URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(DomainError::config("API base URL must include a host"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Authentication API client
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
    events: Arc<dyn EventSink>,
}

impl HttpAuthClient {
    /// Create a client using the transport's default settings
    pub fn new(base_url: &str, events: Arc<dyn EventSink>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Self::with_client(client, base_url, events)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: &str, events: Arc<dyn EventSink>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            client,
            base_url,
            events,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and return the response status
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<StatusCode> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(response.status())
    }

    /// Map request errors to log-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Request to {} timed out: {}", self.base_url, error)
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to {}: {}", self.base_url, error)
        } else {
            anyhow::anyhow!("Auth request failed: {}", error)
        }
    }

    /// Interpret an exchange, recording the detail of anything unexpected
    fn interpret(
        &self,
        outcome: Result<StatusCode>,
        expected: StatusCode,
        path: &str,
        event: &str,
        failure: AuthResult,
    ) -> AuthResult {
        match outcome {
            Ok(status) if status == expected => AuthResult::Success,
            Ok(status) => {
                self.events.record(
                    LogEvent::new(event)
                        .with_endpoint(path)
                        .with_error("Unexpected response status")
                        .with_error_details(format!("HTTP {}", status.as_u16())),
                );
                failure
            }
            Err(e) => {
                self.events.record(
                    LogEvent::new(event)
                        .with_endpoint(path)
                        .with_error("Request failed")
                        .with_error_details(format!("{:#}", e)),
                );
                failure
            }
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> AuthResult {
        let outcome = self.post_json(LOGIN_PATH, credentials).await;
        self.interpret(
            outcome,
            StatusCode::OK,
            LOGIN_PATH,
            "login_failed",
            AuthResult::login_failed(),
        )
    }

    async fn signup(&self, request: &SignupRequest) -> AuthResult {
        let outcome = self.post_json(SIGNUP_PATH, request).await;
        self.interpret(
            outcome,
            StatusCode::CREATED,
            SIGNUP_PATH,
            "signup_failed",
            AuthResult::signup_failed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;
    use crate::adapters::memory::MemoryEventSink;
    use crate::adapters::mock_auth_server::{MockAuthServer, MockConfig};
    use crate::domain::{SignupForm, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};

    fn test_client(base_url: &str, events: Arc<MemoryEventSink>) -> HttpAuthClient {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpAuthClient::with_client(client, base_url, events).unwrap()
    }

    fn signup_request() -> SignupRequest {
        SignupForm {
            name: "Jane".to_string(),
            email: "jane@gmail.com".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
        }
        .to_request()
    }

    #[test]
    fn test_parse_base_url() {
        assert_eq!(parse_base_url("http://10.0.2.2:5000/").unwrap(), "http://10.0.2.2:5000");
        assert_eq!(
            parse_base_url(" https://auth.example.com/v1 ").unwrap(),
            "https://auth.example.com/v1"
        );
    }

    #[test]
    fn test_reject_bad_base_url() {
        assert!(parse_base_url("not a url").is_err());
        let err = parse_base_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[tokio::test]
    async fn test_login_success_on_200() {
        let server = MockAuthServer::start(MockConfig::default()).unwrap();
        let events = Arc::new(MemoryEventSink::default());
        let client = test_client(&server.base_url(), events.clone());

        let result = client.login(&Credentials::new("a@gmail.com", "pw")).await;
        assert_eq!(result, AuthResult::Success);
        assert!(events.events().is_empty());

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, LOGIN_PATH);
        assert_eq!(
            requests[0].body,
            serde_json::json!({"email": "a@gmail.com", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_login_failure_on_401() {
        let server = MockAuthServer::start(MockConfig {
            login_status: 401,
            ..Default::default()
        })
        .unwrap();
        let events = Arc::new(MemoryEventSink::default());
        let client = test_client(&server.base_url(), events.clone());

        let result = client.login(&Credentials::new("a@gmail.com", "wrong")).await;
        assert_eq!(result, AuthResult::failure(LOGIN_FAILED_MESSAGE));

        let logged = events.events();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].event, "login_failed");
        assert_eq!(logged[0].endpoint.as_deref(), Some(LOGIN_PATH));
        assert_eq!(logged[0].error_details.as_deref(), Some("HTTP 401"));
    }

    #[tokio::test]
    async fn test_login_requires_exactly_200() {
        let server = MockAuthServer::start(MockConfig {
            login_status: 201,
            ..Default::default()
        })
        .unwrap();
        let client = test_client(&server.base_url(), Arc::new(MemoryEventSink::default()));

        let result = client.login(&Credentials::new("a@gmail.com", "pw")).await;
        assert_eq!(result, AuthResult::login_failed());
    }

    #[tokio::test]
    async fn test_signup_success_on_201() {
        let server = MockAuthServer::start(MockConfig::default()).unwrap();
        let client = test_client(&server.base_url(), Arc::new(MemoryEventSink::default()));

        let result = client.signup(&signup_request()).await;
        assert_eq!(result, AuthResult::Success);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, SIGNUP_PATH);
        assert_eq!(
            requests[0].body,
            serde_json::json!({"name": "Jane", "email": "jane@gmail.com", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_signup_requires_exactly_201() {
        let server = MockAuthServer::start(MockConfig {
            signup_status: 200,
            ..Default::default()
        })
        .unwrap();
        let events = Arc::new(MemoryEventSink::default());
        let client = test_client(&server.base_url(), events.clone());

        let result = client.signup(&signup_request()).await;
        assert_eq!(result, AuthResult::failure(SIGNUP_FAILED_MESSAGE));
        assert_eq!(events.events()[0].event, "signup_failed");
    }

    #[tokio::test]
    async fn test_signup_server_error() {
        let server = MockAuthServer::start(MockConfig {
            signup_status: 500,
            ..Default::default()
        })
        .unwrap();
        let client = test_client(&server.base_url(), Arc::new(MemoryEventSink::default()));

        assert_eq!(client.signup(&signup_request()).await, AuthResult::signup_failed());
    }

    #[tokio::test]
    async fn test_connection_refused_is_generic_failure() {
        // Grab a free port, then release it so nothing is listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let events = Arc::new(MemoryEventSink::default());
        let client = test_client(&format!("http://127.0.0.1:{}", port), events.clone());

        let result = client.login(&Credentials::new("a@gmail.com", "pw")).await;
        assert_eq!(result, AuthResult::login_failed());

        let logged = events.events();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].error_message.as_deref(), Some("Request failed"));
        assert!(logged[0].error_details.is_some());
    }

    #[tokio::test]
    async fn test_failure_log_never_contains_password() {
        let server = MockAuthServer::start(MockConfig {
            login_status: 403,
            ..Default::default()
        })
        .unwrap();
        let events = Arc::new(MemoryEventSink::default());
        let client = test_client(&server.base_url(), events.clone());

        client.login(&Credentials::new("a@gmail.com", "hunter2")).await;

        let dump = format!("{:?}", events.events());
        assert!(!dump.contains("hunter2"));
        assert!(!dump.contains("a@gmail.com"));
    }
}
