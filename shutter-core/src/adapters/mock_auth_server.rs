//! Mock authentication API server for testing
//!
//! Simulates the two auth endpoints over real HTTP so the client can be
//! exercised end to end:
//! - POST /api/auth/login answers with `login_status`
//! - POST /api/auth/signup answers with `signup_status`
//! - anything else is a 404
//!
//! Every request is recorded with its parsed JSON body.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::http_auth::{LOGIN_PATH, SIGNUP_PATH};

/// Mock auth server for testing
pub struct MockAuthServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Status returned by the login endpoint
    pub login_status: u16,
    /// Status returned by the signup endpoint
    pub signup_status: u16,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            login_status: 200,
            signup_status: 201,
            delay_ms: 0,
        }
    }
}

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
}

impl MockAuthServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(Mutex::new(Vec::new()));

        // Non-blocking so the accept loop can notice shutdown
        listener.set_nonblocking(true)?;

        let running_clone = Arc::clone(&running);
        let requests_clone = Arc::clone(&requests);
        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        let log = Arc::clone(&requests_clone);
                        thread::spawn(move || handle_connection(stream, &cfg, &log));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    /// Get the base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockAuthServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Read one HTTP request: head up to the blank line, then Content-Length bytes
fn read_request(stream: &mut TcpStream) -> Option<(String, Vec<u8>)> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..n]);
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    while data.len() < head_end + content_length {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..n]);
    }

    let body_end = (head_end + content_length).min(data.len());
    Some((head, data[head_end..body_end].to_vec()))
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig, log: &Mutex<Vec<RecordedRequest>>) {
    // Accepted sockets inherit non-blocking mode on some platforms
    let _ = stream.set_nonblocking(false);
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));

    let Some((head, body)) = read_request(&mut stream) else {
        return;
    };

    if config.delay_ms > 0 {
        thread::sleep(Duration::from_millis(config.delay_ms));
    }

    let first_line = head.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_response(&mut stream, 400, r#"{"message": "Invalid request"}"#);
        return;
    }

    let method = parts[0].to_string();
    let path = parts[1].to_string();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    if let Ok(mut requests) = log.lock() {
        requests.push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            body: json,
        });
    }

    match (method.as_str(), path.as_str()) {
        ("POST", LOGIN_PATH) => {
            send_response(&mut stream, config.login_status, r#"{"message": "login"}"#)
        }
        ("POST", SIGNUP_PATH) => {
            send_response(&mut stream, config.signup_status, r#"{"message": "signup"}"#)
        }
        _ => send_response(&mut stream, 404, r#"{"message": "Not found"}"#),
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn send_response(stream: &mut TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason_phrase(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
