//! Integration tests for the screen flow
//!
//! Drives the controllers through the public API the way a host would:
//! one navigator for the session, a fresh controller per screen visit.
//! The auth API is replaced by a scripted gateway.
//!
//! Run with: cargo test --test screen_flow_test

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use shutter_core::adapters::memory::{MemoryEventSink, RecordingAlerts};
use shutter_core::adapters::navigation::StackNavigator;
use shutter_core::domain::validation::{passwords_match, validate_email_domain};
use shutter_core::ports::{AuthGateway, ImageSource};
use shutter_core::services::{
    HomeController, LoginController, PickOutcome, ScreenDeps, SignupController, SubmitOutcome,
};
use shutter_core::{AuthResult, Credentials, ImageUri, PickerResponse, Screen, SignupRequest};

// ============================================================================
// Test Helpers
// ============================================================================

/// Gateway answering from a queue of scripted results
#[derive(Default)]
struct ScriptedGateway {
    results: Mutex<VecDeque<AuthResult>>,
    logins: Mutex<Vec<Credentials>>,
    signups: Mutex<Vec<SignupRequest>>,
}

impl ScriptedGateway {
    fn push(&self, result: AuthResult) {
        self.results.lock().unwrap().push_back(result);
    }

    fn next(&self) -> AuthResult {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted result left")
    }
}

#[async_trait]
impl AuthGateway for ScriptedGateway {
    async fn login(&self, credentials: &Credentials) -> AuthResult {
        self.logins.lock().unwrap().push(credentials.clone());
        self.next()
    }

    async fn signup(&self, request: &SignupRequest) -> AuthResult {
        self.signups.lock().unwrap().push(request.clone());
        self.next()
    }
}

struct GalleryOnly(ImageUri);

#[async_trait]
impl ImageSource for GalleryOnly {
    async fn request_camera_permission(&self) -> bool {
        false
    }

    async fn pick_from_camera(&self) -> PickerResponse {
        PickerResponse::Failed("camera unavailable".to_string())
    }

    async fn pick_from_gallery(&self) -> PickerResponse {
        PickerResponse::Picked(vec![self.0.clone()])
    }
}

struct Session {
    gateway: Arc<ScriptedGateway>,
    navigator: Arc<StackNavigator>,
    alerts: Arc<RecordingAlerts>,
    events: Arc<MemoryEventSink>,
}

impl Session {
    fn new() -> Self {
        let events = Arc::new(MemoryEventSink::default());
        Self {
            gateway: Arc::new(ScriptedGateway::default()),
            navigator: Arc::new(StackNavigator::new(Screen::Login, events.clone())),
            alerts: Arc::new(RecordingAlerts::default()),
            events,
        }
    }

    fn deps(&self) -> ScreenDeps {
        ScreenDeps {
            navigator: self.navigator.clone(),
            alerts: self.alerts.clone(),
            events: self.events.clone(),
        }
    }

    fn login(&self) -> LoginController {
        LoginController::new(self.gateway.clone(), self.deps())
    }

    fn signup(&self) -> SignupController {
        SignupController::new(self.gateway.clone(), self.deps())
    }
}

// ============================================================================
// Full journey
// ============================================================================

#[tokio::test]
async fn test_register_then_login_then_pick_image() {
    let session = Session::new();

    // Login screen -> "Sign up"
    let login = session.login();
    login.open_signup();
    login.lifetime().unmount();
    assert_eq!(session.navigator.current(), Screen::Signup);

    // Signup screen, first attempt with a typo in the confirmation
    let signup = session.signup();
    signup.set_name("Jane");
    signup.set_email("jane@gmail.com");
    signup.set_password("s3cret");
    signup.set_confirm_password("s3cre");
    assert!(matches!(signup.submit().await, SubmitOutcome::Rejected(_)));
    assert!(session.gateway.signups.lock().unwrap().is_empty());

    signup.set_confirm_password("s3cret");
    session.gateway.push(AuthResult::Success);
    assert_eq!(signup.submit().await, SubmitOutcome::Navigated(Screen::Login));
    signup.lifetime().unmount();
    assert_eq!(session.navigator.stack(), vec![Screen::Login]);

    // Back on Login, sign in
    let login = session.login();
    login.set_email("jane@gmail.com");
    login.set_password("s3cret");
    session.gateway.push(AuthResult::Success);
    assert_eq!(login.submit().await, SubmitOutcome::Navigated(Screen::Home));
    assert_eq!(session.navigator.stack(), vec![Screen::Login, Screen::Home]);

    let sent = session.gateway.logins.lock().unwrap().clone();
    assert_eq!(sent, vec![Credentials::new("jane@gmail.com", "s3cret")]);

    // Home: camera is refused, the library works
    let home = HomeController::new(
        Arc::new(GalleryOnly(ImageUri::new("file:///photos/cat.jpg"))),
        session.alerts.clone(),
        session.events.clone(),
    );
    home.open_modal();
    assert_eq!(home.open_camera().await, PickOutcome::PermissionDenied);
    assert_eq!(
        home.select_from_gallery().await,
        PickOutcome::Selected(ImageUri::new("file:///photos/cat.jpg"))
    );
    assert!(!home.state().modal_visible);

    // Back from Home lands on the login form
    assert!(session.navigator.go_back());
    assert_eq!(session.navigator.current(), Screen::Login);

    let titles: Vec<String> = session.alerts.alerts().into_iter().map(|a| a.title).collect();
    assert_eq!(
        titles,
        vec![
            "Passwords do not match",
            "Success",
            "Success",
            "Camera permission is required to capture images.",
        ]
    );
}

#[tokio::test]
async fn test_login_failure_keeps_user_on_login() {
    let session = Session::new();
    let login = session.login();
    login.set_email("");
    login.set_password("");
    session.gateway.push(AuthResult::login_failed());

    let outcome = login.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Invalid email or password. Please try again.".to_string())
    );
    assert_eq!(session.navigator.stack(), vec![Screen::Login]);
    // Empty fields are still sent: login has no local validation
    assert_eq!(session.gateway.logins.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_signup_failure_keeps_form() {
    let session = Session::new();
    session.login().open_signup();

    let signup = session.signup();
    signup.set_email("jane@outlook.com");
    signup.set_password("pw");
    signup.set_confirm_password("pw");
    session.gateway.push(AuthResult::signup_failed());
    session.gateway.push(AuthResult::Success);

    assert!(matches!(signup.submit().await, SubmitOutcome::Failed(_)));
    assert_eq!(session.navigator.current(), Screen::Signup);

    // Same form, second press goes through
    assert_eq!(signup.submit().await, SubmitOutcome::Navigated(Screen::Login));
    assert_eq!(session.gateway.signups.lock().unwrap().len(), 2);
}

// ============================================================================
// Validator properties
// ============================================================================

/// Reference check written without regex
fn reference_email_check(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    local_ok && (domain == "gmail.com" || domain == "outlook.com")
}

#[test]
fn test_email_check_agrees_with_reference() {
    let locals = ["", "a", "A.b", "x_y%z+w-v", "a b", "a@b", "é", "1"];
    let domains = [
        "gmail.com",
        "outlook.com",
        "Gmail.com",
        "gmail.com.",
        "yahoo.com",
        "outlook.co",
        "",
        "gmailxcom",
    ];

    for local in locals {
        for domain in domains {
            let email = format!("{}@{}", local, domain);
            assert_eq!(
                validate_email_domain(&email),
                reference_email_check(&email),
                "disagreement on {:?}",
                email
            );
        }
    }
}

#[test]
fn test_passwords_match_is_byte_equality() {
    let samples = ["", "x", "x ", " x", "X", "pässword", "passwörd"];
    for a in samples {
        for b in samples {
            assert_eq!(passwords_match(a, b), a == b);
        }
    }
}
