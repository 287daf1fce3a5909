//! Login screen controller
//!
//! `Idle -> Submitting -> { NavigatedHome, ShowingError -> Idle }`
//!
//! Login sends whatever was typed: there is no local validation, the
//! server is the judge.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{AuthResult, Credentials, Screen};
use crate::ports::{AuthGateway, LogEvent};

use super::lifecycle::{InFlight, ScreenDeps, ScreenLifetime, SubmitOutcome};

/// Where the login screen is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Submitting,
    ShowingError,
    NavigatedHome,
}

#[derive(Debug, Default)]
struct LoginForm {
    email: String,
    password: String,
}

pub struct LoginController {
    gateway: Arc<dyn AuthGateway>,
    deps: ScreenDeps,
    form: Mutex<LoginForm>,
    state: Mutex<LoginState>,
    in_flight: InFlight,
    lifetime: ScreenLifetime,
}

impl LoginController {
    pub fn new(gateway: Arc<dyn AuthGateway>, deps: ScreenDeps) -> Self {
        Self {
            gateway,
            deps,
            form: Mutex::new(LoginForm::default()),
            state: Mutex::new(LoginState::Idle),
            in_flight: InFlight::default(),
            lifetime: ScreenLifetime::new(),
        }
    }

    /// Handle the host uses to unmount this screen
    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn state(&self) -> LoginState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: LoginState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.form.lock().unwrap_or_else(PoisonError::into_inner).email = email.into();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.form.lock().unwrap_or_else(PoisonError::into_inner).password = password.into();
    }

    pub fn email(&self) -> String {
        self.form.lock().unwrap_or_else(PoisonError::into_inner).email.clone()
    }

    /// "Create account? Sign up"
    pub fn open_signup(&self) {
        self.deps.navigator.navigate_to(Screen::Signup);
    }

    /// Submit the form
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = self.in_flight.try_begin() else {
            self.deps
                .events
                .record(LogEvent::new("submit_ignored").with_page(Screen::Login.as_str()));
            return SubmitOutcome::Ignored;
        };

        let credentials = {
            let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
            Credentials::new(form.email.clone(), form.password.clone())
        };

        self.set_state(LoginState::Submitting);
        let result = self.gateway.login(&credentials).await;

        if !self.lifetime.is_mounted() {
            self.deps
                .events
                .record(LogEvent::new("late_result_discarded").with_page(Screen::Login.as_str()));
            self.set_state(LoginState::Idle);
            return SubmitOutcome::Discarded;
        }

        match result {
            AuthResult::Success => {
                self.deps.alerts.show_alert("Success", "Logged in successfully!");
                self.deps.navigator.navigate_to(Screen::Home);
                self.set_state(LoginState::NavigatedHome);
                SubmitOutcome::Navigated(Screen::Home)
            }
            AuthResult::Failure { message } => {
                self.set_state(LoginState::ShowingError);
                self.deps.alerts.show_alert("Login Failed", &message);
                self.set_state(LoginState::Idle);
                SubmitOutcome::Failed(message)
            }
        }
    }
}
