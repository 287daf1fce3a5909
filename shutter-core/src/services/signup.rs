//! Signup screen controller
//!
//! `Idle -> Validating -> { ShowingValidationError -> Idle,
//!                          Submitting -> { NavigatedLogin, ShowingError -> Idle } }`
//!
//! A successful signup sends the user back to the login form; it does not
//! sign them in.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::validation::validate_signup;
use crate::domain::{AuthResult, Screen, SignupForm};
use crate::ports::{AuthGateway, LogEvent};

use super::lifecycle::{InFlight, ScreenDeps, ScreenLifetime, SubmitOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupState {
    Idle,
    Validating,
    ShowingValidationError,
    Submitting,
    ShowingError,
    NavigatedLogin,
}

pub struct SignupController {
    gateway: Arc<dyn AuthGateway>,
    deps: ScreenDeps,
    form: Mutex<SignupForm>,
    state: Mutex<SignupState>,
    in_flight: InFlight,
    lifetime: ScreenLifetime,
}

impl SignupController {
    pub fn new(gateway: Arc<dyn AuthGateway>, deps: ScreenDeps) -> Self {
        Self {
            gateway,
            deps,
            form: Mutex::new(SignupForm::default()),
            state: Mutex::new(SignupState::Idle),
            in_flight: InFlight::default(),
            lifetime: ScreenLifetime::new(),
        }
    }

    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    pub fn state(&self) -> SignupState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: SignupState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn edit(&self, apply: impl FnOnce(&mut SignupForm)) {
        apply(&mut self.form.lock().unwrap_or_else(PoisonError::into_inner));
    }

    pub fn name(&self) -> String {
        self.form.lock().unwrap_or_else(PoisonError::into_inner).name.clone()
    }

    pub fn email(&self) -> String {
        self.form.lock().unwrap_or_else(PoisonError::into_inner).email.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.edit(|f| f.name = name);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.edit(|f| f.email = email);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.edit(|f| f.password = password);
    }

    pub fn set_confirm_password(&self, confirm_password: impl Into<String>) {
        let confirm_password = confirm_password.into();
        self.edit(|f| f.confirm_password = confirm_password);
    }

    /// "Already have an account? Login"
    pub fn open_login(&self) {
        self.deps.navigator.navigate_to(Screen::Login);
    }

    /// Validate the form and, if it passes, register the user
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = self.in_flight.try_begin() else {
            self.deps
                .events
                .record(LogEvent::new("submit_ignored").with_page(Screen::Signup.as_str()));
            return SubmitOutcome::Ignored;
        };

        self.set_state(SignupState::Validating);
        let request = {
            let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
            validate_signup(&form).map(|()| form.to_request())
        };

        let request = match request {
            Ok(request) => request,
            Err(rejection) => {
                self.set_state(SignupState::ShowingValidationError);
                self.deps.alerts.show_alert(rejection.title(), rejection.message());
                self.set_state(SignupState::Idle);
                return SubmitOutcome::Rejected(rejection);
            }
        };

        self.set_state(SignupState::Submitting);
        let result = self.gateway.signup(&request).await;

        if !self.lifetime.is_mounted() {
            self.deps
                .events
                .record(LogEvent::new("late_result_discarded").with_page(Screen::Signup.as_str()));
            self.set_state(SignupState::Idle);
            return SubmitOutcome::Discarded;
        }

        match result {
            AuthResult::Success => {
                self.deps.alerts.show_alert("Success", "User registered successfully!");
                self.deps.navigator.navigate_to(Screen::Login);
                self.set_state(SignupState::NavigatedLogin);
                SubmitOutcome::Navigated(Screen::Login)
            }
            AuthResult::Failure { message } => {
                self.set_state(SignupState::ShowingError);
                self.deps.alerts.show_alert("Sign Up Failed", &message);
                self.set_state(SignupState::Idle);
                SubmitOutcome::Failed(message)
            }
        }
    }
}
