//! Shutter Core - auth flow and screen logic for the Shutter client
//!
//! This crate implements the client logic following hexagonal architecture:
//!
//! - **domain**: Payloads, auth outcomes, screens, form validation
//! - **ports**: Trait definitions for collaborators (AuthGateway, Navigator, AlertPresenter, ...)
//! - **services**: Screen controllers and the event log
//! - **adapters**: Concrete implementations (reqwest client, stack navigator, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

mod log_migrations;

use std::path::Path;
use std::sync::Arc;

use adapters::http_auth::HttpAuthClient;
use adapters::navigation::StackNavigator;
use config::Config;
use ports::{AlertPresenter, EventSink, ImageSource, NullEventSink};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{AuthResult, Credentials, ImageUri, PickerResponse, Screen, SignupForm, SignupRequest};
pub use ports::LogEvent;
pub use services::{EntryPoint, LoggingService};

/// Main context for Shutter
///
/// Holds the configuration, the event sink and the auth client shared by
/// every screen. Hosts build controllers from it.
pub struct ShutterContext {
    pub config: Config,
    pub logger: Option<Arc<LoggingService>>,
    pub events: Arc<dyn EventSink>,
    pub auth: Arc<HttpAuthClient>,
}

impl ShutterContext {
    /// Create a context from the app directory
    ///
    /// A logging database that can't be opened is not fatal: events are
    /// dropped instead.
    pub fn new(app_dir: &Path, config: Config, entry_point: EntryPoint) -> Result<Self> {
        let logger = if config.logging_enabled {
            LoggingService::new(app_dir, entry_point, env!("CARGO_PKG_VERSION"))
                .ok()
                .map(Arc::new)
        } else {
            None
        };

        let events: Arc<dyn EventSink> = match &logger {
            Some(l) => Arc::clone(l) as Arc<dyn EventSink>,
            None => Arc::new(NullEventSink),
        };

        let auth = HttpAuthClient::new(&config.base_url, events.clone())
            .map_err(|e| Error::http(format!("{:#}", e)))?;

        Ok(Self {
            config,
            logger,
            events,
            auth: Arc::new(auth),
        })
    }

    /// Navigator starting at the login screen
    pub fn navigator(&self) -> Arc<StackNavigator> {
        Arc::new(StackNavigator::new(Screen::Login, self.events.clone()))
    }

    fn deps(&self, navigator: Arc<StackNavigator>, alerts: Arc<dyn AlertPresenter>) -> ScreenDeps {
        ScreenDeps {
            navigator,
            alerts,
            events: self.events.clone(),
        }
    }

    pub fn login_controller(
        &self,
        navigator: Arc<StackNavigator>,
        alerts: Arc<dyn AlertPresenter>,
    ) -> LoginController {
        LoginController::new(self.auth.clone(), self.deps(navigator, alerts))
    }

    pub fn signup_controller(
        &self,
        navigator: Arc<StackNavigator>,
        alerts: Arc<dyn AlertPresenter>,
    ) -> SignupController {
        SignupController::new(self.auth.clone(), self.deps(navigator, alerts))
    }

    pub fn home_controller(
        &self,
        images: Arc<dyn ImageSource>,
        alerts: Arc<dyn AlertPresenter>,
    ) -> HomeController {
        HomeController::new(images, alerts, self.events.clone())
    }
}
