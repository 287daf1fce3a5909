//! Service layer - screen controllers
//!
//! Controllers coordinate validation, the auth gateway and the UI ports.
//! One controller per screen, each owning its own form state.

pub mod home;
mod lifecycle;
pub mod logging;
pub mod login;
pub mod signup;

pub use home::{HomeController, HomeState, PickOutcome};
pub use lifecycle::{ScreenDeps, ScreenLifetime, SubmitOutcome};
pub use logging::{EntryPoint, LogEntry, LoggingService};
pub use login::{LoginController, LoginState};
pub use signup::{SignupController, SignupState};
