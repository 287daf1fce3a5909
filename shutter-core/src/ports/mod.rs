//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. Controllers
//! depend only on these traits, not on concrete implementations.

mod auth_gateway;
mod event_sink;
mod ui;

pub use auth_gateway::AuthGateway;
pub use event_sink::{EventSink, LogEvent, NullEventSink};
pub use ui::{AlertPresenter, ImageSource, Navigator};
