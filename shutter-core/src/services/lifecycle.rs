//! Shared plumbing for screen controllers
//!
//! Every controller owns a [`ScreenLifetime`] and checks it after each
//! await. Once the host unmounts the screen, late results are dropped
//! instead of raising dialogs or moving the navigator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::{Screen, ValidationError};
use crate::ports::{AlertPresenter, EventSink, Navigator};

/// Mounted flag shared between a controller and its host
#[derive(Debug, Clone)]
pub struct ScreenLifetime {
    mounted: Arc<AtomicBool>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Mark the screen as gone. Irreversible.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// What a submit press ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request succeeded and the navigator moved to this screen
    Navigated(Screen),
    /// Local validation failed, nothing was sent
    Rejected(ValidationError),
    /// Request failed, the message was shown to the user
    Failed(String),
    /// Another submission from this screen is still in flight
    Ignored,
    /// The screen was unmounted before the result arrived
    Discarded,
}

/// Collaborators every auth screen needs
#[derive(Clone)]
pub struct ScreenDeps {
    pub navigator: Arc<dyn Navigator>,
    pub alerts: Arc<dyn AlertPresenter>,
    pub events: Arc<dyn EventSink>,
}

/// Single-slot flag for the submission in flight
#[derive(Debug, Default)]
pub(crate) struct InFlight(AtomicBool);

impl InFlight {
    /// Claim the slot, `None` if a submission already holds it
    pub(crate) fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Releases the slot on drop, including when the submit future is dropped
pub(crate) struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
