//! In-memory collaborators
//!
//! Recording implementations of the UI and event ports, for headless
//! hosts and tests.

use std::sync::{Mutex, PoisonError};

use crate::ports::{AlertPresenter, EventSink, LogEvent};

/// Alert shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Alert presenter that acknowledges immediately and remembers every alert
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    shown: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn alerts(&self) -> Vec<Alert> {
        self.shown.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last(&self) -> Option<Alert> {
        self.alerts().pop()
    }
}

impl AlertPresenter for RecordingAlerts {
    fn show_alert(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Alert {
                title: title.to_string(),
                message: message.to_string(),
            });
    }
}

/// Event sink that keeps events in memory
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryEventSink {
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Names of recorded events, oldest first
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.event).collect()
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, event: LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
