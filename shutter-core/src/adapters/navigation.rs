//! Stack-based navigator
//!
//! Behaves like a mobile stack navigator: `navigate_to` a screen that is
//! already on the stack pops back to it, any other screen is pushed on
//! top. Logging in therefore pushes Home over Login, and going back from
//! Home lands on the login form again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::Screen;
use crate::ports::{EventSink, LogEvent, Navigator};

/// Navigation stack, bottom first
pub struct StackNavigator {
    stack: Mutex<Vec<Screen>>,
    events: Arc<dyn EventSink>,
}

impl StackNavigator {
    /// Create a navigator with `initial` as the only screen
    pub fn new(initial: Screen, events: Arc<dyn EventSink>) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
            events,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Screen>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Screen on top of the stack
    pub fn current(&self) -> Screen {
        // The stack is never empty: go_back keeps the root
        self.lock().last().copied().unwrap_or(Screen::Login)
    }

    /// Snapshot of the stack, bottom first
    pub fn stack(&self) -> Vec<Screen> {
        self.lock().clone()
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().len() > 1
    }

    /// Pop the top screen. Returns false when already at the root.
    pub fn go_back(&self) -> bool {
        let current = {
            let mut stack = self.lock();
            if stack.len() <= 1 {
                return false;
            }
            stack.pop();
            stack.last().copied()
        };

        if let Some(screen) = current {
            self.events
                .record(LogEvent::new("page_opened").with_page(screen.as_str()));
        }
        true
    }
}

impl Navigator for StackNavigator {
    fn navigate_to(&self, screen: Screen) {
        {
            let mut stack = self.lock();
            match stack.iter().position(|s| *s == screen) {
                Some(pos) => stack.truncate(pos + 1),
                None => stack.push(screen),
            }
        }
        self.events
            .record(LogEvent::new("page_opened").with_page(screen.as_str()));
    }
}
