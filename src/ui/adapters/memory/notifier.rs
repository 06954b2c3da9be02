//! Notifier that records alerts instead of blocking.

use std::cell::RefCell;

use tracing::warn;

use crate::ui::ports::UserNotifier;

/// Keeps every alert in order so callers can inspect them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded alerts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every alert shown so far.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Returns the most recent alert.
    #[must_use]
    pub fn last_alert(&self) -> Option<String> {
        self.alerts.borrow().last().cloned()
    }
}

impl UserNotifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        warn!(message, "user alert");
        self.alerts.borrow_mut().push(message.to_owned());
    }
}
