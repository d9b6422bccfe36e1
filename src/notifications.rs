//! Notification sinks.
//!
//! - [`ToastCenter`] - the terminal toast: one message, gone after [`NOTIFICATION_TTL`]
//! - [`RecordingSink`] - keeps every message, for tests

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::traits::{NotificationSink, Severity, NOTIFICATION_TTL};

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

impl Toast {
    /// Whether the toast has outlived `ttl` at `now`.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// Holds at most one toast; a new notification replaces the current one.
#[derive(Debug)]
pub struct ToastCenter {
    current: Mutex<Option<Toast>>,
    ttl: Duration,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Mutex::new(None),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Toast>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The toast to draw now, if one is still live.
    pub fn current(&self) -> Option<Toast> {
        self.current_at(Instant::now())
    }

    /// The toast live at `now`. Expired toasts are dropped.
    pub fn current_at(&self, now: Instant) -> Option<Toast> {
        let mut current = self.lock();
        if current
            .as_ref()
            .map(|t| t.is_expired_at(now, self.ttl))
            .unwrap_or(false)
        {
            *current = None;
        }
        current.clone()
    }

    pub fn dismiss(&self) {
        *self.lock() = None;
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastCenter {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::debug!(severity = severity.as_str(), "toast: {}", message);
        *self.lock() = Some(Toast {
            message: message.to_string(),
            severity,
            shown_at: Instant::now(),
        });
    }
}

/// Keeps every notification, oldest first.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, Severity)>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.lock().last().cloned()
    }

    pub fn last_message(&self) -> Option<String> {
        self.last().map(|(message, _)| message)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.lock().push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_ttl() {
        let center = ToastCenter::new();
        center.notify("FAQ adicionada para Amil.", Severity::Success);

        let shown = center.current().unwrap();
        assert_eq!(shown.severity, Severity::Success);
        assert!(center
            .current_at(shown.shown_at + Duration::from_millis(3999))
            .is_some());
        assert!(center.current_at(shown.shown_at + NOTIFICATION_TTL).is_none());
        // Once expired it stays gone
        assert!(center.current_at(shown.shown_at).is_none());
    }

    #[test]
    fn test_new_toast_replaces_previous() {
        let center = ToastCenter::new();
        center.notify("first", Severity::Info);
        center.notify("second", Severity::Error);

        let shown = center.current().unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.severity, Severity::Error);
    }

    #[test]
    fn test_dismiss() {
        let center = ToastCenter::default();
        center.notify("x", Severity::Warning);
        center.dismiss();
        assert!(center.current().is_none());
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.notify("a", Severity::Info);
        sink.notify("b", Severity::Warning);
        assert_eq!(sink.messages().len(), 2);
        assert_eq!(sink.last(), Some(("b".to_string(), Severity::Warning)));
        sink.clear();
        assert!(sink.is_empty());
    }
}
