//! Notification sink trait abstraction.
//!
//! User-visible, auto-expiring messages. The synchronization layer reports
//! every outcome through this trait and never blocks on it.

use std::time::Duration;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Receiver of transient user-facing messages.
///
/// Implementations show at most one message at a time; a new call replaces
/// whatever was visible.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}
