//! Synchronization layer.
//!
//! [`Panel`] owns the wiring between the state container, the backend and
//! the notification sink. Every mutating operation follows the same shape:
//!
//! 1. validate locally (failures never reach the backend)
//! 2. mutate the backend
//! 3. reload authoritative accounts and content
//! 4. clear the form that produced the request
//! 5. notify the outcome
//!
//! Operations are split across files by concern:
//! - `auth` - login and logout
//! - `accounts` - broker account creation and removal
//! - `content` - FAQ and material edits
//! - `reload` - the authoritative re-fetch
//! - `navigation` - view changes that never touch the backend
//! - `dispatch` - translation of view controls into the above

mod accounts;
mod auth;
mod content;
mod dispatch;
mod navigation;
mod reload;

use std::sync::Arc;

use crate::error::{PainelError, PainelResult};
use crate::state::{AppState, StateContainer, StatePatch};
use crate::traits::{Backend, NotificationSink, Severity};

/// Opens a URL outside the panel.
pub type LinkOpener = Arc<dyn Fn(&str) -> std::io::Result<()> + Send + Sync>;

/// The synchronization layer.
///
/// Cheap to clone; clones share the same container, backend and sink so
/// an operation can be moved into a spawned task.
#[derive(Clone)]
pub struct Panel {
    store: Arc<StateContainer>,
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn NotificationSink>,
    link_opener: LinkOpener,
}

impl Panel {
    pub fn new(
        store: Arc<StateContainer>,
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            store,
            backend,
            notifier,
            link_opener: Arc::new(|url: &str| open::that(url)),
        }
    }

    /// Replace the system browser used for material links.
    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.link_opener = opener;
        self
    }

    /// The state container this panel drives.
    pub fn store(&self) -> &Arc<StateContainer> {
        &self.store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.store.get_state()
    }

    fn set_state(&self, patch: StatePatch) {
        self.store.set_state(patch);
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.notifier.notify(message, severity);
    }

    /// Log and surface a failed operation, then hand the error back.
    fn report<T>(&self, result: PainelResult<T>) -> PainelResult<T> {
        if let Err(err) = &result {
            match err {
                PainelError::Validation(_) | PainelError::Auth(_) => {
                    tracing::debug!(code = err.error_code(), "rejected: {}", err);
                }
                PainelError::Backend { .. } | PainelError::PartialFailure { .. } => {
                    tracing::error!(code = err.error_code(), "{}", err);
                }
            }
            self.notify(&err.user_message(), err.severity());
        }
        result
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
