//! Keyboard input.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> handler -> Panel
//! ```
//!
//! The [`InputContext`] is rebuilt from the latest view document on every
//! key, so bindings follow whatever the last render produced.
//!
//! - [`command`] - the [`Command`] enum
//! - [`context`] - [`InputContext`]
//! - [`registry`] - [`CommandRegistry`], key to command
//! - [`keybindings`] - default bindings
//! - [`handlers`] - command execution

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use handlers::Activation;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use std::sync::Arc;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::app::Panel;
use crate::notifications::ToastCenter;

/// What the event loop should do after a key.
#[derive(Debug)]
pub enum KeyOutcome {
    Quit,
    /// Local state may have changed; redraw
    Handled,
    /// The key meant nothing here
    Ignored,
    /// An operation is running in the background
    Spawned(tokio::task::JoinHandle<()>),
}

/// Binds keys to the panel.
#[derive(Debug, Clone)]
pub struct InputHandler {
    panel: Panel,
    toasts: Arc<ToastCenter>,
    registry: CommandRegistry,
}

impl InputHandler {
    pub fn new(panel: Panel, toasts: Arc<ToastCenter>) -> Self {
        Self {
            panel,
            toasts,
            registry: CommandRegistry::new(),
        }
    }

    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The context a key would be dispatched in right now.
    pub fn context(&self) -> InputContext {
        InputContext::from_document(&self.panel.document(), self.toasts.current().is_some())
    }

    /// Handle one key event. Releases and repeats are ignored.
    pub fn handle_key(&self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }
        match self.registry.dispatch(key, &self.context()) {
            Some(cmd) => self.execute(cmd),
            None => KeyOutcome::Ignored,
        }
    }

    /// Type pasted text into the focused input. Line breaks are dropped.
    pub fn handle_paste(&self, text: &str) -> KeyOutcome {
        if self.panel.focused_field().is_none() {
            return KeyOutcome::Ignored;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.panel.type_char(c);
        }
        KeyOutcome::Handled
    }

    /// Carry out `cmd` against the panel.
    pub fn execute(&self, cmd: Command) -> KeyOutcome {
        tracing::trace!(command = cmd.name(), "execute");
        match cmd {
            Command::Quit => KeyOutcome::Quit,
            Command::Noop => KeyOutcome::Ignored,
            Command::DismissToast => {
                self.toasts.dismiss();
                KeyOutcome::Handled
            }
            Command::Reload => KeyOutcome::Spawned(handlers::spawn_reload(&self.panel)),
            Command::Activate => match handlers::activate_focused(&self.panel) {
                Activation::Nothing => KeyOutcome::Ignored,
                Activation::Inline => KeyOutcome::Handled,
                Activation::Spawned(handle) => KeyOutcome::Spawned(handle),
            },
            Command::FocusNext | Command::FocusPrev | Command::Back => {
                outcome(handlers::handle_navigation_command(&self.panel, &cmd))
            }
            Command::InsertChar(_) | Command::Backspace => {
                outcome(handlers::handle_editing_command(&self.panel, &cmd))
            }
        }
    }
}

fn outcome(handled: bool) -> KeyOutcome {
    if handled {
        KeyOutcome::Handled
    } else {
        KeyOutcome::Ignored
    }
}
