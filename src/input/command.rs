//! Commands produced by key dispatch.
//!
//! A [`Command`] is what a key means in the current context. It never
//! names a specific control: `Activate` acts on whatever the latest view
//! document has under focus.

/// A user intent, decoupled from the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the panel
    Quit,
    /// Move focus to the next control, wrapping
    FocusNext,
    /// Move focus to the previous control, wrapping
    FocusPrev,
    /// Run the focused control's action
    Activate,
    /// Type a character into the focused input
    InsertChar(char),
    /// Delete the last character of the focused input
    Backspace,
    /// Leave the detail view or the account manager
    Back,
    /// Hide the visible notification
    DismissToast,
    /// Re-fetch accounts and content
    Reload,
    /// Swallow the key
    Noop,
}

impl Command {
    /// Whether this command only changes local state (no backend call).
    pub fn is_local(&self) -> bool {
        !matches!(self, Command::Activate | Command::Reload)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::FocusNext => "focus_next",
            Command::FocusPrev => "focus_prev",
            Command::Activate => "activate",
            Command::InsertChar(_) => "insert_char",
            Command::Backspace => "backspace",
            Command::Back => "back",
            Command::DismissToast => "dismiss_toast",
            Command::Reload => "reload",
            Command::Noop => "noop",
        }
    }
}
