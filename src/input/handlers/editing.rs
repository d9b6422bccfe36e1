//! Text input handlers.

use crate::app::Panel;
use crate::input::Command;

/// Handles typing into the focused input.
///
/// Returns `true` if an input had focus and was edited.
pub fn handle_editing_command(panel: &Panel, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => panel.type_char(*c),
        Command::Backspace => panel.backspace(),
        _ => false,
    }
}
