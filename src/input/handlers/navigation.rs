//! Navigation command handlers: focus movement and stepping back.

use crate::app::Panel;
use crate::input::Command;

/// Handles focus and back commands.
///
/// Returns `true` if the command changed anything.
pub fn handle_navigation_command(panel: &Panel, cmd: &Command) -> bool {
    match cmd {
        Command::FocusNext => {
            panel.focus_next();
            true
        }
        Command::FocusPrev => {
            panel.focus_prev();
            true
        }
        Command::Back => panel.back(),
        _ => false,
    }
}
