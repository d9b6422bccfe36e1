//! Key dispatch.
//!
//! Priority, highest first:
//! 1. global bindings (Ctrl+C, Ctrl+R)
//! 2. Esc dismisses a visible notification before it navigates back
//! 3. navigation bindings (Tab, arrows, Enter, Esc)
//! 4. text input, when the focused control is an input
//! 5. browsing bindings, when it is not

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Translate `key` into a command, or `None` when it means nothing here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return match cmd {
                Command::Reload if !context.signed_in => None,
                other => Some(other),
            };
        }

        if key.code == KeyCode::Esc && context.toast_visible {
            return Some(Command::DismissToast);
        }

        if let Some(cmd) = self.config.get_navigation(&combo) {
            return Some(cmd);
        }

        if context.editing {
            self.dispatch_editing(key)
        } else {
            self.config.get_browsing(&combo)
        }
    }

    fn dispatch_editing(&self, key: KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editing() -> InputContext {
        InputContext {
            editing: true,
            signed_in: true,
            toast_visible: false,
        }
    }

    fn browsing() -> InputContext {
        InputContext {
            editing: false,
            ..editing()
        }
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_c, &editing()), Some(Command::Quit));
        assert_eq!(registry.dispatch(ctrl_c, &browsing()), Some(Command::Quit));
    }

    #[test]
    fn test_characters_type_into_inputs() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &editing()),
            Some(Command::InsertChar('q'))
        );
        let upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(
            registry.dispatch(upper, &editing()),
            Some(Command::InsertChar('Q'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Backspace), &editing()),
            Some(Command::Backspace)
        );
    }

    #[test]
    fn test_q_quits_outside_inputs() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('q')), &browsing()),
            Some(Command::Quit)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Char('x')), &browsing()), None);
    }

    #[test]
    fn test_esc_dismisses_toast_first() {
        let registry = CommandRegistry::new();
        let context = InputContext {
            toast_visible: true,
            ..browsing()
        };
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &context),
            Some(Command::DismissToast)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Esc), &browsing()),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_reload_needs_a_session() {
        let registry = CommandRegistry::new();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_r, &browsing()), Some(Command::Reload));
        let anonymous = InputContext {
            signed_in: false,
            ..editing()
        };
        assert_eq!(registry.dispatch(ctrl_r, &anonymous), None);
    }

    #[test]
    fn test_enter_and_tab_work_in_inputs() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter), &editing()),
            Some(Command::Activate)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Tab), &editing()),
            Some(Command::FocusNext)
        );
    }
}
