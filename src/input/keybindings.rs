//! Default keybindings.
//!
//! Two tables: bindings that apply everywhere, and bindings for moving
//! between and activating controls. Printable characters are not bound;
//! the registry turns them into text input when an input has focus.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Focus movement and activation
    pub navigation: HashMap<KeyCombo, Command>,
    /// Only when the focused control is not a text input
    pub browsing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            navigation: HashMap::new(),
            browsing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_navigation_bindings();
        config.setup_browsing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('r')), Command::Reload);
    }

    fn setup_navigation_bindings(&mut self) {
        let nav = &mut self.navigation;
        nav.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        nav.insert(KeyCombo::plain(KeyCode::Down), Command::FocusNext);
        // Terminals report Shift+Tab as BackTab, with or without SHIFT
        nav.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        nav.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        nav.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrev);
        nav.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        nav.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
    }

    fn setup_browsing_bindings(&mut self) {
        self.browsing
            .insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.browsing
            .insert(KeyCombo::plain(KeyCode::Char('j')), Command::FocusNext);
        self.browsing
            .insert(KeyCombo::plain(KeyCode::Char('k')), Command::FocusPrev);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_navigation(&self, combo: &KeyCombo) -> Option<Command> {
        self.navigation.get(combo).copied()
    }

    pub fn get_browsing(&self, combo: &KeyCombo) -> Option<Command> {
        self.browsing.get(combo).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_quits() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::ctrl(KeyCode::Char('c'))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_back_tab_with_and_without_shift() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_navigation(&KeyCombo::plain(KeyCode::BackTab)),
            Some(Command::FocusPrev)
        );
        assert_eq!(
            config.get_navigation(&KeyCombo::shift(KeyCode::BackTab)),
            Some(Command::FocusPrev)
        );
    }

    #[test]
    fn test_plain_letters_are_not_global() {
        let config = KeybindingConfig::new();
        assert!(config
            .get_global(&KeyCombo::plain(KeyCode::Char('q')))
            .is_none());
        assert_eq!(
            config.get_browsing(&KeyCombo::plain(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
    }
}
