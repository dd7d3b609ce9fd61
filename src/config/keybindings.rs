//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Shifted letters are reported by some terminals with and some without
    /// the SHIFT modifier, so character keys fall back to a lookup without
    /// modifiers.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&key).copied().or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers == KeyModifiers::SHIFT => self
                .bindings
                .get(&KeyEvent::new(key.code, KeyModifiers::NONE))
                .copied(),
            _ => None,
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Movement
        keys.bind(KeyCode::Char('k'), none, KeyAction::MoveUp);
        keys.bind(KeyCode::Up, none, KeyAction::MoveUp);
        keys.bind(KeyCode::Char('j'), none, KeyAction::MoveDown);
        keys.bind(KeyCode::Down, none, KeyAction::MoveDown);
        keys.bind(KeyCode::Char('g'), none, KeyAction::MoveFirst);
        keys.bind(KeyCode::Home, none, KeyAction::MoveFirst);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::MoveLast);
        keys.bind(KeyCode::End, none, KeyAction::MoveLast);

        // Form focus
        keys.bind(KeyCode::Tab, none, KeyAction::NextField);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevField);

        // Activation
        keys.bind(KeyCode::Enter, none, KeyAction::Activate);
        keys.bind(KeyCode::Char(' '), none, KeyAction::Activate);
        keys.bind(KeyCode::Esc, none, KeyAction::Back);
        keys.bind(KeyCode::Backspace, none, KeyAction::Back);

        // Detail actions
        keys.bind(KeyCode::Char('e'), none, KeyAction::ComposeEmail);
        keys.bind(KeyCode::Char('w'), none, KeyAction::OpenWhatsapp);

        // Application
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_keys_move() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('j'))), Some(KeyAction::MoveDown));
        assert_eq!(bindings.get(key(KeyCode::Down)), Some(KeyAction::MoveDown));
        assert_eq!(bindings.get(key(KeyCode::Char('k'))), Some(KeyAction::MoveUp));
        assert_eq!(bindings.get(key(KeyCode::Up)), Some(KeyAction::MoveUp));
    }

    #[test]
    fn enter_and_space_activate() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Enter)), Some(KeyAction::Activate));
        assert_eq!(bindings.get(key(KeyCode::Char(' '))), Some(KeyAction::Activate));
    }

    #[test]
    fn detail_actions_are_bound() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('e'))),
            Some(KeyAction::ComposeEmail)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('w'))),
            Some(KeyAction::OpenWhatsapp)
        );
    }

    #[test]
    fn shift_g_moves_last_with_or_without_modifier() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::MoveLast)
        );
    }

    #[test]
    fn shifted_question_mark_opens_help() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(KeyAction::Help)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'))), None);
    }
}
