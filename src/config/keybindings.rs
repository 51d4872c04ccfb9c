//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::ScoringMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Uppercase characters match whether or not the terminal reported SHIFT.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                let toggled = key.modifiers ^ KeyModifiers::SHIFT;
                self.bindings.get(&KeyEvent::new(key.code, toggled)).copied()
            }
            _ => None,
        }
    }

    /// Bind a key event to an action, replacing any existing binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    fn plain(&mut self, code: KeyCode, action: KeyAction) {
        self.bind(KeyEvent::new(code, KeyModifiers::NONE), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.plain(KeyCode::Char('j'), KeyAction::ScrollDown);
        keys.plain(KeyCode::Char('k'), KeyAction::ScrollUp);
        keys.plain(KeyCode::Char('g'), KeyAction::ScrollToTop);
        keys.bind(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::ScrollToBottom,
        );

        // Arrow keys
        keys.plain(KeyCode::Up, KeyAction::ScrollUp);
        keys.plain(KeyCode::Down, KeyAction::ScrollDown);
        keys.plain(KeyCode::Home, KeyAction::ScrollToTop);
        keys.plain(KeyCode::End, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        keys.bind(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        keys.plain(KeyCode::PageDown, KeyAction::PageDown);
        keys.plain(KeyCode::PageUp, KeyAction::PageUp);

        // Ranking tabs
        keys.plain(KeyCode::Tab, KeyAction::NextMode);
        keys.plain(KeyCode::Char('l'), KeyAction::NextMode);
        keys.plain(KeyCode::Right, KeyAction::NextMode);
        keys.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevMode,
        );
        keys.plain(KeyCode::BackTab, KeyAction::PrevMode);
        keys.plain(KeyCode::Char('h'), KeyAction::PrevMode);
        keys.plain(KeyCode::Left, KeyAction::PrevMode);

        // Direct tab selection
        for (digit, mode) in ('1'..='4').zip(ScoringMode::ALL) {
            keys.plain(KeyCode::Char(digit), KeyAction::SelectMode(mode));
        }

        // Mood filter
        keys.plain(KeyCode::Char('m'), KeyAction::CycleMood);
        keys.bind(
            KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT),
            KeyAction::ClearMood,
        );

        // Application controls
        keys.plain(KeyCode::Char('r'), KeyAction::Refresh);
        keys.plain(KeyCode::Char('q'), KeyAction::Quit);
        keys.plain(KeyCode::Esc, KeyAction::Quit);
        keys.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        keys
    }
}
