use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::navigation::Screen;

/// Keys that work on every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    GoTo(Screen),
    Reset,
    Quit,
    None,
}

impl NavAction {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(1) => NavAction::GoTo(Screen::Home),
            KeyCode::F(2) => NavAction::GoTo(Screen::Input),
            KeyCode::F(3) => NavAction::GoTo(Screen::Result),
            KeyCode::Char('r') if ctrl => NavAction::Reset,
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => NavAction::Quit,
            _ => NavAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_navigate() {
        let key = KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE);
        assert_eq!(NavAction::from_key(key), NavAction::GoTo(Screen::Input));
        let key = KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE);
        assert_eq!(NavAction::from_key(key), NavAction::GoTo(Screen::Result));
    }

    #[test]
    fn test_ctrl_keys() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(NavAction::from_key(key), NavAction::Reset);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(NavAction::from_key(key), NavAction::Quit);
    }

    #[test]
    fn test_plain_chars_are_not_global() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(NavAction::from_key(key), NavAction::None);
    }
}
