use crossterm::event::{KeyCode, KeyEvent};

/// Actions on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    Start,
    ShowResult,
    Quit,
    None,
}

impl HomeAction {
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('s') => HomeAction::Start,
            KeyCode::Char('r') => HomeAction::ShowResult,
            KeyCode::Char('q') | KeyCode::Esc => HomeAction::Quit,
            _ => HomeAction::None,
        }
    }
}
