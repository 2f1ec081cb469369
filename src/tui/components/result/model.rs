use crossterm::event::{KeyCode, KeyEvent};

use crate::payload::ResultPayload;

const DEFAULT_TITLE: &str = "RESULT";

/// Actions available on the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    NewAnalysis,
    Reset,
    Home,
    ScrollUp,
    ScrollDown,
    Quit,
    None,
}

impl ResultAction {
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => ResultAction::NewAnalysis,
            KeyCode::Char('r') => ResultAction::Reset,
            KeyCode::Esc | KeyCode::Char('h') => ResultAction::Home,
            KeyCode::Up | KeyCode::Char('k') => ResultAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => ResultAction::ScrollDown,
            KeyCode::Char('q') => ResultAction::Quit,
            _ => ResultAction::None,
        }
    }
}

/// A payload split into a heading and body lines for display.
///
/// Text payloads use their first non-empty line as the heading. Structured
/// payloads are shown as pretty JSON below a generic heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultText {
    pub title: String,
    pub lines: Vec<String>,
}

impl ResultText {
    pub fn from_payload(payload: &ResultPayload) -> Self {
        let rendered = payload.render();
        if payload.value().is_string() {
            let mut lines = rendered.lines().skip_while(|l| l.trim().is_empty());
            if let Some(title) = lines.next() {
                return Self {
                    title: title.trim().to_string(),
                    lines: lines.map(str::to_string).collect(),
                };
            }
        }
        Self {
            title: DEFAULT_TITLE.to_string(),
            lines: rendered.lines().map(str::to_string).collect(),
        }
    }
}

/// Scroll offset of the result body
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultState {
    scroll: u16,
}

impl ResultState {
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down, never past the last line.
    pub fn scroll_down(&mut self, line_count: usize) {
        let max = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
        if self.scroll < max {
            self.scroll += 1;
        }
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}
