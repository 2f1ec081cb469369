use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions for text input UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    Cancel,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    BackWord,
    Clear,
    Insert(char),
    None,
}

impl InputAction {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::Cancel,
            KeyCode::Backspace => InputAction::Backspace,
            KeyCode::Delete => InputAction::Delete,
            KeyCode::Left => InputAction::Left,
            KeyCode::Right => InputAction::Right,
            KeyCode::Home => InputAction::Home,
            KeyCode::End => InputAction::End,
            KeyCode::Char('a') if ctrl => InputAction::Home,
            KeyCode::Char('e') if ctrl => InputAction::End,
            KeyCode::Char('b') if ctrl => InputAction::BackWord,
            KeyCode::Char('u') if ctrl => InputAction::Clear,
            KeyCode::Char(_) if ctrl => InputAction::None,
            KeyCode::Char(c) => InputAction::Insert(c),
            _ => InputAction::None,
        }
    }

    /// Whether the action changes the text or cursor.
    pub fn is_edit(&self) -> bool {
        !matches!(
            self,
            InputAction::Submit | InputAction::Cancel | InputAction::None
        )
    }
}

/// Result from input state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    Submit,
    Cancel,
}

/// Characters that act as word boundaries for cursor navigation
const WORD_BOUNDARIES: &[char] = &[' ', '\\', '/', ':', '.', '_', '-'];

/// Single line text field. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    input: String,
    cursor: usize,
}

impl InputState {
    pub fn new(default: Option<&str>) -> Self {
        let input = default.unwrap_or("").to_string();
        let cursor = input.chars().count();
        Self { input, cursor }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.input[..self.byte_offset(self.cursor)]
    }

    /// Byte offset of the character at `index`.
    fn byte_offset(&self, index: usize) -> usize {
        self.input
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    /// Handle an input action, returns Some if the interaction is complete
    pub fn handle(&mut self, action: InputAction) -> Option<InputResult> {
        match action {
            InputAction::Submit => return Some(InputResult::Submit),
            InputAction::Cancel => return Some(InputResult::Cancel),
            InputAction::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let offset = self.byte_offset(self.cursor);
                    self.input.remove(offset);
                }
            }
            InputAction::Delete => {
                if self.cursor < self.char_count() {
                    let offset = self.byte_offset(self.cursor);
                    self.input.remove(offset);
                }
            }
            InputAction::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            InputAction::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
            }
            InputAction::Home => {
                self.cursor = 0;
            }
            InputAction::End => {
                self.cursor = self.char_count();
            }
            InputAction::BackWord => {
                self.cursor = self.find_prev_boundary();
            }
            InputAction::Clear => {
                self.input.clear();
                self.cursor = 0;
            }
            InputAction::Insert(c) => {
                let offset = self.byte_offset(self.cursor);
                self.input.insert(offset, c);
                self.cursor += 1;
            }
            InputAction::None => {}
        }
        None
    }

    fn find_prev_boundary(&self) -> usize {
        if self.cursor == 0 {
            return 0;
        }
        let chars: Vec<char> = self.input.chars().take(self.cursor - 1).collect();
        chars
            .iter()
            .rposition(|c| WORD_BOUNDARIES.contains(c))
            .map(|p| p + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_new_empty() {
        let state = InputState::new(None);
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_input_state_new_with_default() {
        let state = InputState::new(Some("hello"));
        assert_eq!(state.text(), "hello");
        assert_eq!(state.cursor(), 5); // Cursor at end
    }

    #[test]
    fn test_input_insert() {
        let mut state = InputState::new(None);
        state.handle(InputAction::Insert('a'));
        state.handle(InputAction::Insert('b'));
        assert_eq!(state.text(), "ab");
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_input_backspace() {
        let mut state = InputState::new(Some("abc"));
        state.handle(InputAction::Backspace);
        assert_eq!(state.text(), "ab");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = InputState::new(Some("vidéo"));
        state.handle(InputAction::Left);
        state.handle(InputAction::Insert('x'));
        assert_eq!(state.text(), "vidéxo");
        state.handle(InputAction::Backspace);
        state.handle(InputAction::Backspace);
        assert_eq!(state.text(), "vido");
        assert_eq!(state.cursor(), 3);
        state.handle(InputAction::Delete);
        assert_eq!(state.text(), "vid");
    }

    #[test]
    fn test_back_word_stops_at_separators() {
        let mut state = InputState::new(Some(r"D:\videos\clip"));
        state.handle(InputAction::BackWord);
        assert_eq!(state.cursor(), 10);
        state.handle(InputAction::BackWord);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut state = InputState::new(Some("test"));
        assert_eq!(state.handle(InputAction::Submit), Some(InputResult::Submit));
        assert_eq!(state.handle(InputAction::Cancel), Some(InputResult::Cancel));
        assert_eq!(state.text(), "test");
    }

    #[test]
    fn test_clear() {
        let mut state = InputState::new(Some("test"));
        state.handle(InputAction::Clear);
        assert!(state.is_empty());
        assert_eq!(state.cursor(), 0);
    }
}
