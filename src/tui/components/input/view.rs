use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::model::InputState;
use crate::controller::SubmissionState;
use crate::tui::components::footer::Footer;
use crate::tui::helpers::{layouts, spinner_frame};
use crate::tui::style::{
    BORDER_STYLE, DIMMED_STYLE, ERROR_STYLE, HIGHLIGHT_STYLE, INPUT_PROMPT, PLACEHOLDER_STYLE,
};

const PLACEHOLDER: &str = "Enter a video path or text to analyze...";

/// Input screen: text field plus submission status
pub struct Input<'a> {
    state: &'a InputState,
    submission: &'a SubmissionState,
    tick: usize,
}

impl<'a> Input<'a> {
    pub fn new(state: &'a InputState, submission: &'a SubmissionState, tick: usize) -> Self {
        Self {
            state,
            submission,
            tick,
        }
    }

    /// Calculate cursor position for the given content area
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let (field_area, _) = layouts::fixed_content(area, 3);
        let offset = Span::raw(INPUT_PROMPT).width() + Span::raw(self.state.before_cursor()).width();
        let cursor_x = field_area.x + (offset as u16).min(field_area.width.saturating_sub(1));
        (cursor_x, field_area.y + 1)
    }

    pub fn footer(&self) -> Footer<'static> {
        let footer = if self.submission.is_pending() {
            Footer::new("Input").hint("F1", "home")
        } else {
            Footer::new("Input")
                .hint("enter", "analyze")
                .hint("esc", "back")
        };
        let count = format!("{} chars", self.state.char_count());
        footer.status(Span::styled(count, DIMMED_STYLE))
    }

    fn status_line(&self) -> Line<'a> {
        match self.submission {
            SubmissionState::Pending => Line::from(vec![
                Span::styled(format!("{} ", spinner_frame(self.tick)), HIGHLIGHT_STYLE),
                Span::styled("PROCESSING DATA...", HIGHLIGHT_STYLE),
            ]),
            SubmissionState::Failed(reason) => {
                Line::from(vec![Span::styled(format!("✗ {reason}"), ERROR_STYLE)])
            }
            SubmissionState::Idle => Line::styled("Ready", DIMMED_STYLE),
        }
    }
}

impl Widget for Input<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (field_area, status_area) = layouts::fixed_content(area, 3);

        let text_style = if self.submission.is_pending() {
            DIMMED_STYLE
        } else {
            Style::new()
        };
        let display_text = if self.state.is_empty() {
            Line::from(vec![
                Span::raw(INPUT_PROMPT),
                Span::styled(PLACEHOLDER, PLACEHOLDER_STYLE),
            ])
        } else {
            Line::from(vec![
                Span::raw(INPUT_PROMPT),
                Span::styled(self.state.text(), text_style),
            ])
        };
        Paragraph::new(display_text)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(BORDER_STYLE),
            )
            .render(field_area, buf);

        Paragraph::new(self.status_line()).render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &InputState, submission: &SubmissionState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
        terminal
            .draw(|frame| {
                Input::new(state, submission, 0).render(frame.area(), frame.buffer_mut());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            for x in 0..buffer.area.width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_render_placeholder() {
        let output = render(&InputState::new(None), &SubmissionState::Idle);
        assert!(output.contains(PLACEHOLDER));
        assert!(output.contains("Ready"));
    }

    #[test]
    fn test_render_pending() {
        let state = InputState::new(Some("clip.mp4"));
        let output = render(&state, &SubmissionState::Pending);
        assert!(output.contains("❯ clip.mp4"));
        assert!(output.contains("PROCESSING DATA..."));
    }

    #[test]
    fn test_render_failure() {
        let state = InputState::new(None);
        let failed = SubmissionState::Failed("Request failed with status 500".into());
        let output = render(&state, &failed);
        assert!(output.contains("✗ Request failed with status 500"));
    }

    #[test]
    fn test_cursor_after_prompt_and_text() {
        let state = InputState::new(Some("ab"));
        let area = Rect::new(0, 0, 40, 5);
        let input = Input::new(&state, &SubmissionState::Idle, 0);
        assert_eq!(input.cursor_position(area), (4, 1));
    }
}
