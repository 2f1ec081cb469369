use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::model::{ResultState, ResultText};
use crate::tui::components::footer::Footer;
use crate::tui::style::{BORDER_STYLE, DIMMED_STYLE, TITLE_STYLE};

/// Result screen showing the payload of the last successful submission
pub struct ResultView<'a> {
    text: &'a ResultText,
    state: ResultState,
}

impl<'a> ResultView<'a> {
    pub fn new(text: &'a ResultText, state: ResultState) -> Self {
        Self { text, state }
    }

    pub fn footer(&self) -> Footer<'static> {
        let lines = format!("{} lines", self.text.lines.len());
        Footer::new("Result")
            .hint("n", "new analysis")
            .hint("r", "reset")
            .hint("h", "home")
            .status(Span::styled(lines, DIMMED_STYLE))
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body: Vec<Line> = self
            .text
            .lines
            .iter()
            .map(|line| Line::raw(line.as_str()))
            .collect();
        Paragraph::new(body)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(BORDER_STYLE)
                    .title(Line::styled(format!(" {} ", self.text.title), TITLE_STYLE)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll(), 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ResultPayload;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_render_report() {
        let payload = ResultPayload::text("ANALYSIS COMPLETE\nInput: hello world\nWord count: 2");
        let text = ResultText::from_payload(&payload);
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| {
                ResultView::new(&text, ResultState::default())
                    .render(frame.area(), frame.buffer_mut());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        };
        assert!(row(0).contains(" ANALYSIS COMPLETE "));
        assert_eq!(row(1), "Input: hello world");
        assert_eq!(row(2), "Word count: 2");
    }
}
