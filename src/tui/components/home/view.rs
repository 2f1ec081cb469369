use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::tui::components::footer::Footer;
use crate::tui::style::{BORDER_STYLE, DIMMED_STYLE, HIGHLIGHT_STYLE, TITLE_STYLE};

/// Landing screen
pub struct Home<'a> {
    backend: &'a str,
    has_result: bool,
}

impl<'a> Home<'a> {
    pub fn new(backend: &'a str, has_result: bool) -> Self {
        Self {
            backend,
            has_result,
        }
    }

    pub fn footer(&self) -> Footer<'static> {
        let footer = Footer::new("Home").hint("enter", "start");
        let footer = if self.has_result {
            footer.hint("r", "last result")
        } else {
            footer
        };
        footer.hint("q", "quit")
    }
}

impl Widget for Home<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::raw(""),
            Line::styled("INFERENCE HUB", TITLE_STYLE),
            Line::styled("Neural interface", DIMMED_STYLE),
            Line::raw(""),
            Line::from(vec![
                Span::styled("◈ ", HIGHLIGHT_STYLE),
                Span::raw("ANALYZE   "),
                Span::styled("◆ ", HIGHLIGHT_STYLE),
                Span::raw("PROCESS   "),
                Span::styled("◇ ", HIGHLIGHT_STYLE),
                Span::raw("EXECUTE"),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Backend: ", DIMMED_STYLE),
                Span::raw(self.backend),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(BORDER_STYLE),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
