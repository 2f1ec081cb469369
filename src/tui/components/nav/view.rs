use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::navigation::Screen;
use crate::tui::style::{DIMMED_STYLE, FOOTER_STYLE, LABEL_STYLE, TITLE_STYLE};

/// Top bar listing the screens with the active one highlighted
pub struct NavBar {
    active: Screen,
    has_result: bool,
}

impl NavBar {
    pub fn new(active: Screen, has_result: bool) -> Self {
        Self { active, has_result }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" INFERENCE HUB ", TITLE_STYLE)];
        for (i, screen) in Screen::ALL.iter().enumerate() {
            let label = format!(" F{} {} ", i + 1, screen.label());
            let style = if *screen == self.active {
                LABEL_STYLE
            } else if *screen == Screen::Result && !self.has_result {
                DIMMED_STYLE
            } else {
                FOOTER_STYLE
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, style));
        }
        Paragraph::new(Line::from(spans))
            .style(FOOTER_STYLE)
            .render(area, buf);
    }
}
