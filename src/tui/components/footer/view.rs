use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::helpers::{context_span, key_hint, layouts};
use crate::tui::style::{APP_NAME, FOOTER_STYLE, LABEL_STYLE};

/// Bottom bar: screen label and key hints on the left, an optional status
/// and the app name on the right
pub struct Footer<'a> {
    context: &'a str,
    hints: Vec<(&'a str, &'a str)>,
    status: Option<Span<'a>>,
}

impl<'a> Footer<'a> {
    pub fn new(context: &'a str) -> Self {
        Self {
            context,
            hints: Vec::new(),
            status: None,
        }
    }

    pub fn hint(mut self, key: &'a str, action: &'a str) -> Self {
        self.hints.push((key, action));
        self
    }

    pub fn status(mut self, status: Span<'a>) -> Self {
        self.status = Some(status);
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left = vec![context_span(self.context)];
        for (key, action) in self.hints {
            left.extend(key_hint(key, action));
        }

        let mut right = Vec::with_capacity(3);
        if let Some(status) = self.status {
            right.push(status);
            right.push(Span::raw(" "));
        }
        right.push(Span::styled(format!(" {APP_NAME} "), LABEL_STYLE));

        let [left_area, right_area] = layouts::footer_columns(area);
        Paragraph::new(Line::from(left))
            .style(FOOTER_STYLE)
            .render(left_area, buf);
        Paragraph::new(Line::from(right).right_aligned())
            .style(FOOTER_STYLE)
            .render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_layout() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        Footer::new("Input")
            .hint("enter", "analyze")
            .status(Span::raw("3 chars"))
            .render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(" Input  enter analyze "), "{row}");
        assert!(row.trim_end().ends_with("3 chars  inference-hub"), "{row}");
    }
}
