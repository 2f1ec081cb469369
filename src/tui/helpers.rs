use ratatui::text::Span;

use super::style::{HIGHLIGHT_STYLE, LABEL_STYLE, SPINNER_FRAMES};

/// Create a styled context label span for footer
pub fn context_span(context: &str) -> Span<'_> {
    Span::styled(format!(" {} ", context), LABEL_STYLE)
}

/// Footer key hint, e.g. ` enter ` followed by `submit`
pub fn key_hint<'a>(key: &'a str, action: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(format!(" {key} "), HIGHLIGHT_STYLE),
        Span::raw(format!("{action} ")),
    ]
}

/// Spinner glyph for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Standard layout helpers for consistent widget structure
pub mod layouts {
    use ratatui::layout::{Constraint, Layout, Rect};

    /// Split area into navigation bar, expandable content and footer bar
    pub fn screen(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Split area into fixed-height content area and the rest
    pub fn fixed_content(area: Rect, content_height: u16) -> (Rect, Rect) {
        let chunks =
            Layout::vertical([Constraint::Length(content_height), Constraint::Min(0)]).split(area);
        (chunks[0], chunks[1])
    }

    /// Split footer into left and right columns
    pub fn footer_columns(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area)
    }
}
