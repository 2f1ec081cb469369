//! Neon palette for the terminal interface.

use ratatui::style::{Color, Modifier, Style};

pub const APP_NAME: &str = "inference-hub";

const NEON_CYAN: Color = Color::Rgb(0, 255, 255);
const NEON_MAGENTA: Color = Color::Rgb(255, 0, 255);
const NEON_RED: Color = Color::Rgb(255, 60, 90);
const MUTED: Color = Color::DarkGray;
const BAR_BG: Color = Color::Rgb(24, 20, 40);
const BAR_FG: Color = Color::Gray;

pub const BORDER_STYLE: Style = Style::new().fg(NEON_MAGENTA).add_modifier(Modifier::DIM);
pub const HIGHLIGHT_STYLE: Style = Style::new().fg(NEON_CYAN).add_modifier(Modifier::BOLD);
pub const TITLE_STYLE: Style = Style::new().fg(NEON_MAGENTA).add_modifier(Modifier::BOLD);
pub const ERROR_STYLE: Style = Style::new().fg(NEON_RED).add_modifier(Modifier::BOLD);
pub const PLACEHOLDER_STYLE: Style = Style::new().fg(MUTED).add_modifier(Modifier::ITALIC);
pub const DIMMED_STYLE: Style = Style::new().fg(MUTED);

/// Active tab in the nav bar and the app name label
pub const LABEL_STYLE: Style = Style::new()
    .bg(NEON_CYAN)
    .fg(Color::Black)
    .add_modifier(Modifier::BOLD);

/// Nav bar and footer background
pub const FOOTER_STYLE: Style = Style::new().bg(BAR_BG).fg(BAR_FG);

pub const INPUT_PROMPT: &str = "❯ ";
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
