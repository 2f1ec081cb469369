//! TUI event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::widgets::Widget;

use super::app::{App, UpdateResult};
use super::backend::ScreenTerminal;

/// How long to wait for a key before redrawing the spinner and polling the
/// in-flight request.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the app until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    let mut term = ScreenTerminal::new(app.terminal_height())?;

    loop {
        term.fit(app.terminal_height())?;

        term.terminal().draw(|frame| {
            let area = frame.area();
            (&app).render(area, frame.buffer_mut());
            if let Some((x, y)) = app.cursor_position(area) {
                frame.set_cursor_position((x, y));
            }
        })?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.update(key) == UpdateResult::Quit
        {
            return Ok(());
        }
        app.tick();
    }
}
