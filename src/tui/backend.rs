//! Terminal setup for the TUI.
//!
//! A screen is drawn below the prompt when it fits the terminal, otherwise on
//! the alternate screen. The terminal is restored on drop.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};

type Backend = CrosstermBackend<Stdout>;

/// Where a screen of a given height is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Below the prompt, taking this many rows.
    Inline(u16),
    Fullscreen,
}

impl Placement {
    /// Inline needs one spare row for the prompt line.
    pub(crate) fn choose(height: u16, rows: u16) -> Self {
        if height < rows {
            Placement::Inline(height)
        } else {
            Placement::Fullscreen
        }
    }

    fn viewport(self) -> Viewport {
        match self {
            Placement::Inline(height) => Viewport::Inline(height),
            Placement::Fullscreen => Viewport::Fullscreen,
        }
    }

    fn open(self) -> io::Result<Terminal<Backend>> {
        if self == Placement::Fullscreen {
            execute!(io::stdout(), EnterAlternateScreen)?;
        }
        let options = TerminalOptions {
            viewport: self.viewport(),
        };
        Terminal::with_options(CrosstermBackend::new(io::stdout()), options)
    }

    fn close(self) -> io::Result<()> {
        match self {
            Placement::Inline(height) => execute!(
                io::stdout(),
                cursor::MoveUp(height),
                Clear(ClearType::FromCursorDown),
            ),
            Placement::Fullscreen => execute!(io::stdout(), LeaveAlternateScreen),
        }
    }
}

fn terminal_rows() -> io::Result<u16> {
    terminal::size().map(|(_, rows)| rows)
}

/// Raw-mode terminal whose viewport follows the height of the current screen.
pub struct ScreenTerminal {
    terminal: Terminal<Backend>,
    placement: Placement,
}

impl ScreenTerminal {
    pub fn new(height: u16) -> io::Result<Self> {
        let placement = Placement::choose(height, terminal_rows()?);
        terminal::enable_raw_mode()?;
        Ok(Self {
            terminal: placement.open()?,
            placement,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }

    /// Rebuild the viewport if a screen of `height` rows, or a resized
    /// terminal, needs a different placement.
    pub fn fit(&mut self, height: u16) -> io::Result<()> {
        let next = Placement::choose(height, terminal_rows()?);
        if next == self.placement {
            return Ok(());
        }
        tracing::debug!("Viewport {:?} -> {next:?}", self.placement);
        self.placement.close()?;
        self.terminal = next.open()?;
        self.placement = next;
        Ok(())
    }
}

impl Drop for ScreenTerminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = self.placement.close();
        let _ = io::stdout().flush();
    }
}
