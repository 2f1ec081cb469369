//! Terminal interface with one screen per [`Screen`](crate::navigation::Screen).

use std::io::{self, IsTerminal};

pub mod app;
mod backend;
pub mod components;
mod helpers;
mod run;
mod style;
mod view;

pub use app::{App, UpdateResult};
pub use run::run;

/// Environment variable that forces non-interactive runs, as set by CI systems.
const CI_ENV: &str = "CI";

/// Whether the TUI should be started.
///
/// Requires a terminal on stdout and neither `--non-interactive` nor `CI`.
pub fn is_interactive(non_interactive_flag: bool) -> bool {
    !non_interactive_flag && std::env::var_os(CI_ENV).is_none() && io::stdout().is_terminal()
}
