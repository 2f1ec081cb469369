//! Submit inputs to an inference service and show what comes back.
//!
//! The core ([`session::Session`] and the modules below it) is independent of
//! any user interface. The `application` feature adds the command line entry
//! point and the terminal interface on top of it.

pub mod client;
pub mod config;
pub mod controller;
pub mod navigation;
pub mod path;
pub mod payload;
pub mod session;

#[cfg(feature = "application")]
pub mod app;
#[cfg(feature = "application")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
