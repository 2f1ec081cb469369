use crate::cli::CliArgs;
use crate::client;
use crate::config::{Config, ConfigError};
use crate::controller::{ControllerError, SubmissionState};
use crate::navigation::{NavigationError, Screen};
use crate::payload::ResultPayload;
use crate::session::Session;
use crate::tui;

use super::state::AppState;

pub type Result<T> = std::result::Result<T, HandlerError>;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Submit(#[from] ControllerError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),

    #[error("{0}")]
    Inference(String),

    #[error("Nothing to submit, pass an input when running non-interactively")]
    MissingInput,
}

/// Main entry point for the application.
///
/// Resolves configuration, picks the inference client and either starts the
/// TUI or submits the command line input once.
pub fn run(args: CliArgs) -> Result<()> {
    let config = Config::load_from(args.config().map(|p| p.as_path()))?;
    let interactive = tui::is_interactive(args.non_interactive());

    let state = AppState::new(config)
        .with_overrides(&args)
        .with_prefill(args.input().map(str::to_string))
        .with_interactive(interactive);
    tracing::debug!("App state: {state:?}");

    let session = Session::new(client::from_config(&state.config));

    if state.interactive {
        let app = tui::App::new(session, state.prefill.as_deref());
        tui::run(app)?;
        return Ok(());
    }

    let input = state.prefill.ok_or(HandlerError::MissingInput)?;
    let mut session = session;
    let payload = submit_once(&mut session, &input)?;
    println!("{payload}");
    Ok(())
}

/// Submit `input` and block until the inference finishes.
pub fn submit_once(session: &mut Session, input: &str) -> Result<ResultPayload> {
    session.go_to(Screen::Input)?;
    session.update_input(input)?;
    session.submit()?;
    session.wait();

    if let SubmissionState::Failed(reason) = session.submission_state() {
        return Err(HandlerError::Inference(reason.clone()));
    }
    session
        .result()
        .cloned()
        .ok_or_else(|| HandlerError::Inference("No result was produced".into()))
}
