use crate::cli::CliArgs;
use crate::config::Config;

/// Settings for an inference-hub run.
///
/// Holds the resolved configuration and how the session should be driven.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration with command line overrides applied
    pub config: Config,
    /// Input handed over on the command line
    pub prefill: Option<String>,
    /// Allow the interactive TUI
    pub interactive: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            prefill: None,
            interactive: true,
        }
    }

    pub fn with_prefill(mut self, prefill: Option<String>) -> Self {
        self.prefill = prefill;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Apply command line overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        let inference = &mut self.config.inference;
        if let Some(endpoint) = args.endpoint() {
            inference.endpoint = Some(endpoint.to_string());
        }
        if args.simulate() {
            inference.simulate = true;
        }
        if let Some(delay_ms) = args.delay_ms() {
            self.config.simulation.delay_ms = delay_ms;
        }
        self
    }
}
