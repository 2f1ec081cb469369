use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version = CliArgs::unstable_version(), about, long_about = None)]
#[command(name = "inference-hub")]
#[command(next_line_help = true)]
/// Submit inputs to an inference service from your terminal
pub struct CliArgs {
    /// Text or path to analyze. Prefills the input screen when interactive.
    input: Option<String>,
    /// Configuration file to use instead of the default lookup
    #[arg(long)]
    config: Option<PathBuf>,
    /// Inference endpoint, overrides the configured one
    #[arg(long)]
    endpoint: Option<String>,
    /// Use the simulated responder even if an endpoint is configured
    #[arg(long, default_value_t = false)]
    simulate: bool,
    /// Delay of the simulated responder in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Never start the interactive interface
    #[arg(long, default_value_t = false)]
    non_interactive: bool,
    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[allow(unused)]
impl CliArgs {
    /// Surface current version together with the current git revision and date, if available
    fn unstable_version() -> &'static str {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        let date = option_env!("GIT_DATE").unwrap_or("no_date");
        let rev = option_env!("GIT_REV").unwrap_or("no_rev");
        // This is a memory leak, only use sparingly.
        Box::leak(format!("{VERSION} - {date} - {rev}").into_boxed_str())
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn simulate(&self) -> bool {
        self.simulate
    }

    pub fn delay_ms(&self) -> Option<u64> {
        self.delay_ms
    }

    pub fn non_interactive(&self) -> bool {
        self.non_interactive
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}
