use std::{fs, io, path::PathBuf, sync::Mutex};

use tracing::Level;
use tracing_subscriber::{FmtSubscriber, filter::EnvFilter};

const LOG_ENV: &str = "IH_LOG";
const DEFAULT_LOG_FILE: &str = "/tmp/inference-hub/inference-hub.log";

/// Route all tracing output into `log_file`, the terminal belongs to the TUI.
pub(crate) fn init(log_file: Option<PathBuf>) -> Result<(), io::Error> {
    let path = log_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(&path)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_writer(Mutex::new(file))
        .with_thread_names(true)
        .with_ansi(false)
        .with_line_number(true);

    let result = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(env_filter) => {
            tracing::subscriber::set_global_default(subscriber.with_env_filter(env_filter).finish())
        }
        Err(_) => tracing::subscriber::set_global_default(subscriber.finish()),
    };
    result.map_err(io::Error::other)
}
