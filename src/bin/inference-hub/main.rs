use clap::Parser;
use color_eyre::eyre;
use inference_hub::cli::CliArgs;

mod log;

fn main() -> eyre::Result<()> {
    let args = CliArgs::parse();

    if std::env::var("NO_COLOR").is_err() {
        color_eyre::install()?;
    } else {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    }

    if let Err(e) = log::init(args.log_file().cloned()) {
        eprintln!("Logging disabled: {e}");
    }
    tracing::debug!("Cli args: {args:?}");

    inference_hub::app::run(args)?;

    Ok(())
}
