use anyhow::Context;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<aer_config::AerConfig> {
    aer_config::AerConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load aer configuration")
}

/// Set up the `tracing` subscriber. `AER_LOG` wins over flags and config.
pub fn init_tracing(quiet: bool, verbose: bool, configured_level: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured_level
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
