mod bootstrap;
mod cli;
mod commands;
mod context;
mod input;
mod output;
mod progress;
mod ui;

use clap::Parser;

use crate::cli::Cli;
use crate::context::AppContext;

fn main() {
    if let Err(error) = run() {
        eprintln!("aer error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let flags = cli.global_flags();

    let config = bootstrap::load_config(&flags)?;
    bootstrap::init_tracing(flags.quiet, flags.verbose, &config.logging.level)?;
    tracing::debug!(command = ?cli.command, "aer starting");

    let mut ctx = AppContext::new(config, &flags);
    commands::dispatch(&cli.command, &mut ctx)
}
