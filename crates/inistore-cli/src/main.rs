//! `inistore` entry point.
//!
//! # What happens at startup
//!
//! 1. CLI arguments are parsed with `clap` into a [`Cli`] struct.
//! 2. The tool configuration is loaded (see [`inistore_cli::config`]).
//! 3. `tracing_subscriber` is initialised.  The level comes from `RUST_LOG`
//!    if set, otherwise from `logging.log_level` in the config file.  Logs go
//!    to stderr so command output on stdout can be piped.
//! 4. The command runs and its output is printed.

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use inistore_cli::cli::Cli;
use inistore_cli::commands;
use inistore_cli::config::load_config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load inistore config")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(file = %cli.file.display(), command = ?cli.command, "running");

    let output = commands::run(&cli, &config)?;
    print!("{output}");
    Ok(())
}
