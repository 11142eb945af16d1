//! snapbtr - keeps btrfs snapshots for backup

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli_lib::{cmd, config, Cli, Settings};
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.explain {
        cmd::explain::run();
        return Ok(());
    }
    if cli.example_config {
        print!("{}", config::example_config());
        return Ok(());
    }

    // Logs go to stderr; stdout carries the run summary
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let file = config::load(cli.config.as_deref())?;
    let settings = match Settings::resolve(&cli, file) {
        Ok(settings) => settings,
        Err(err) => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                format!("{}\n  use --target-freespace, --target-backups, or both", err),
            )
            .exit(),
    };

    cmd::clean::run(&settings)?;
    Ok(())
}
