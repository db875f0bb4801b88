//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handlers.
//! - Resolve the daemon configuration path once for all commands.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;
use std::path::PathBuf;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    let config_path: PathBuf = match cli.config_path {
        Some(path) => path,
        None => keymapper_config::daemon_config_path()?,
    };

    match cli.command {
        Commands::Export { json, context } => {
            commands::export::run(&config_path, &json, context.as_deref())?;
        }
        Commands::Import => {
            commands::import::run(&config_path)?;
        }
        Commands::Check { strict } => {
            commands::check::run(&config_path, strict)?;
        }
        Commands::Apply { json, keep_going } => {
            commands::apply::run(&cli.map_command, &json, keep_going).await?;
        }
        Commands::Restart => {
            commands::restart::run(&cli.restart_command).await?;
        }
    }

    Ok(())
}
