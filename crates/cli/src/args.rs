//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keymapper-cli")]
#[command(about = "Keymapper CLI - Manage keymapperd configuration from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keymapper-cli export --json keymapper_config.json --context 'device=kbd1'\n  keymapper-cli import --config-path ~/.config/keymapper.conf\n  keymapper-cli check --strict\n  keymapper-cli apply --json keymapper_config.json --keep-going\n  keymapper-cli restart\n"
)]
pub struct Cli {
    /// Path to the daemon configuration file (defaults to the per-user
    /// keymapper.conf)
    #[arg(long, global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Program used for per-entry mapping invocations
    #[arg(long, global = true, default_value = "keymapper", value_name = "PROG")]
    pub map_command: String,

    /// Program used to restart the daemon service
    #[arg(long, global = true, default_value = "systemctl", value_name = "PROG")]
    pub restart_command: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format mappings from a legacy JSON save file and append them to the
    /// daemon configuration
    Export {
        /// Legacy JSON save file to read mappings from
        #[arg(long, default_value = "keymapper_config.json", value_name = "FILE")]
        json: PathBuf,

        /// Context scope, e.g. 'system', 'title=Firefox', 'device=kbd1'
        #[arg(long, value_name = "KIND[=VALUE]")]
        context: Option<String>,
    },

    /// Parse the daemon configuration and print its mappings as legacy JSON
    Import,

    /// Parse and lint the daemon configuration
    Check {
        /// Treat lint warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Run the per-entry mapping command for every mapping in a legacy JSON
    /// save file
    Apply {
        /// Legacy JSON save file to read mappings from
        #[arg(long, default_value = "keymapper_config.json", value_name = "FILE")]
        json: PathBuf,

        /// Continue past failed entries instead of aborting on the first
        /// failure
        #[arg(long)]
        keep_going: bool,
    },

    /// Restart the remapping daemon so it picks up the new configuration
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_programs_match_the_daemon_tooling() {
        let cli = Cli::parse_from(["keymapper-cli", "restart"]);
        assert_eq!(cli.map_command, "keymapper");
        assert_eq!(cli.restart_command, "systemctl");
    }

    #[test]
    fn keep_going_defaults_off() {
        let cli = Cli::parse_from(["keymapper-cli", "apply"]);
        match cli.command {
            Commands::Apply { keep_going, .. } => assert!(!keep_going),
            _ => panic!("expected apply"),
        }
    }
}
