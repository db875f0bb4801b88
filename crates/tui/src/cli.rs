//! Command-line argument parsing for keymapper-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Path resolution defaults (see `keymapper_config::paths`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for keymapper-tui.
#[derive(Debug, Parser)]
#[command(
    name = "keymapper-tui",
    about = "Terminal front-end for editing keymapperd remapping rules",
    version,
    after_help = "Examples:\n  keymapper-tui\n  keymapper-tui --config-path ~/.config/keymapper.conf\n  keymapper-tui --log-dir /tmp/keymapper-logs\n  keymapper-tui --fresh\n"
)]
pub struct Cli {
    /// Path to the daemon configuration file (defaults to the per-user
    /// keymapper.conf)
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Path to the persisted UI state file
    #[arg(long)]
    pub state_path: Option<PathBuf>,

    /// Program used for per-entry mapping invocations
    #[arg(long, default_value = "keymapper")]
    pub map_command: String,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with fresh state, ignoring any persisted state
    #[arg(long)]
    pub fresh: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_fresh_flag() {
        let cli = Cli::parse_from(["keymapper-tui", "--fresh"]);
        assert!(cli.fresh);
    }

    #[test]
    fn test_cli_fresh_default_false() {
        let cli = Cli::parse_from(["keymapper-tui"]);
        assert!(!cli.fresh);
    }

    #[test]
    fn test_cli_config_path_flag() {
        let cli = Cli::parse_from(["keymapper-tui", "--config-path", "/tmp/k.conf"]);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/k.conf")));
    }

    #[test]
    fn test_cli_map_command_default() {
        let cli = Cli::parse_from(["keymapper-tui"]);
        assert_eq!(cli.map_command, "keymapper");
    }
}
