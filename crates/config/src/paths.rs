//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the daemon configuration path and the tool's own state path.
//! - Use the `directories` crate for platform-appropriate locations.
//!
//! Does NOT handle:
//! - File I/O operations (see `manager` and `keymapper_core::document`).

use std::path::PathBuf;

use anyhow::Context;

use keymapper_core::document::CONFIG_FILE_NAME;

/// Default path of the daemon configuration this tool appends to.
///
/// Linux/macOS: `~/.config/keymapper.conf`. The daemon reads it from the
/// top of the user config directory, not from a per-app subdirectory.
pub fn daemon_config_path() -> Result<PathBuf, anyhow::Error> {
    let base = directories::BaseDirs::new().context("Failed to determine user directories")?;
    Ok(base.config_dir().join(CONFIG_FILE_NAME))
}

/// Default path of this tool's own persisted UI state.
///
/// Linux/macOS: `~/.config/keymapper-tui/state.json`.
pub fn default_state_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "keymapper-tui")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.config_dir().join("state.json"))
}
