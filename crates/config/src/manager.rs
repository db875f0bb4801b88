//! Reading and writing the persisted UI state.
//!
//! Responsibilities:
//! - Load `PersistedState` from disk, falling back to defaults when the file
//!   is missing.
//! - Back up corrupt state files before overwriting them.
//! - Save atomically (temp file + rename) so the file is never left half
//!   written.
//!
//! Does NOT handle:
//! - Path determination (see `paths`).
//! - The daemon configuration file itself (see `keymapper_core::document`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::state::PersistedState;

/// Manages loading and saving the persisted UI state.
pub struct StateManager {
    state_path: PathBuf,
}

impl StateManager {
    pub fn new(state_path: PathBuf) -> Self {
        Self { state_path }
    }

    /// Returns the path to the state file.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Loads persisted state from disk.
    ///
    /// A missing file yields the default state. A corrupt file is backed up
    /// with a `.corrupt.<timestamp>` suffix and the default state is used;
    /// startup is never blocked by a bad state file.
    pub fn load(&self) -> PersistedState {
        let text = match std::fs::read_to_string(&self.state_path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return PersistedState::default();
            }
            Err(e) => {
                tracing::warn!(path = %self.state_path.display(), error = %e, "Failed to read state file, using defaults");
                return PersistedState::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %self.state_path.display(), error = %e, "Corrupt state file, using defaults");
                match create_corrupt_backup(&self.state_path) {
                    Ok(backup) => {
                        tracing::info!(backup = %backup.display(), "Backed up corrupt state file");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to back up corrupt state file");
                    }
                }
                PersistedState::default()
            }
        }
    }

    /// Saves persisted state to disk atomically.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create state directory")?;
        }

        let temp_path = self.state_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary state file")?;
        std::fs::rename(&temp_path, &self.state_path)
            .context("Failed to rename temporary state file")?;

        tracing::debug!(path = %self.state_path.display(), "State saved atomically");
        Ok(())
    }
}

/// Renames a corrupt file to `<name>.corrupt.<timestamp>` so its contents
/// stay available for recovery.
fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;
    Ok(backup_path)
}
