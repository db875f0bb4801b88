//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and results of async file or
//! external-command operations. They flow through one bounded channel from
//! the input task and spawned side-effect tasks into the main loop, which
//! routes triggers to `runtime::side_effects` and everything else to
//! `App::update`.

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use keymapper_core::{ApplyOptions, ApplyReport, Document, MappingEntry};

/// Unified action type for async TUI event handling.
#[derive(Debug)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// UI tick for toast expiry
    Tick,

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),

    // Side-effect triggers
    /// Append the rendered document to the daemon configuration file
    AppendConfig { path: PathBuf, document: Document },
    /// Load and parse the daemon configuration file
    LoadConfig { path: PathBuf },
    /// Save entries as the legacy JSON format
    SaveJson {
        path: PathBuf,
        entries: Vec<MappingEntry>,
    },
    /// Load entries from the legacy JSON format
    LoadJson { path: PathBuf },
    /// Run the mapping command for each entry
    ApplyEntries {
        entries: Vec<MappingEntry>,
        options: ApplyOptions,
    },
    /// Restart the remapping daemon
    RestartService,

    // Side-effect results
    /// Result of appending to the daemon configuration (count of mappings)
    ConfigAppended(Result<usize, String>),
    /// Result of loading the daemon configuration
    ConfigLoaded(Result<Document, String>),
    /// The daemon configuration file does not exist yet
    ConfigMissing(PathBuf),
    /// Result of saving the legacy JSON file (count of mappings)
    JsonSaved(Result<usize, String>),
    /// Result of loading the legacy JSON file
    JsonLoaded(Result<Vec<MappingEntry>, String>),
    /// The legacy JSON file does not exist yet
    JsonMissing(PathBuf),
    /// Per-entry apply batch finished
    ApplyFinished(ApplyReport),
    /// Daemon restart finished
    ServiceRestarted(Result<(), String>),
}

impl Action {
    /// True for actions that `runtime::side_effects` executes; everything
    /// else is routed to `App::update`.
    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            Action::AppendConfig { .. }
                | Action::LoadConfig { .. }
                | Action::SaveJson { .. }
                | Action::LoadJson { .. }
                | Action::ApplyEntries { .. }
                | Action::RestartService
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_are_classified() {
        assert!(Action::RestartService.is_trigger());
        assert!(
            Action::LoadConfig {
                path: PathBuf::from("/tmp/k.conf")
            }
            .is_trigger()
        );
        assert!(!Action::Quit.is_trigger());
        assert!(!Action::Tick.is_trigger());
        assert!(!Action::ServiceRestarted(Ok(())).is_trigger());
    }
}
