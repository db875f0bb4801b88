//! Persisted UI state.
//!
//! Responsibilities:
//! - Define the user preferences that survive application restarts.
//!
//! Does NOT handle:
//! - Reading or writing the file (see `manager`).
//! - The mapping entries themselves; the daemon config file and the legacy
//!   JSON save file are their persistence, not this state.
//!
//! Invariants:
//! - Unknown fields in older state files are ignored; missing fields take
//!   their defaults (`serde(default)`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use keymapper_core::model::ContextSelector;

use crate::theme::ColorTheme;

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Save target for the daemon configuration. `None` means the default
    /// per-user path.
    pub config_path: Option<PathBuf>,
    /// Selected color theme (expanded to a full `Theme` at runtime).
    pub color_theme: ColorTheme,
    /// The context selector the editor last used.
    pub context: ContextSelector,
    /// Per-entry apply: abort remaining invocations on first failure.
    pub stop_on_failure: StopOnFailure,
}

/// Wrapper so the flag defaults to true when absent from older state files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopOnFailure(pub bool);

impl Default for StopOnFailure {
    fn default() -> Self {
        Self(true)
    }
}
