//! Configuration and persistence for the keymapper front-end.
//!
//! This crate owns everything written under the per-user config directory:
//! the persisted UI state, path resolution, the color theme expansion, and
//! the legacy JSON save-file format kept for interchange with the older
//! tool.

pub mod legacy;
pub mod manager;
pub mod paths;
pub mod state;
pub mod theme;

pub use legacy::{LegacyError, LegacyMapping, load_legacy, save_legacy};
pub use manager::StateManager;
pub use paths::{daemon_config_path, default_state_path};
pub use state::PersistedState;
pub use theme::{ColorTheme, Theme};
