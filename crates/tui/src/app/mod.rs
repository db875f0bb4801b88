//! Application state and behavior.
//!
//! Responsibilities:
//! - Hold the mapping entries, context selector, and UI state being edited.
//! - Mutate state in response to actions (`update`) and key events
//!   (`handle_input`).
//! - Render the full frame (`render`).
//!
//! Does NOT handle:
//! - File or process I/O (see `runtime::side_effects`).
//! - Terminal setup (see `main.rs` and `runtime::terminal`).
//!
//! Invariants:
//! - At most one side-effect operation is in flight (`busy`).
//! - Every finished operation produces exactly one toast.

mod editor;
mod input;
mod render;
mod update;

pub use editor::{EditorField, EntryEditor};

use std::path::PathBuf;

use keymapper_config::{ColorTheme, PersistedState, Theme, legacy::LEGACY_FILE_NAME};
use keymapper_config::state::StopOnFailure;
use keymapper_core::{ContextSelector, MappingEntry};

use crate::ui::Toast;

/// Height of the header block in rows.
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the footer hint block in rows.
pub const FOOTER_HEIGHT: u16 = 2;

/// Main application state.
pub struct App {
    /// Mapping entries in document order.
    pub entries: Vec<MappingEntry>,
    /// Context scope applied when appending to the daemon config.
    pub context: ContextSelector,
    /// Index of the selected entry in the table.
    pub selected: usize,
    /// Open entry editor popup, if any.
    pub editor: Option<EntryEditor>,
    /// Typing goes to the context value instead of the table.
    pub editing_context_value: bool,
    /// Active toast notifications.
    pub toasts: Vec<Toast>,
    /// Selected color theme (persisted form).
    pub color_theme: ColorTheme,
    /// Expanded runtime theme.
    pub theme: Theme,
    /// Daemon configuration file path.
    pub config_path: PathBuf,
    /// Legacy JSON save file path.
    pub json_path: PathBuf,
    /// Abort the per-entry apply batch on first failure.
    pub stop_on_failure: bool,
    /// A side-effect operation is in flight.
    pub busy: bool,
}

impl App {
    /// Create the app from persisted state and the resolved config path.
    pub fn new(persisted: PersistedState, config_path: PathBuf) -> Self {
        let color_theme = persisted.color_theme;
        Self {
            entries: Vec::new(),
            context: persisted.context,
            selected: 0,
            editor: None,
            editing_context_value: false,
            toasts: Vec::new(),
            color_theme,
            theme: Theme::from(color_theme),
            config_path,
            json_path: PathBuf::from(LEGACY_FILE_NAME),
            stop_on_failure: persisted.stop_on_failure.0,
            busy: false,
        }
    }

    /// Snapshot the preferences that survive restarts.
    pub fn get_persisted_state(&self) -> PersistedState {
        PersistedState {
            config_path: Some(self.config_path.clone()),
            color_theme: self.color_theme,
            context: self.context.clone(),
            stop_on_failure: StopOnFailure(self.stop_on_failure),
        }
    }

    /// Entry currently selected in the table, if any.
    pub fn selected_entry(&self) -> Option<&MappingEntry> {
        self.entries.get(self.selected)
    }

    /// Clamp the selection after the entry list changed.
    pub(crate) fn clamp_selection(&mut self) {
        if self.entries.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.entries.len() {
            self.selected = self.entries.len() - 1;
        }
    }

    /// Cycle to the next color theme and re-expand it.
    pub fn cycle_theme(&mut self) {
        self.color_theme = self.color_theme.cycle_next();
        self.theme = Theme::from(self.color_theme);
    }
}
