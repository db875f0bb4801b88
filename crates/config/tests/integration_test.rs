//! Integration tests across state persistence and the legacy save file.

use std::path::PathBuf;

use keymapper_config::{ColorTheme, PersistedState, StateManager, load_legacy, save_legacy};
use keymapper_core::model::{ContextKind, ContextSelector, MappingEntry};

#[test]
fn state_survives_a_simulated_restart() {
    let dir = tempfile::tempdir().unwrap();
    let state_path = dir.path().join("state.json");

    let mut state = PersistedState::default();
    state.config_path = Some(PathBuf::from("/tmp/keymapper.conf"));
    state.color_theme = ColorTheme::HighContrast;
    state.context = ContextSelector::new(ContextKind::Device, "kbd1");
    state.stop_on_failure.0 = false;

    StateManager::new(state_path.clone()).save(&state).unwrap();

    // Fresh manager, as after a restart.
    let reloaded = StateManager::new(state_path).load();
    assert_eq!(reloaded, state);
}

#[test]
fn legacy_round_trip_matches_original_tool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymapper_config.json");

    save_legacy(&path, &[MappingEntry::new("a", "b")]).unwrap();
    let entries = load_legacy(&path).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].input, "a");
    assert_eq!(entries[0].output, "b");
}

#[test]
fn legacy_file_written_by_the_old_tool_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymapper_config.json");
    std::fs::write(
        &path,
        r#"[
    {
        "from": "capslock",
        "to": "esc"
    },
    {
        "from": "ctrl,c",
        "to": "ctrl,shift,c"
    }
]"#,
    )
    .unwrap();

    let entries = load_legacy(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].input, "ctrl,c");
}
