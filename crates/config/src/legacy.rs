//! Legacy JSON save-file support (`keymapper_config.json`).
//!
//! The older tool saved its rows as a pretty-printed array of
//! `{ "from": ..., "to": ... }` objects. The text grammar is the canonical
//! persistence now; this format is kept only as an interchange so existing
//! save files still load and other tooling can keep consuming it.
//!
//! Invariants:
//! - Only the raw text fields round-trip; kinds load as `Single`.
//! - A missing file is a distinct, recoverable condition.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use keymapper_core::model::MappingEntry;

/// One record of the legacy save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMapping {
    pub from: String,
    pub to: String,
}

/// Default file name of the legacy save file.
pub const LEGACY_FILE_NAME: &str = "keymapper_config.json";

/// Errors from legacy save-file handling.
#[derive(Debug, Error)]
pub enum LegacyError {
    /// No save file yet. Reported as a warning, not fatal.
    #[error("no configuration file found: {0}")]
    NotFound(PathBuf),

    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write entries as the legacy pretty-printed JSON array.
///
/// Only the raw text fields are written, matching the original format.
pub fn save_legacy(path: &Path, entries: &[MappingEntry]) -> Result<(), LegacyError> {
    let records: Vec<LegacyMapping> = entries
        .iter()
        .map(|e| LegacyMapping {
            from: e.input.clone(),
            to: e.output.clone(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&records).map_err(|source| LegacyError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| LegacyError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = records.len(), "Saved legacy mapping file");
    Ok(())
}

/// Load legacy records as entries with both kinds defaulted to `Single`.
///
/// The caller is expected to destroy its current entries and recreate one
/// per record, matching the original load behavior.
pub fn load_legacy(path: &Path) -> Result<Vec<MappingEntry>, LegacyError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LegacyError::NotFound(path.to_path_buf())
        } else {
            LegacyError::Io {
                action: "read",
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records: Vec<LegacyMapping> =
        serde_json::from_str(&text).map_err(|source| LegacyError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(records
        .into_iter()
        .map(|r| MappingEntry::new(r.from, r.to))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymapper_core::model::{InputKind, OutputKind};

    #[test]
    fn save_then_load_reconstructs_raw_texts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LEGACY_FILE_NAME);

        save_legacy(&path, &[MappingEntry::new("a", "b")]).unwrap();
        let loaded = load_legacy(&path).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].input, "a");
        assert_eq!(loaded[0].output, "b");
        assert_eq!(loaded[0].input_kind, InputKind::Single);
        assert_eq!(loaded[0].output_kind, OutputKind::Single);
    }

    #[test]
    fn save_is_pretty_printed_with_original_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LEGACY_FILE_NAME);

        save_legacy(&path, &[MappingEntry::new("capslock", "esc")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.contains("\"from\": \"capslock\""));
        assert!(text.contains("\"to\": \"esc\""));
        assert!(text.contains('\n'), "expected pretty-printed output");
    }

    #[test]
    fn kinds_do_not_survive_the_legacy_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LEGACY_FILE_NAME);

        let mut entry = MappingEntry::new("shift,a", "A");
        entry.input_kind = InputKind::HoldModifier;
        entry.output_kind = OutputKind::CharString;
        save_legacy(&path, &[entry]).unwrap();

        let loaded = load_legacy(&path).unwrap();
        assert_eq!(loaded[0].input, "shift,a");
        assert_eq!(loaded[0].input_kind, InputKind::Single);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            load_legacy(&path),
            Err(LegacyError::NotFound(_))
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LEGACY_FILE_NAME);
        std::fs::write(&path, "{\"from\": \"a\"}").unwrap();
        assert!(matches!(load_legacy(&path), Err(LegacyError::Json { .. })));
    }
}
