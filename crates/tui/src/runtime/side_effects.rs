//! Async side-effect handlers for file and external-command actions.
//!
//! Responsibilities:
//! - Execute trigger actions off the UI loop: config append/load, legacy
//!   JSON save/load, the per-entry apply batch, and the daemon restart.
//! - Send exactly one completion action back on the channel per trigger.
//!
//! Does NOT handle:
//! - State mutations or toasts (see `App::update`).
//!
//! Invariants:
//! - File work runs on the blocking pool; child processes run on the runtime.
//! - A dropped receiver ends the task silently; completions are best-effort.

use tokio::sync::mpsc::Sender;

use keymapper_config::{LegacyError, load_legacy, save_legacy};
use keymapper_core::{Document, DocumentError, MapCommand, ServiceCommand, apply_entries};

use crate::action::Action;

/// Execute one trigger action, sending its completion on `tx`.
///
/// Non-trigger actions are a routing bug; they are logged and dropped.
pub fn handle(action: Action, map_command: MapCommand, tx: Sender<Action>) {
    match action {
        Action::AppendConfig { path, document } => {
            tokio::spawn(async move {
                let count = document.entries().count();
                let result = match tokio::task::spawn_blocking(move || {
                    document.append_to_file(&path).map(|()| count)
                })
                .await
                {
                    Ok(inner) => inner.map_err(|e| e.to_string()),
                    Err(e) => Err(format!("append task failed: {e}")),
                };
                let _ = tx.send(Action::ConfigAppended(result)).await;
            });
        }
        Action::LoadConfig { path } => {
            tokio::spawn(async move {
                let load_path = path.clone();
                let result =
                    tokio::task::spawn_blocking(move || Document::load_from_file(&load_path)).await;
                let completion = match result {
                    Ok(Ok(document)) => Action::ConfigLoaded(Ok(document)),
                    Ok(Err(DocumentError::NotFound(p))) => Action::ConfigMissing(p),
                    Ok(Err(e)) => Action::ConfigLoaded(Err(e.to_string())),
                    Err(e) => Action::ConfigLoaded(Err(format!("load task failed: {e}"))),
                };
                let _ = tx.send(completion).await;
            });
        }
        Action::SaveJson { path, entries } => {
            tokio::spawn(async move {
                let count = entries.len();
                let result = match tokio::task::spawn_blocking(move || {
                    save_legacy(&path, &entries).map(|()| count)
                })
                .await
                {
                    Ok(inner) => inner.map_err(|e| e.to_string()),
                    Err(e) => Err(format!("save task failed: {e}")),
                };
                let _ = tx.send(Action::JsonSaved(result)).await;
            });
        }
        Action::LoadJson { path } => {
            tokio::spawn(async move {
                let load_path = path.clone();
                let result = tokio::task::spawn_blocking(move || load_legacy(&load_path)).await;
                let completion = match result {
                    Ok(Ok(entries)) => Action::JsonLoaded(Ok(entries)),
                    Ok(Err(LegacyError::NotFound(p))) => Action::JsonMissing(p),
                    Ok(Err(e)) => Action::JsonLoaded(Err(e.to_string())),
                    Err(e) => Action::JsonLoaded(Err(format!("load task failed: {e}"))),
                };
                let _ = tx.send(completion).await;
            });
        }
        Action::ApplyEntries { entries, options } => {
            tokio::spawn(async move {
                let report = apply_entries(&map_command, &entries, options).await;
                let _ = tx.send(Action::ApplyFinished(report)).await;
            });
        }
        Action::RestartService => {
            tokio::spawn(async move {
                let result = ServiceCommand::default()
                    .restart()
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::ServiceRestarted(result)).await;
            });
        }
        other => {
            tracing::warn!(action = ?other, "Non-trigger action routed to side effects");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymapper_core::{ApplyOptions, ContextSelector, MappingEntry};
    use std::path::PathBuf;
    use tokio::sync::mpsc::channel;

    #[tokio::test]
    async fn append_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keymapper.conf");
        let document = Document::single(
            ContextSelector::default(),
            vec![MappingEntry::new("capslock", "esc")],
        );

        let (tx, mut rx) = channel(8);
        handle(
            Action::AppendConfig {
                path: path.clone(),
                document,
            },
            MapCommand::default(),
            tx,
        );

        match rx.recv().await {
            Some(Action::ConfigAppended(Ok(count))) => assert_eq!(count, 1),
            other => panic!("expected ConfigAppended(Ok), got {other:?}"),
        }
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "capslock >> esc\n"
        );
    }

    #[tokio::test]
    async fn missing_config_is_reported_as_missing() {
        let (tx, mut rx) = channel(8);
        handle(
            Action::LoadConfig {
                path: PathBuf::from("/nonexistent/keymapper.conf"),
            },
            MapCommand::default(),
            tx,
        );

        match rx.recv().await {
            Some(Action::ConfigMissing(p)) => {
                assert_eq!(p, PathBuf::from("/nonexistent/keymapper.conf"));
            }
            other => panic!("expected ConfigMissing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn json_round_trip_through_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keymapper_config.json");

        let (tx, mut rx) = channel(8);
        handle(
            Action::SaveJson {
                path: path.clone(),
                entries: vec![MappingEntry::new("a", "b")],
            },
            MapCommand::default(),
            tx.clone(),
        );
        match rx.recv().await {
            Some(Action::JsonSaved(Ok(count))) => assert_eq!(count, 1),
            other => panic!("expected JsonSaved(Ok), got {other:?}"),
        }

        handle(Action::LoadJson { path }, MapCommand::default(), tx);
        match rx.recv().await {
            Some(Action::JsonLoaded(Ok(entries))) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].input, "a");
            }
            other => panic!("expected JsonLoaded(Ok), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn apply_sends_one_report() {
        let (tx, mut rx) = channel(8);
        handle(
            Action::ApplyEntries {
                entries: vec![MappingEntry::new("a", "b")],
                options: ApplyOptions::default(),
            },
            MapCommand::new("true"),
            tx,
        );

        match rx.recv().await {
            Some(Action::ApplyFinished(report)) => {
                assert!(report.is_success());
                assert_eq!(report.applied(), 1);
            }
            other => panic!("expected ApplyFinished, got {other:?}"),
        }
    }
}
