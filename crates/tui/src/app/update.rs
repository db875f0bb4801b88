//! State mutations in response to actions.
//!
//! Responsibilities:
//! - Apply side-effect completions to the app state.
//! - Emit exactly one toast per finished operation.
//! - Prune expired toasts on tick.
//!
//! Does NOT handle:
//! - Raw key events (see `app::input`) or spawning work (see
//!   `runtime::side_effects`).

use keymapper_core::{EntryOutcome, SkipReason};

use crate::action::Action;
use crate::app::App;
use crate::ui::Toast;

impl App {
    /// Apply an action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
            }
            Action::Resize(_, _) => {}

            Action::ConfigAppended(result) => {
                self.busy = false;
                match result {
                    Ok(count) => self.toasts.push(Toast::success(format!(
                        "Appended {count} mapping{} to {}",
                        if count == 1 { "" } else { "s" },
                        self.config_path.display()
                    ))),
                    Err(e) => self
                        .toasts
                        .push(Toast::error(format!("Append failed: {e}"))),
                }
            }

            Action::ConfigLoaded(result) => {
                self.busy = false;
                match result {
                    Ok(document) => {
                        // A single-section document also restores its context.
                        if let Some(section) = document.sole_section() {
                            self.context = section.context.clone();
                        }
                        self.entries = document.entries().cloned().collect();
                        self.clamp_selection();
                        self.toasts.push(Toast::success(format!(
                            "Loaded {} mapping{} from {}",
                            self.entries.len(),
                            if self.entries.len() == 1 { "" } else { "s" },
                            self.config_path.display()
                        )));
                    }
                    Err(e) => self.toasts.push(Toast::error(format!("Load failed: {e}"))),
                }
            }
            Action::ConfigMissing(path) => {
                self.busy = false;
                self.toasts.push(Toast::warning(format!(
                    "No configuration file found: {}",
                    path.display()
                )));
            }

            Action::JsonSaved(result) => {
                self.busy = false;
                match result {
                    Ok(count) => self.toasts.push(Toast::success(format!(
                        "Saved {count} mapping{} to {}",
                        if count == 1 { "" } else { "s" },
                        self.json_path.display()
                    ))),
                    Err(e) => self.toasts.push(Toast::error(format!("Save failed: {e}"))),
                }
            }
            Action::JsonLoaded(result) => {
                self.busy = false;
                match result {
                    Ok(entries) => {
                        // Replaces the current list, matching the original
                        // load behavior.
                        self.entries = entries;
                        self.clamp_selection();
                        self.toasts.push(Toast::success(format!(
                            "Loaded {} mapping{} from {}",
                            self.entries.len(),
                            if self.entries.len() == 1 { "" } else { "s" },
                            self.json_path.display()
                        )));
                    }
                    Err(e) => self.toasts.push(Toast::error(format!("Load failed: {e}"))),
                }
            }
            Action::JsonMissing(path) => {
                self.busy = false;
                self.toasts.push(Toast::warning(format!(
                    "No configuration file found: {}",
                    path.display()
                )));
            }

            Action::ApplyFinished(report) => {
                self.busy = false;
                if report.is_success() {
                    let applied = report.applied();
                    self.toasts.push(Toast::success(format!(
                        "{applied} mapping{} applied",
                        if applied == 1 { "" } else { "s" }
                    )));
                } else {
                    let skipped = report
                        .outcomes
                        .iter()
                        .filter(|o| {
                            matches!(
                                o,
                                EntryOutcome::Skipped {
                                    reason: SkipReason::AfterFailure,
                                    ..
                                }
                            )
                        })
                        .count();
                    if let Some(EntryOutcome::Failed { command, error, .. }) =
                        report.first_failure()
                    {
                        let mut message = format!("`{command}` failed: {error}");
                        if skipped > 0 {
                            message.push_str(&format!(" ({skipped} skipped)"));
                        }
                        self.toasts.push(Toast::error(message));
                    }
                }
            }

            Action::ServiceRestarted(result) => {
                self.busy = false;
                match result {
                    Ok(()) => self.toasts.push(Toast::success(
                        "keymapperd restarted; new configuration is active",
                    )),
                    Err(e) => self
                        .toasts
                        .push(Toast::error(format!("Restart failed: {e}"))),
                }
            }

            // Triggers are executed by the runtime; input events are routed
            // through handle_input by the main loop.
            Action::Quit
            | Action::Input(_)
            | Action::AppendConfig { .. }
            | Action::LoadConfig { .. }
            | Action::SaveJson { .. }
            | Action::LoadJson { .. }
            | Action::ApplyEntries { .. }
            | Action::RestartService => {}
        }
    }
}
