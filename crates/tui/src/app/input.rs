//! Keyboard input routing.
//!
//! Responsibilities:
//! - Translate key events into state mutations and trigger actions.
//! - Route keys by mode: entry editor, context value editing, then the
//!   entry table.
//!
//! Invariants:
//! - While capture is armed, the very next key press is consumed by the
//!   capture, whatever it is.
//! - Trigger actions are refused with an info toast while one is in flight.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keymapper_core::{ApplyOptions, Document, capture::key_symbol};

use crate::action::Action;
use crate::app::{App, EntryEditor};
use crate::ui::Toast;

impl App {
    /// Handle a key press, returning an action for the main loop to route.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return None;
        }
        if self.editing_context_value {
            self.handle_context_value_key(key);
            return None;
        }
        self.handle_table_key(key)
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        if editor.capture_armed {
            editor.capture_armed = false;
            match key_symbol(&key) {
                Some(symbol) => *editor.focused_text_mut() = symbol,
                None => self
                    .toasts
                    .push(Toast::warning("Key has no symbol; capture cancelled")),
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => {
                editor.capture_armed = true;
            }
            KeyCode::Esc => {
                self.editor = None;
            }
            KeyCode::Enter => {
                self.commit_editor();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                editor.focus = editor.focus.toggled();
            }
            KeyCode::Right => {
                editor.cycle_focused_kind();
            }
            KeyCode::Backspace => {
                editor.focused_text_mut().pop();
            }
            KeyCode::Char(c) if !ctrl => {
                editor.focused_text_mut().push(c);
            }
            _ => {}
        }
    }

    fn commit_editor(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };

        let warnings = editor.entry.lint();
        match editor.index {
            Some(index) if index < self.entries.len() => {
                self.entries[index] = editor.entry;
                self.selected = index;
            }
            _ => {
                self.entries.push(editor.entry);
                self.selected = self.entries.len() - 1;
            }
        }

        if let Some(warning) = warnings.first() {
            self.toasts.push(Toast::warning(warning.to_string()));
        }
    }

    fn handle_context_value_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editing_context_value = false;
            }
            KeyCode::Backspace => {
                self.context.value.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.context.value.push(c);
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Char('q') => return Some(Action::Quit),

            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }

            KeyCode::Char('a') => {
                self.editor = Some(EntryEditor::for_new());
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(entry) = self.selected_entry() {
                    self.editor = Some(EntryEditor::for_existing(self.selected, entry.clone()));
                }
            }
            KeyCode::Char('d') => {
                if self.selected < self.entries.len() {
                    self.entries.remove(self.selected);
                    self.clamp_selection();
                }
            }

            KeyCode::Char('c') => {
                self.context.kind = self.context.kind.next();
                if !self.context.kind.takes_value() {
                    self.context.value.clear();
                }
            }
            KeyCode::Char('v') => {
                if self.context.kind.takes_value() {
                    self.editing_context_value = true;
                } else {
                    self.toasts.push(Toast::info(format!(
                        "Context kind '{}' takes no value",
                        self.context.kind.as_str()
                    )));
                }
            }

            KeyCode::Char('t') => {
                self.cycle_theme();
            }
            KeyCode::Char('f') => {
                self.stop_on_failure = !self.stop_on_failure;
                self.toasts.push(Toast::info(if self.stop_on_failure {
                    "Apply stops on first failure"
                } else {
                    "Apply continues past failures"
                }));
            }

            KeyCode::Char('w') => {
                if self.entries.is_empty() {
                    self.toasts.push(Toast::info("No mappings to append"));
                    return None;
                }
                return self.trigger(Action::AppendConfig {
                    path: self.config_path.clone(),
                    document: Document::single(self.context.clone(), self.entries.clone()),
                });
            }
            KeyCode::Char('l') => {
                return self.trigger(Action::LoadConfig {
                    path: self.config_path.clone(),
                });
            }
            KeyCode::Char('s') => {
                return self.trigger(Action::SaveJson {
                    path: self.json_path.clone(),
                    entries: self.entries.clone(),
                });
            }
            KeyCode::Char('o') => {
                return self.trigger(Action::LoadJson {
                    path: self.json_path.clone(),
                });
            }
            KeyCode::Char('r') => {
                return self.trigger(Action::ApplyEntries {
                    entries: self.entries.clone(),
                    options: ApplyOptions {
                        stop_on_failure: self.stop_on_failure,
                    },
                });
            }
            KeyCode::Char('R') => {
                return self.trigger(Action::RestartService);
            }
            _ => {}
        }
        None
    }

    /// Emit a trigger action unless one is already in flight.
    fn trigger(&mut self, action: Action) -> Option<Action> {
        if self.busy {
            self.toasts
                .push(Toast::info("An operation is already in progress"));
            return None;
        }
        self.busy = true;
        Some(action)
    }
}
