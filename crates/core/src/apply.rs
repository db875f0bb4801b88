//! External-command apply strategies.
//!
//! Responsibilities:
//! - Run `keymapper map <from> <to>` per entry as an ordered batch with
//!   per-entry outcomes; the caller decides whether a failure stops the rest.
//! - Run `systemctl restart keymapperd` for the service-restart strategy.
//!
//! Does NOT handle:
//! - User-facing reporting (the TUI and CLI turn reports into toasts or
//!   stderr lines, exactly once per user action).
//! - Timeouts or cancellation; each child runs to completion.
//!
//! Invariants:
//! - Entries are invoked in document order.
//! - Entries with an empty side are skipped, never invoked.
//! - With `stop_on_failure`, entries after the first failure are recorded as
//!   skipped, not invoked.

use thiserror::Error;
use tokio::process::Command;

use crate::model::MappingEntry;

/// Service unit managed by the restart strategy.
pub const DAEMON_SERVICE: &str = "keymapperd";

/// Errors from invoking external commands.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The program could not be started at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran and exited non-zero.
    #[error("`{command}` exited with {}{}", code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()), if stderr.is_empty() { String::new() } else { format!(": {stderr}") })]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// The per-entry mapping command, `keymapper map <from> <to>` by default.
///
/// The program name is injectable so tests and dry runs can substitute a
/// harmless binary.
#[derive(Debug, Clone)]
pub struct MapCommand {
    program: String,
}

impl Default for MapCommand {
    fn default() -> Self {
        Self::new("keymapper")
    }
}

impl MapCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Human-readable command line for one entry.
    pub fn display(&self, entry: &MappingEntry) -> String {
        format!("{} map {} {}", self.program, entry.input, entry.output)
    }

    async fn invoke(&self, entry: &MappingEntry) -> Result<(), ApplyError> {
        run_command(&self.program, &["map", &entry.input, &entry.output]).await
    }
}

/// The service manager command, `systemctl restart keymapperd` by default.
#[derive(Debug, Clone)]
pub struct ServiceCommand {
    program: String,
    service: String,
}

impl Default for ServiceCommand {
    fn default() -> Self {
        Self::new("systemctl", DAEMON_SERVICE)
    }
}

impl ServiceCommand {
    pub fn new(program: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            service: service.into(),
        }
    }

    /// Human-readable command line.
    pub fn display(&self) -> String {
        format!("{} restart {}", self.program, self.service)
    }

    /// Restart the daemon so it picks up the new configuration.
    pub async fn restart(&self) -> Result<(), ApplyError> {
        run_command(&self.program, &["restart", &self.service]).await
    }
}

/// Options for the per-entry apply batch.
#[derive(Debug, Clone, Copy)]
pub struct ApplyOptions {
    /// Skip remaining entries after the first failure. Defaults to true,
    /// matching the original abort-on-first-failure behavior.
    pub stop_on_failure: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            stop_on_failure: true,
        }
    }
}

/// Why an entry was not invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Input or output text was empty.
    Blank,
    /// An earlier entry failed and `stop_on_failure` was set.
    AfterFailure,
}

/// Outcome of one entry in the apply batch.
#[derive(Debug)]
pub enum EntryOutcome {
    Applied {
        index: usize,
        command: String,
    },
    Failed {
        index: usize,
        command: String,
        error: ApplyError,
    },
    Skipped {
        index: usize,
        reason: SkipReason,
    },
}

/// Ordered outcomes of a per-entry apply batch.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl ApplyReport {
    /// Number of entries that were invoked and succeeded.
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, EntryOutcome::Applied { .. }))
            .count()
    }

    /// First failed outcome, if any.
    pub fn first_failure(&self) -> Option<&EntryOutcome> {
        self.outcomes
            .iter()
            .find(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    /// True when no entry failed.
    pub fn is_success(&self) -> bool {
        self.first_failure().is_none()
    }
}

/// Run the mapping command for each entry in order.
///
/// Blank entries are skipped. After a failure with `stop_on_failure` set,
/// remaining entries are recorded as skipped without being invoked.
pub async fn apply_entries(
    command: &MapCommand,
    entries: &[MappingEntry],
    options: ApplyOptions,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    let mut failed = false;

    for (index, entry) in entries.iter().enumerate() {
        if failed && options.stop_on_failure {
            report.outcomes.push(EntryOutcome::Skipped {
                index,
                reason: SkipReason::AfterFailure,
            });
            continue;
        }
        if entry.is_blank() {
            report.outcomes.push(EntryOutcome::Skipped {
                index,
                reason: SkipReason::Blank,
            });
            continue;
        }

        let command_line = command.display(entry);
        match command.invoke(entry).await {
            Ok(()) => {
                tracing::debug!(command = %command_line, "Mapping applied");
                report.outcomes.push(EntryOutcome::Applied {
                    index,
                    command: command_line,
                });
            }
            Err(error) => {
                tracing::warn!(command = %command_line, %error, "Mapping command failed");
                failed = true;
                report.outcomes.push(EntryOutcome::Failed {
                    index,
                    command: command_line,
                    error,
                });
            }
        }
    }

    report
}

async fn run_command(program: &str, args: &[&str]) -> Result<(), ApplyError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| ApplyError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ApplyError::CommandFailed {
            command: std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" "),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
