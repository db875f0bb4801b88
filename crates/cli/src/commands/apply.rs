//! `apply` - run the mapping command for each saved mapping.

use anyhow::{Context, Result};
use std::path::Path;

use keymapper_config::load_legacy;
use keymapper_core::{ApplyOptions, EntryOutcome, MapCommand, SkipReason, apply_entries};

pub async fn run(map_program: &str, json: &Path, keep_going: bool) -> Result<()> {
    let entries = load_legacy(json)
        .with_context(|| format!("failed to read mappings from {}", json.display()))?;

    let command = MapCommand::new(map_program);
    let options = ApplyOptions {
        stop_on_failure: !keep_going,
    };
    let report = apply_entries(&command, &entries, options).await;
    let applied = report.applied();

    let mut first_error = None;
    for outcome in report.outcomes {
        match outcome {
            EntryOutcome::Applied { command, .. } => println!("applied: {command}"),
            EntryOutcome::Skipped { index, reason } => {
                let why = match reason {
                    SkipReason::Blank => "blank entry",
                    SkipReason::AfterFailure => "earlier entry failed",
                };
                println!("skipped: entry {} ({why})", index + 1);
            }
            EntryOutcome::Failed { command, error, .. } => {
                println!("failed: {command}");
                if first_error.is_none() {
                    first_error = Some((command, error));
                }
            }
        }
    }

    match first_error {
        Some((command, error)) => Err(anyhow::Error::new(error)
            .context(format!("`{command}` failed after {applied} applied"))),
        None => {
            println!(
                "{applied} mapping{} applied",
                if applied == 1 { "" } else { "s" }
            );
            Ok(())
        }
    }
}
