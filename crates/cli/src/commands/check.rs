//! `check` - parse and lint the daemon configuration.

use anyhow::{Context, Result};
use std::path::Path;

use keymapper_core::Document;

use crate::error::ExitCode;

pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    let document = Document::load_from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let warnings = document.lint();
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let entries = document.entries().count();
    if warnings.is_empty() {
        println!(
            "{}: {entries} mapping{} OK",
            config_path.display(),
            if entries == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    println!(
        "{}: {entries} mapping{}, {} warning{}",
        config_path.display(),
        if entries == 1 { "" } else { "s" },
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" }
    );

    if strict {
        return Err(anyhow::Error::new(ExitCode::ValidationError)
            .context(format!("{} lint warnings in strict mode", warnings.len())));
    }
    Ok(())
}
