//! `import` - parse the daemon config and print it as legacy JSON.

use anyhow::{Context, Result};
use std::path::Path;

use keymapper_config::LegacyMapping;
use keymapper_core::Document;

pub fn run(config_path: &Path) -> Result<()> {
    let document = Document::load_from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let mappings: Vec<LegacyMapping> = document
        .entries()
        .map(|entry| LegacyMapping {
            from: entry.input.clone(),
            to: entry.output.clone(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&mappings)?;
    println!("{json}");
    Ok(())
}
