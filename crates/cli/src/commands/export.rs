//! `export` - format saved mappings and append them to the daemon config.

use anyhow::{Context, Result, bail};
use std::path::Path;

use keymapper_config::load_legacy;
use keymapper_core::{ContextKind, ContextSelector, Document};

pub fn run(config_path: &Path, json: &Path, context: Option<&str>) -> Result<()> {
    let entries = load_legacy(json)
        .with_context(|| format!("failed to read mappings from {}", json.display()))?;
    let selector = match context {
        Some(text) => parse_context_arg(text)?,
        None => ContextSelector::default(),
    };

    let document = Document::single(selector, entries);
    for warning in document.lint() {
        tracing::warn!(%warning, "Lint warning in exported mappings");
        eprintln!("warning: {warning}");
    }

    let count = document.entries().count();
    document
        .append_to_file(config_path)
        .with_context(|| format!("failed to append to {}", config_path.display()))?;

    println!(
        "Appended {count} mapping{} to {}",
        if count == 1 { "" } else { "s" },
        config_path.display()
    );
    Ok(())
}

/// Parse a `kind` or `kind=value` context argument.
fn parse_context_arg(text: &str) -> Result<ContextSelector> {
    let (keyword, value) = match text.split_once('=') {
        Some((k, v)) => (k.trim(), Some(v.trim())),
        None => (text.trim(), None),
    };

    let kind = ContextKind::from_keyword(keyword)
        .ok_or_else(|| anyhow::anyhow!("unknown context kind `{keyword}`"))?;

    match (kind.takes_value(), value) {
        (true, Some(v)) if !v.is_empty() => Ok(ContextSelector {
            kind,
            value: v.to_string(),
        }),
        (true, _) => bail!("context kind `{keyword}` requires a value, e.g. `{keyword}=...`"),
        (false, None) => Ok(ContextSelector {
            kind,
            value: String::new(),
        }),
        (false, Some(_)) => bail!("context kind `{keyword}` does not take a value"),
    }
}
