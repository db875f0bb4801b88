//! Mapping-expression formatter for the daemon config grammar.
//!
//! Responsibilities:
//! - Render a typed entry into a `<input-expr> >> <output-expr>` line.
//! - Render a context selector into its bracketed line.
//!
//! Does NOT handle:
//! - Escaping embedded quotes, parentheses, or commas; malformed free text
//!   (including text containing `>>`) passes through unvalidated.
//! - Reporting degraded hold-modifier texts (see `MappingEntry::lint`).

use crate::model::{ContextSelector, InputKind, MappingEntry, OutputKind};

/// Separator between the input and output expressions of a mapping line.
pub const MAPPING_SEPARATOR: &str = " >> ";

/// Render the input side of a mapping.
pub fn input_expr(kind: InputKind, text: &str) -> String {
    match kind {
        InputKind::Single => text.to_string(),
        InputKind::Successive => successive(text),
        InputKind::Simultaneous => format!("({})", successive(text)),
        InputKind::HoldModifier => hold_modifier(text),
        InputKind::CharString => format!("\"{text}\""),
    }
}

/// Render the output side of a mapping.
///
/// Mirrors [`input_expr`] with the extra `Command` kind, rendered as
/// `$(text) ^` (shell-out-and-chain marker, trailing space before `^`).
pub fn output_expr(kind: OutputKind, text: &str) -> String {
    match kind {
        OutputKind::Single => text.to_string(),
        OutputKind::Successive => successive(text),
        OutputKind::Simultaneous => format!("({})", successive(text)),
        OutputKind::HoldModifier => hold_modifier(text),
        OutputKind::CharString => format!("\"{text}\""),
        OutputKind::Command => format!("$({text}) ^"),
    }
}

/// Render one full mapping line.
pub fn format_entry(entry: &MappingEntry) -> String {
    format!(
        "{}{}{}",
        input_expr(entry.input_kind, &entry.input),
        MAPPING_SEPARATOR,
        output_expr(entry.output_kind, &entry.output),
    )
}

/// Render the context line, or `None` when the kind is `Default`.
///
/// An empty value yields `[kind]`, otherwise `[kind = value]`.
pub fn format_context(ctx: &ContextSelector) -> Option<String> {
    let keyword = ctx.kind.keyword()?;
    if ctx.value.is_empty() {
        Some(format!("[{keyword}]"))
    } else {
        Some(format!("[{keyword} = {}]", ctx.value))
    }
}

/// Comma-separated key list rendered as a space-separated sequence.
fn successive(text: &str) -> String {
    text.replace(',', " ")
}

/// `modifier,key` rendered as `modifier{key}` with both parts trimmed.
///
/// Any other comma count falls back to the raw text unchanged. The original
/// tool degraded silently here and the formatter contract preserves that;
/// `MappingEntry::lint` is the reporting path.
fn hold_modifier(text: &str) -> String {
    let parts: Vec<&str> = text.split(',').collect();
    match parts.as_slice() {
        [modifier, key] => format!("{}{{{}}}", modifier.trim(), key.trim()),
        _ => text.to_string(),
    }
}
