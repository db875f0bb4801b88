//! Parser for the emitted subset of the daemon config grammar.
//!
//! This is the inverse of the formatter: it re-populates the typed model
//! from a saved configuration file so the structured entry list stays the
//! source of truth across save/load.
//!
//! Responsibilities:
//! - Parse context lines (`[kind]`, `[kind = value]`) into sections.
//! - Parse mapping lines (`lhs >> rhs`) and classify each expression back
//!   into its kind.
//! - Skip blank lines and `#` comment lines so hand-edited files load.
//!
//! Does NOT handle:
//! - The full daemon grammar (directives, line continuations, aliases).
//! - Text containing an embedded `>>`; the first separator wins, matching
//!   the formatter's no-escaping contract.

use thiserror::Error;

use crate::document::{Document, Section};
use crate::model::{ContextKind, ContextSelector, InputKind, MappingEntry, OutputKind};

/// Errors from parsing a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A bracketed line named a context kind this tool does not emit.
    #[error("line {line}: unknown context kind {keyword:?}")]
    UnknownContextKind { line: usize, keyword: String },

    /// A bracketed line with no keyword inside.
    #[error("line {line}: malformed context line")]
    MalformedContext { line: usize },

    /// A non-blank line without the `>>` mapping separator.
    #[error("line {line}: expected `input >> output`, got {text:?}")]
    MalformedMapping { line: usize, text: String },
}

/// Parse a full configuration document.
///
/// Lines before the first context line form a section with the default
/// (empty) context. Line numbers in errors are 1-based.
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(Section::new(parse_context(line, line_no)?));
            continue;
        }

        let entry = parse_mapping(line, line_no)?;
        current
            .get_or_insert_with(|| Section::new(ContextSelector::default()))
            .entries
            .push(entry);
    }

    if let Some(section) = current {
        sections.push(section);
    }

    Ok(Document { sections })
}

fn parse_context(line: &str, line_no: usize) -> Result<ContextSelector, ParseError> {
    let inner = line[1..line.len() - 1].trim();
    if inner.is_empty() {
        return Err(ParseError::MalformedContext { line: line_no });
    }

    let (keyword, value) = match inner.split_once('=') {
        Some((kw, value)) => (kw.trim(), value.trim()),
        None => (inner, ""),
    };

    let kind = ContextKind::from_keyword(&keyword.to_lowercase()).ok_or_else(|| {
        ParseError::UnknownContextKind {
            line: line_no,
            keyword: keyword.to_string(),
        }
    })?;

    Ok(ContextSelector::new(kind, value))
}

fn parse_mapping(line: &str, line_no: usize) -> Result<MappingEntry, ParseError> {
    let Some(sep) = line.find(">>") else {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            text: line.to_string(),
        });
    };
    let lhs = line[..sep].trim();
    let rhs = line[sep + 2..].trim();
    if lhs.is_empty() || rhs.is_empty() {
        return Err(ParseError::MalformedMapping {
            line: line_no,
            text: line.to_string(),
        });
    }

    let (input_kind, input) = classify_input(lhs);
    let (output_kind, output) = classify_output(rhs);
    Ok(MappingEntry {
        input_kind,
        input,
        output_kind,
        output,
    })
}

/// Classify an input expression back into (kind, raw text).
fn classify_input(expr: &str) -> (InputKind, String) {
    if let Some(inner) = quoted(expr) {
        return (InputKind::CharString, inner);
    }
    if let Some(inner) = parenthesized(expr) {
        return (InputKind::Simultaneous, keys_to_commas(&inner));
    }
    if let Some(pair) = braced(expr) {
        return (InputKind::HoldModifier, pair);
    }
    if expr.contains(char::is_whitespace) {
        return (InputKind::Successive, keys_to_commas(expr));
    }
    (InputKind::Single, expr.to_string())
}

/// Classify an output expression back into (kind, raw text).
///
/// Same rules as the input side plus the `$(text) ^` command form.
fn classify_output(expr: &str) -> (OutputKind, String) {
    if let Some(inner) = expr
        .strip_prefix("$(")
        .and_then(|rest| rest.strip_suffix(") ^"))
    {
        return (OutputKind::Command, inner.to_string());
    }
    if let Some(inner) = quoted(expr) {
        return (OutputKind::CharString, inner);
    }
    if let Some(inner) = parenthesized(expr) {
        return (OutputKind::Simultaneous, keys_to_commas(&inner));
    }
    if let Some(pair) = braced(expr) {
        return (OutputKind::HoldModifier, pair);
    }
    if expr.contains(char::is_whitespace) {
        return (OutputKind::Successive, keys_to_commas(expr));
    }
    (OutputKind::Single, expr.to_string())
}

fn quoted(expr: &str) -> Option<String> {
    if expr.len() >= 2 && expr.starts_with('"') && expr.ends_with('"') {
        Some(expr[1..expr.len() - 1].to_string())
    } else {
        None
    }
}

fn parenthesized(expr: &str) -> Option<String> {
    if expr.len() >= 2 && expr.starts_with('(') && expr.ends_with(')') {
        Some(expr[1..expr.len() - 1].to_string())
    } else {
        None
    }
}

/// `modifier{key}` back to `modifier,key`. Whitespace disqualifies the form
/// since the formatter trims both parts.
fn braced(expr: &str) -> Option<String> {
    if expr.contains(char::is_whitespace) || !expr.ends_with('}') {
        return None;
    }
    let brace = expr.find('{')?;
    if brace == 0 {
        return None;
    }
    let modifier = &expr[..brace];
    let key = &expr[brace + 1..expr.len() - 1];
    if key.is_empty() {
        return None;
    }
    Some(format!("{modifier},{key}"))
}

/// Space-separated key sequence back to the comma-separated form the editor
/// shows.
fn keys_to_commas(expr: &str) -> String {
    expr.split_whitespace().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_mapping_without_context() {
        let doc = parse_document("capslock >> esc\n").unwrap();
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].context, ContextSelector::default());
        assert_eq!(
            doc.sections[0].entries,
            vec![MappingEntry::new("capslock", "esc")]
        );
    }

    #[test]
    fn parses_context_sections_in_order() {
        let text = "[system]\na >> b\n\n[title = Firefox]\nc >> d\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].context.kind, ContextKind::System);
        assert_eq!(doc.sections[0].context.value, "");
        assert_eq!(doc.sections[1].context.kind, ContextKind::Title);
        assert_eq!(doc.sections[1].context.value, "Firefox");
        assert_eq!(doc.sections[1].entries.len(), 1);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "# remap caps\n\ncapslock >> esc\n";
        let doc = parse_document(text).unwrap();
        assert_eq!(doc.sections[0].entries.len(), 1);
    }

    #[test]
    fn classifies_expressions_back_to_kinds() {
        let doc = parse_document(concat!(
            "(shift a) >> \"hi\"\n",
            "a b c >> shift{x}\n",
            "q >> $(notify-send hi) ^\n",
        ))
        .unwrap();
        let entries = &doc.sections[0].entries;

        assert_eq!(entries[0].input_kind, InputKind::Simultaneous);
        assert_eq!(entries[0].input, "shift,a");
        assert_eq!(entries[0].output_kind, OutputKind::CharString);
        assert_eq!(entries[0].output, "hi");

        assert_eq!(entries[1].input_kind, InputKind::Successive);
        assert_eq!(entries[1].input, "a,b,c");
        assert_eq!(entries[1].output_kind, OutputKind::HoldModifier);
        assert_eq!(entries[1].output, "shift,x");

        assert_eq!(entries[2].output_kind, OutputKind::Command);
        assert_eq!(entries[2].output, "notify-send hi");
    }

    #[test]
    fn unknown_context_kind_carries_line_number() {
        let err = parse_document("a >> b\n[window = x]\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownContextKind {
                line: 2,
                keyword: "window".to_string(),
            }
        );
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = parse_document("capslock esc\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedMapping { line: 1, .. }));

        let err = parse_document(">> esc\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedMapping { .. }));
    }

    #[test]
    fn context_keyword_is_case_insensitive() {
        let doc = parse_document("[Device = kbd1]\na >> b\n").unwrap();
        assert_eq!(doc.sections[0].context.kind, ContextKind::Device);
        assert_eq!(doc.sections[0].context.value, "kbd1");
    }
}
