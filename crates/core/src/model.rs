//! Typed mapping model.
//!
//! Responsibilities:
//! - Define the mapping entry and context selector types edited by the UI.
//! - Provide kind enums with cycling and display helpers for form fields.
//! - Lint entries for texts the formatter would silently pass through.
//!
//! Does NOT handle:
//! - Formatting to the daemon grammar (see `format`).
//! - Parsing the grammar back (see `parse`).
//!
//! Invariants:
//! - Both kind fields default to `Single`.
//! - Text fields are free-form until formatted; `lint` only warns, it never
//!   rejects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the input side of a mapping is interpreted when formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// A single key name, emitted verbatim.
    #[default]
    Single,
    /// Comma-separated keys pressed one after another.
    Successive,
    /// Comma-separated keys pressed together.
    Simultaneous,
    /// `modifier,key` pair rendered as `modifier{key}`.
    HoldModifier,
    /// A literal character string, emitted in double quotes.
    CharString,
}

impl InputKind {
    /// All variants in form-field cycling order.
    pub const ALL: [InputKind; 5] = [
        Self::Single,
        Self::Successive,
        Self::Simultaneous,
        Self::HoldModifier,
        Self::CharString,
    ];

    /// Display label for form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Successive => "successive",
            Self::Simultaneous => "simultaneous",
            Self::HoldModifier => "hold-modifier",
            Self::CharString => "char-string",
        }
    }

    /// Next variant in cycling order (wraps around).
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// How the output side of a mapping is interpreted when formatting.
///
/// Mirrors [`InputKind`] with one extra variant: `Command`, which shells out
/// instead of emitting keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    #[default]
    Single,
    Successive,
    Simultaneous,
    HoldModifier,
    CharString,
    /// Shell command rendered as `$(text) ^`.
    Command,
}

impl OutputKind {
    /// All variants in form-field cycling order.
    pub const ALL: [OutputKind; 6] = [
        Self::Single,
        Self::Successive,
        Self::Simultaneous,
        Self::HoldModifier,
        Self::CharString,
        Self::Command,
    ];

    /// Display label for form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Successive => "successive",
            Self::Simultaneous => "simultaneous",
            Self::HoldModifier => "hold-modifier",
            Self::CharString => "char-string",
            Self::Command => "command",
        }
    }

    /// Next variant in cycling order (wraps around).
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// One input-expression-to-output-expression rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub input_kind: InputKind,
    pub input: String,
    pub output_kind: OutputKind,
    pub output: String,
}

impl MappingEntry {
    /// Create an entry with both kinds defaulted to `Single`.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// True when either raw text field is empty.
    ///
    /// The per-entry apply strategy skips blank entries instead of invoking
    /// the mapping command with missing arguments.
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty() || self.output.trim().is_empty()
    }

    /// Report texts the formatter would silently pass through unchanged.
    ///
    /// The formatter keeps the original tool's degradation behavior for
    /// hold-modifier texts with the wrong comma count; this surfaces it to
    /// the user instead of leaving it silent.
    pub fn lint(&self) -> Vec<LintWarning> {
        let mut warnings = Vec::new();
        if self.input_kind == InputKind::HoldModifier {
            let commas = self.input.matches(',').count();
            if commas != 1 {
                warnings.push(LintWarning::HoldModifierArity {
                    side: Side::Input,
                    text: self.input.clone(),
                    commas,
                });
            }
        }
        if self.output_kind == OutputKind::HoldModifier {
            let commas = self.output.matches(',').count();
            if commas != 1 {
                warnings.push(LintWarning::HoldModifierArity {
                    side: Side::Output,
                    text: self.output.clone(),
                    commas,
                });
            }
        }
        warnings
    }
}

/// Which side of a mapping a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

/// Non-fatal issues found in a mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintWarning {
    /// Hold-modifier text must contain exactly one comma (`modifier,key`);
    /// anything else is emitted verbatim.
    #[error(
        "{} text {text:?} has {commas} commas; hold-modifier expects exactly one (modifier,key) and will be emitted verbatim",
        side.as_str()
    )]
    HoldModifierArity {
        side: Side,
        text: String,
        commas: usize,
    },
}

/// Scope qualifier restricting which mappings are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    /// No context line is emitted.
    #[default]
    Default,
    System,
    Title,
    Class,
    Device,
    Modifier,
}

impl ContextKind {
    /// All variants in form-field cycling order.
    pub const ALL: [ContextKind; 6] = [
        Self::Default,
        Self::System,
        Self::Title,
        Self::Class,
        Self::Device,
        Self::Modifier,
    ];

    /// The keyword emitted inside the bracketed context line, or `None` for
    /// `Default` which emits nothing.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::System => Some("system"),
            Self::Title => Some("title"),
            Self::Class => Some("class"),
            Self::Device => Some("device"),
            Self::Modifier => Some("modifier"),
        }
    }

    /// Parse a context keyword as it appears inside brackets.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "system" => Some(Self::System),
            "title" => Some(Self::Title),
            "class" => Some(Self::Class),
            "device" => Some(Self::Device),
            "modifier" => Some(Self::Modifier),
            _ => None,
        }
    }

    /// True when the bracketed form carries a `= value` part.
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            Self::Title | Self::Class | Self::Device | Self::Modifier
        )
    }

    /// Display label for form fields.
    pub fn as_str(&self) -> &'static str {
        self.keyword().unwrap_or("default")
    }

    /// Next variant in cycling order (wraps around).
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// A context scope: kind plus free-text value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSelector {
    pub kind: ContextKind,
    pub value: String,
}

impl ContextSelector {
    pub fn new(kind: ContextKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_default_to_single() {
        let entry = MappingEntry::default();
        assert_eq!(entry.input_kind, InputKind::Single);
        assert_eq!(entry.output_kind, OutputKind::Single);
    }

    #[test]
    fn kind_cycling_wraps() {
        let mut kind = InputKind::Single;
        for _ in 0..InputKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, InputKind::Single);

        assert_eq!(OutputKind::Command.next(), OutputKind::Single);
        assert_eq!(ContextKind::Modifier.next(), ContextKind::Default);
    }

    #[test]
    fn blank_detection_requires_both_sides() {
        assert!(MappingEntry::new("", "esc").is_blank());
        assert!(MappingEntry::new("capslock", "  ").is_blank());
        assert!(!MappingEntry::new("capslock", "esc").is_blank());
    }

    #[test]
    fn lint_flags_hold_modifier_arity() {
        let mut entry = MappingEntry::new("shift", "a");
        entry.input_kind = InputKind::HoldModifier;
        let warnings = entry.lint();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            LintWarning::HoldModifierArity {
                side: Side::Input,
                commas: 0,
                ..
            }
        ));

        entry.input = "shift,a".to_string();
        assert!(entry.lint().is_empty());

        entry.input = "shift,a,b".to_string();
        assert_eq!(entry.lint().len(), 1);
    }

    #[test]
    fn context_keyword_round_trip() {
        for kind in ContextKind::ALL {
            match kind.keyword() {
                Some(kw) => assert_eq!(ContextKind::from_keyword(kw), Some(kind)),
                None => assert_eq!(kind, ContextKind::Default),
            }
        }
        assert_eq!(ContextKind::from_keyword("default"), None);
        assert_eq!(ContextKind::from_keyword("window"), None);
    }
}
