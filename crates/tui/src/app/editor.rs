//! Entry editor popup state.
//!
//! Responsibilities:
//! - Hold the entry being edited and which field has focus.
//! - Track the single-shot key capture flag.
//!
//! Does NOT handle:
//! - Key routing (see `app::input`) or rendering (see `app::render`).

use keymapper_core::MappingEntry;

/// Which editor field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Input,
    Output,
}

impl EditorField {
    /// The other field.
    pub fn toggled(self) -> Self {
        match self {
            Self::Input => Self::Output,
            Self::Output => Self::Input,
        }
    }
}

/// State of the entry editor popup.
#[derive(Debug, Clone)]
pub struct EntryEditor {
    /// Index of the entry being edited, or `None` for a new entry.
    pub index: Option<usize>,
    /// Working copy; committed on Enter, discarded on Esc.
    pub entry: MappingEntry,
    /// Field receiving typed characters.
    pub focus: EditorField,
    /// The next key press replaces the focused field's text.
    pub capture_armed: bool,
}

impl EntryEditor {
    /// Editor for a new entry.
    pub fn for_new() -> Self {
        Self {
            index: None,
            entry: MappingEntry::default(),
            focus: EditorField::Input,
            capture_armed: false,
        }
    }

    /// Editor for an existing entry.
    pub fn for_existing(index: usize, entry: MappingEntry) -> Self {
        Self {
            index: Some(index),
            entry,
            focus: EditorField::Input,
            capture_armed: false,
        }
    }

    /// Mutable reference to the focused field's text.
    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Input => &mut self.entry.input,
            EditorField::Output => &mut self.entry.output,
        }
    }

    /// Cycle the kind of the focused field.
    pub fn cycle_focused_kind(&mut self) {
        match self.focus {
            EditorField::Input => self.entry.input_kind = self.entry.input_kind.next(),
            EditorField::Output => self.entry.output_kind = self.entry.output_kind.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymapper_core::model::{InputKind, OutputKind};

    #[test]
    fn focus_toggles_between_fields() {
        assert_eq!(EditorField::Input.toggled(), EditorField::Output);
        assert_eq!(EditorField::Output.toggled(), EditorField::Input);
    }

    #[test]
    fn cycle_affects_only_the_focused_kind() {
        let mut editor = EntryEditor::for_new();
        editor.cycle_focused_kind();
        assert_eq!(editor.entry.input_kind, InputKind::Successive);
        assert_eq!(editor.entry.output_kind, OutputKind::Single);

        editor.focus = EditorField::Output;
        editor.cycle_focused_kind();
        assert_eq!(editor.entry.output_kind, OutputKind::Successive);
    }

    #[test]
    fn focused_text_follows_focus() {
        let mut editor = EntryEditor::for_new();
        editor.focused_text_mut().push('a');
        editor.focus = EditorField::Output;
        editor.focused_text_mut().push('b');
        assert_eq!(editor.entry.input, "a");
        assert_eq!(editor.entry.output, "b");
    }
}
