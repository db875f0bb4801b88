//! Round-trip tests between the formatter and the parser.
//!
//! The parser is the inverse of the formatter for every document this tool
//! emits, so saved files re-populate the editor exactly. Property inputs are
//! restricted to the grammar-safe alphabet; free text containing grammar
//! characters is explicitly unescaped passthrough and excluded.

use proptest::prelude::*;

use keymapper_core::document::{Document, Section};
use keymapper_core::model::{
    ContextKind, ContextSelector, InputKind, MappingEntry, OutputKind,
};
use keymapper_core::parse_document;

fn key_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn key_list() -> impl Strategy<Value = String> {
    prop::collection::vec(key_name(), 2..4).prop_map(|keys| keys.join(","))
}

fn entry_strategy() -> impl Strategy<Value = MappingEntry> {
    let input = prop_oneof![
        key_name().prop_map(|text| (InputKind::Single, text)),
        key_list().prop_map(|text| (InputKind::Successive, text)),
        key_list().prop_map(|text| (InputKind::Simultaneous, text)),
        (key_name(), key_name())
            .prop_map(|(m, k)| (InputKind::HoldModifier, format!("{m},{k}"))),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|text| (InputKind::CharString, text)),
    ];
    let output = prop_oneof![
        key_name().prop_map(|text| (OutputKind::Single, text)),
        key_list().prop_map(|text| (OutputKind::Successive, text)),
        key_list().prop_map(|text| (OutputKind::Simultaneous, text)),
        (key_name(), key_name())
            .prop_map(|(m, k)| (OutputKind::HoldModifier, format!("{m},{k}"))),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|text| (OutputKind::CharString, text)),
        "[a-z][a-z0-9 -]{0,16}[a-z0-9]".prop_map(|text| (OutputKind::Command, text)),
    ];
    (input, output).prop_map(|((input_kind, input), (output_kind, output))| MappingEntry {
        input_kind,
        input,
        output_kind,
        output,
    })
}

fn context_strategy() -> impl Strategy<Value = ContextSelector> {
    let kind = prop::sample::select(vec![
        ContextKind::System,
        ContextKind::Title,
        ContextKind::Class,
        ContextKind::Device,
        ContextKind::Modifier,
    ]);
    let value = "([a-zA-Z0-9]([a-zA-Z0-9 ]{0,10}[a-zA-Z0-9])?)?";
    (kind, value).prop_map(|(kind, value)| ContextSelector::new(kind, value))
}

fn document_strategy() -> impl Strategy<Value = Document> {
    // A default-context section only survives a round trip at the head of
    // the document, where its bare mapping lines are unambiguous.
    let default_section = prop::collection::vec(entry_strategy(), 1..4)
        .prop_map(|entries| Section {
            context: ContextSelector::default(),
            entries,
        });
    let scoped_section = (context_strategy(), prop::collection::vec(entry_strategy(), 0..4))
        .prop_map(|(context, entries)| Section { context, entries });

    (
        prop::option::of(default_section),
        prop::collection::vec(scoped_section, 0..3),
    )
        .prop_filter_map("empty document", |(head, tail)| {
            let mut sections = Vec::new();
            sections.extend(head);
            sections.extend(tail);
            if sections.is_empty() {
                None
            } else {
                Some(Document { sections })
            }
        })
}

proptest! {
    #[test]
    fn parse_inverts_render(doc in document_strategy()) {
        let rendered = doc.render();
        let parsed = parse_document(&rendered).unwrap();
        prop_assert_eq!(parsed, doc);
    }

    #[test]
    fn render_is_stable_under_reparse(doc in document_strategy()) {
        let once = doc.render();
        let twice = parse_document(&once).unwrap().render();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn device_scoped_caps_to_esc_block() {
    let doc = Document::single(
        ContextSelector::new(ContextKind::Device, "kbd1"),
        vec![MappingEntry::new("capslock", "esc")],
    );
    assert_eq!(doc.render(), "[device = kbd1]\ncapslock >> esc");

    let reloaded = parse_document(&doc.render()).unwrap();
    assert_eq!(reloaded, doc);
}
