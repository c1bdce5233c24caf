//! Round-trip behavior of the encoder and decoder together.

use nbtext_core::markers::{INSTRUCTIONS, SUFFIX_SENTINEL};
use nbtext_core::{decode, encode, notebook_to_text, text_to_notebook, Cell, CellKind, Document};

fn sample_document() -> Document {
    Document::new(vec![
        Cell::markdown("# Analysis\n\nSome *notes* here.\n- item one\n- item two"),
        Cell::code("import pandas as pd\n\ndf = pd.read_csv('data.csv')\n# a comment\ndf.head()"),
        Cell::markdown("---\nA horizontal rule above."),
        Cell::code("def f(x):\n    return x * 2\n"),
    ])
}

/// Trailing whitespace is the only thing a round trip may change.
fn normalized(doc: &Document) -> Document {
    doc.iter()
        .filter(|c| !c.is_blank())
        .map(|c| Cell::new(c.kind, c.text.trim_end()))
        .collect()
}

#[test]
fn test_round_trip_preserves_cells() {
    let doc = sample_document();
    let decoded = decode(&encode(&doc));
    assert_eq!(decoded, normalized(&doc));
}

#[test]
fn test_round_trip_drops_blank_cells() {
    let doc = Document::new(vec![
        Cell::code(""),
        Cell::markdown("kept"),
        Cell::markdown("   \n  "),
        Cell::code("also kept"),
        Cell::code("\n"),
    ]);
    let text = encode(&doc);
    assert_eq!(text.matches("# CODE:").count(), 2); // one is in the suffix
    assert_eq!(
        decode(&text).cells,
        vec![Cell::markdown("kept"), Cell::code("also kept")]
    );
}

#[test]
fn test_round_trip_never_keeps_suffix() {
    for last in [Cell::code("x"), Cell::markdown("x")] {
        let doc = Document::new(vec![Cell::markdown("first"), last]);
        let decoded = decode(&encode(&doc));
        assert!(decoded
            .iter()
            .all(|cell| !cell.text.contains(SUFFIX_SENTINEL)));
        assert_eq!(decoded.len(), 2);
    }
}

#[test]
fn test_round_trip_of_empty_document() {
    assert!(decode(&encode(&Document::default())).is_empty());
    let blank = Document::new(vec![Cell::code(""), Cell::markdown(" ")]);
    assert!(decode(&encode(&blank)).is_empty());
}

#[test]
fn test_concrete_two_cell_scenario() {
    let doc = Document::new(vec![Cell::code("print(1)"), Cell::markdown("hello")]);
    let text = encode(&doc);
    assert!(text.starts_with("# CODE:\nprint(1)\n\n# MD:\n#: hello"));
    assert!(text.ends_with(INSTRUCTIONS));
    assert_eq!(decode(&text), doc);
}

#[test]
fn test_markdown_prefix_round_trip() {
    let doc = Document::new(vec![Cell::markdown("line1\nline2")]);
    let text = encode(&doc);
    assert!(text.contains("#: line1\n#: line2"));
    assert_eq!(decode(&text).cells[0].text, "line1\nline2");
}

#[test]
fn test_llm_edited_text() {
    // An editor that dropped the suffix, forgot some prefixes and added a cell.
    let edited = "# MD:\n#: # Title\nplain line\n\n# CODE:\nx = 1\n\n# CODE:\ny = x + 1\n";
    let doc = decode(edited);
    assert_eq!(
        doc.cells,
        vec![
            Cell::markdown("# Title\nplain line"),
            Cell::code("x = 1"),
            Cell::code("y = x + 1"),
        ]
    );
}

#[test]
fn test_notebook_round_trip() {
    let notebook = r##"{
  "cells": [
    {"cell_type": "markdown", "metadata": {}, "source": ["# Intro\n", "\n", "Text."]},
    {"cell_type": "code", "execution_count": 3, "metadata": {}, "outputs": [], "source": ["a = 1\n", "a"]},
    {"cell_type": "code", "execution_count": null, "metadata": {}, "outputs": [], "source": []}
  ],
  "metadata": {},
  "nbformat": 4,
  "nbformat_minor": 5
}"##;
    let (text, original) = notebook_to_text(notebook).unwrap();
    let (json, decoded) = text_to_notebook(&text).unwrap();

    assert_eq!(original.len(), 3);
    assert_eq!(decoded, normalized(&original));
    assert_eq!(decoded.cells[0].kind, CellKind::Markdown);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cells"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["cells"][1]["source"], "a = 1\na");
}
