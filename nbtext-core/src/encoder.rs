//! Document to marked-text encoder.

use crate::markers::{marker_for, CONTINUATION_PREFIX, INSTRUCTIONS};
use crate::types::{Cell, CellKind, Document};

/// Encode a document into marked text followed by the instructional suffix.
///
/// Blank cells are skipped without leaving a separator behind. A document
/// with no non-blank cells encodes to the suffix alone.
pub fn encode(doc: &Document) -> String {
    let sections: Vec<String> = doc
        .iter()
        .filter(|cell| !cell.is_blank())
        .map(encode_cell)
        .collect();

    tracing::debug!(
        cells = doc.len(),
        encoded = sections.len(),
        "Encoding document"
    );

    if sections.is_empty() {
        return INSTRUCTIONS.to_string();
    }

    let mut output = sections.join("\n\n");
    output.push('\n');
    output.push_str(INSTRUCTIONS);
    output
}

/// Marker line plus content for one cell.
fn encode_cell(cell: &Cell) -> String {
    let body = match cell.kind {
        CellKind::Code => cell.text.clone(),
        CellKind::Markdown => prefix_lines(&cell.text),
    };
    format!("{}\n{}", marker_for(cell.kind), body)
}

fn prefix_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{}{}", CONTINUATION_PREFIX, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_code_verbatim() {
        let doc = Document::new(vec![Cell::code("x = 1\n  y = 2")]);
        let out = encode(&doc);
        assert!(out.starts_with("# CODE:\nx = 1\n  y = 2\n\n\n---\n"));
    }

    #[test]
    fn test_encode_markdown_prefix() {
        let doc = Document::new(vec![Cell::markdown("line1\nline2")]);
        let out = encode(&doc);
        assert!(out.starts_with("# MD:\n#: line1\n#: line2\n"));
    }

    #[test]
    fn test_encode_markdown_blank_inner_line() {
        let doc = Document::new(vec![Cell::markdown("a\n\nb")]);
        assert!(encode(&doc).starts_with("# MD:\n#: a\n#: \n#: b\n"));
    }

    #[test]
    fn test_encode_two_cells() {
        let doc = Document::new(vec![Cell::code("print(1)"), Cell::markdown("hello")]);
        let out = encode(&doc);
        let expected = format!("# CODE:\nprint(1)\n\n# MD:\n#: hello\n{}", INSTRUCTIONS);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_encode_skips_blank_cells() {
        let doc = Document::new(vec![
            Cell::code(""),
            Cell::markdown("x"),
            Cell::code("  \n "),
        ]);
        let out = encode(&doc);
        assert!(out.starts_with("# MD:\n#: x\n"));
        assert!(!out.starts_with("# CODE:"));
        assert_eq!(out, format!("# MD:\n#: x\n{}", INSTRUCTIONS));
    }

    #[test]
    fn test_encode_empty_document() {
        assert_eq!(encode(&Document::default()), INSTRUCTIONS);
        let only_blank = Document::new(vec![Cell::code(" "), Cell::markdown("\n")]);
        assert_eq!(encode(&only_blank), INSTRUCTIONS);
    }
}
