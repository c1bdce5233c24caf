//! Data models shared by the encoder and decoder.
//!
//! A [`Document`] is an ordered list of [`Cell`]s. Order is reading order and
//! is never changed by conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a notebook cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Executable code. Also the kind of text that appears before any marker.
    #[default]
    Code,
    /// Markdown prose.
    Markdown,
}

impl CellKind {
    /// The `cell_type` tag used by the notebook container.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
        }
    }

    /// Map a notebook `cell_type` tag to a kind.
    ///
    /// Only `"markdown"` is markdown; every other tag (including `"raw"`) is
    /// treated as code.
    pub fn from_cell_type(tag: &str) -> Self {
        if tag == "markdown" {
            CellKind::Markdown
        } else {
            CellKind::Code
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single content block: a kind and its text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    /// Cell content with internal line breaks preserved.
    pub text: String,
}

impl Cell {
    pub fn new(kind: CellKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(CellKind::Code, text)
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self::new(CellKind::Markdown, text)
    }

    /// True when the text is empty or whitespace only. Such cells are
    /// dropped by the encoder.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An ordered sequence of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub cells: Vec<Cell>,
}

impl Document {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells that survive encoding.
    pub fn non_blank_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }
}

impl FromIterator<Cell> for Document {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_kind_from_cell_type() {
        assert_eq!(CellKind::from_cell_type("markdown"), CellKind::Markdown);
        assert_eq!(CellKind::from_cell_type("code"), CellKind::Code);
        assert_eq!(CellKind::from_cell_type("raw"), CellKind::Code);
        assert_eq!(CellKind::from_cell_type(""), CellKind::Code);
    }

    #[test]
    fn test_cell_kind_display() {
        assert_eq!(CellKind::Code.to_string(), "code");
        assert_eq!(CellKind::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_is_blank() {
        assert!(Cell::code("").is_blank());
        assert!(Cell::markdown("  \n\t ").is_blank());
        assert!(!Cell::code(" x ").is_blank());
    }

    #[test]
    fn test_non_blank_count() {
        let doc: Document = vec![Cell::code(""), Cell::markdown("x"), Cell::code("  ")]
            .into_iter()
            .collect();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.non_blank_count(), 1);
    }
}
