//! Marker vocabulary of the marked-text format.

use crate::types::CellKind;

/// Line that opens a code cell.
pub const CODE_MARKER: &str = "# CODE:";

/// Line that opens a markdown cell.
pub const MD_MARKER: &str = "# MD:";

/// Prefix carried by every markdown content line.
pub const CONTINUATION_PREFIX: &str = "#: ";

/// First text line of the instructional suffix.
pub const SUFFIX_SENTINEL: &str =
    "When generating a python code dedicated for Jupyter Notebook, structure your response as follows:";

/// Last text line of the instructional suffix.
pub const SUFFIX_CLOSING: &str = "In both cases, ensure you return to line after the marker.";

/// Number of lines the suffix occupies, counted from its `---` line through
/// the empty line left by its trailing newline.
pub const SUFFIX_LINE_COUNT: usize = 15;

/// Instructions appended after the last cell for a downstream LLM editor.
pub const INSTRUCTIONS: &str = concat!(
    "\n\n---\n",
    "When generating a python code dedicated for Jupyter Notebook, structure your response as follows:\n",
    "\n",
    "For markdown cells, use:\n",
    "# MD: \n",
    "Markdown content here\n",
    "Additional markdown explanations here.\n",
    "\n",
    "For code cells, use:\n",
    "# CODE:\n",
    "your_code_here()\n",
    "additional_code_here()\n",
    "\n",
    "In both cases, ensure you return to line after the marker.\n",
);

/// The marker line for a cell kind.
pub fn marker_for(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Code => CODE_MARKER,
        CellKind::Markdown => MD_MARKER,
    }
}

/// Return the kind a line opens, if it is a marker line.
///
/// Surrounding whitespace is tolerated and anything after the marker on the
/// same line is ignored.
pub fn classify_line(line: &str) -> Option<CellKind> {
    let trimmed = line.trim();
    if trimmed.starts_with(MD_MARKER) {
        Some(CellKind::Markdown)
    } else if trimmed.starts_with(CODE_MARKER) {
        Some(CellKind::Code)
    } else {
        None
    }
}
