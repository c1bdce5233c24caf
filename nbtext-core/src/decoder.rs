//! Marked-text to document decoder.
//!
//! A line-oriented state machine. Text before the first marker is code. Each
//! marker line closes the cell being built and opens a new one of the
//! marker's kind. The instructional suffix written by the encoder is
//! recognized and dropped.

use crate::markers::{
    classify_line, CONTINUATION_PREFIX, SUFFIX_CLOSING, SUFFIX_LINE_COUNT, SUFFIX_SENTINEL,
};
use crate::types::{Cell, CellKind, Document};

/// Decode marked text into a document. Never fails: text without markers
/// becomes a single code cell.
pub fn decode(text: &str) -> Document {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut decoder = Decoder::default();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(kind) = classify_line(line) {
            decoder.open(kind);
            i += 1;
            continue;
        }

        if opens_suffix(&lines, i) {
            let end = suffix_end(&lines, i);
            tracing::debug!(start = i, end, "Skipping instructional suffix");
            decoder.drop_trailing_blank_lines();
            i = end;
            continue;
        }

        decoder.push_line(line);
        i += 1;
    }

    decoder.finish()
}

/// Accumulates lines for the cell currently open.
#[derive(Default)]
struct Decoder<'a> {
    state: CellKind,
    buffer: Vec<&'a str>,
    cells: Vec<Cell>,
}

impl<'a> Decoder<'a> {
    fn open(&mut self, kind: CellKind) {
        self.flush();
        self.state = kind;
    }

    fn push_line(&mut self, line: &'a str) {
        let line = match self.state {
            CellKind::Markdown => line.strip_prefix(CONTINUATION_PREFIX).unwrap_or(line),
            CellKind::Code => line,
        };
        self.buffer.push(line);
    }

    /// Blank lines directly before the suffix belong to it, not to the cell.
    fn drop_trailing_blank_lines(&mut self) {
        while self.buffer.last().is_some_and(|l| l.trim().is_empty()) {
            self.buffer.pop();
        }
    }

    /// Emit the buffered cell. A buffer holding only blank lines still yields
    /// a (blank) cell; an empty buffer yields nothing.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = self.buffer.join("\n").trim_end().to_string();
        self.cells.push(Cell::new(self.state, text));
        self.buffer.clear();
    }

    fn finish(mut self) -> Document {
        self.flush();
        Document::new(self.cells)
    }
}

/// The suffix starts at a line containing `---` followed by the sentinel.
fn opens_suffix(lines: &[&str], i: usize) -> bool {
    lines[i].contains("---")
        && lines
            .get(i + 1)
            .is_some_and(|next| suffix_text(next) == SUFFIX_SENTINEL)
}

/// A suffix line with surrounding whitespace and any `#:` prefix removed.
/// Editors sometimes carry the markdown prefix onto the suffix lines.
fn suffix_text(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix(CONTINUATION_PREFIX.trim_end())
        .map_or(line, str::trim)
}

/// Index of the first line after the suffix that starts at `start`.
///
/// The suffix runs through its closing sentence plus the empty line left by
/// its trailing newline. The closing sentence is only looked for within the
/// suffix's fixed line count; without it, that count is skipped instead.
fn suffix_end(lines: &[&str], start: usize) -> usize {
    let window_end = (start + SUFFIX_LINE_COUNT).min(lines.len());
    let closing = lines[start + 2..window_end]
        .iter()
        .position(|line| suffix_text(line) == SUFFIX_CLOSING)
        .map(|offset| start + 2 + offset);

    match closing {
        Some(idx) => {
            let after = idx + 1;
            if lines.get(after).is_some_and(|l| l.is_empty()) && after + 1 == lines.len() {
                after + 1
            } else {
                after
            }
        }
        None => window_end,
    }
}
