//! nbtext core - round-trip conversion between notebooks and marked text.
//!
//! A notebook is flattened into plain text where each cell starts with a
//! marker line (`# CODE:` or `# MD:`) and markdown lines carry a `#: `
//! prefix. The text ends with instructions telling an LLM how to keep that
//! structure when it edits the file. Decoding reverses the process and drops
//! the instructions again.
//!
//! # Usage
//!
//! ```rust
//! use nbtext_core::{decode, encode, Cell, Document};
//!
//! let doc = Document::new(vec![Cell::code("print(1)"), Cell::markdown("hello")]);
//! let text = encode(&doc);
//! assert!(text.starts_with("# CODE:\nprint(1)\n\n# MD:\n#: hello"));
//! assert_eq!(decode(&text), doc);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod markers;
pub mod notebook;
pub mod types;

pub use decoder::decode;
pub use encoder::encode;
pub use error::{NotebookError, Result};
pub use notebook::{Notebook, NotebookInput};
pub use types::{Cell, CellKind, Document};

/// Parse notebook JSON and encode it as marked text.
///
/// Returns the text together with the parsed document so callers can report
/// on the cells.
pub fn notebook_to_text(json: &str) -> Result<(String, Document)> {
    let doc = NotebookInput::from_json(json)?.to_document();
    Ok((encode(&doc), doc))
}

/// Decode marked text and serialize it as pretty notebook JSON.
pub fn text_to_notebook(text: &str) -> Result<(String, Document)> {
    let doc = decode(text);
    let json = Notebook::from_document(&doc).to_json_pretty()?;
    Ok((json, doc))
}
