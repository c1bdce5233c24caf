//! Notebook (`.ipynb`) container model.
//!
//! Reading is permissive: only `cells[].cell_type` and `cells[].source` are
//! looked at. Writing produces a minimal nbformat 4.4 notebook with a fixed
//! Python 3 kernelspec.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::types::{Cell, CellKind, Document};

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 4;

/// Cell source: either one string or a list of fragments to concatenate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl Source {
    pub fn concat(&self) -> String {
        match self {
            Source::Text(text) => text.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }
}

/// A cell record as read from a notebook file.
#[derive(Clone, Debug, Deserialize)]
pub struct CellRecord {
    #[serde(default = "default_cell_type")]
    pub cell_type: String,
    #[serde(default)]
    pub source: Source,
}

fn default_cell_type() -> String {
    CellKind::Code.as_str().to_string()
}

impl CellRecord {
    pub fn to_cell(&self) -> Cell {
        Cell::new(
            CellKind::from_cell_type(&self.cell_type),
            self.source.concat(),
        )
    }
}

/// A cell as written to a notebook file.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum NotebookCell {
    Code {
        execution_count: Option<u32>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: String,
    },
    Markdown {
        metadata: Map<String, Value>,
        source: String,
    },
}

impl From<&Cell> for NotebookCell {
    fn from(cell: &Cell) -> Self {
        match cell.kind {
            CellKind::Code => NotebookCell::Code {
                execution_count: None,
                metadata: Map::new(),
                outputs: Vec::new(),
                source: cell.text.clone(),
            },
            CellKind::Markdown => NotebookCell::Markdown {
                metadata: Map::new(),
                source: cell.text.clone(),
            },
        }
    }
}

/// Notebook as read from disk.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NotebookInput {
    #[serde(default)]
    pub cells: Vec<CellRecord>,
}

impl NotebookInput {
    /// Parse notebook JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_document(&self) -> Document {
        self.cells.iter().map(CellRecord::to_cell).collect()
    }
}

/// Notebook as written to disk.
#[derive(Clone, Debug, Serialize)]
pub struct Notebook {
    pub cells: Vec<NotebookCell>,
    pub metadata: Value,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    /// Build a notebook from a document with the default metadata.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            cells: doc.iter().map(NotebookCell::from).collect(),
            metadata: default_metadata(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Pretty JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Kernel and language metadata written into every generated notebook.
pub fn default_metadata() -> Value {
    json!({
        "kernelspec": {
            "display_name": "Python 3",
            "language": "python",
            "name": "python3"
        },
        "language_info": {
            "codemirror_mode": {
                "name": "ipython",
                "version": 3
            },
            "file_extension": ".py",
            "mimetype": "text/x-python",
            "name": "python",
            "nbconvert_exporter": "python",
            "pygments_lexer": "ipython3",
            "version": "3.8.0"
        }
    })
}
