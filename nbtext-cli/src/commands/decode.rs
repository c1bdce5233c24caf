//! Decode command - Rebuild a notebook from marked text

use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of decoding marked text
#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub source: String,
    pub destination: String,
    pub cells: usize,
    pub code_cells: usize,
    pub markdown_cells: usize,
}

impl TableDisplay for DecodeResult {
    fn to_table(&self) -> String {
        format!(
            "{} Created '{}'\nTotal cells: {} ({} code, {} markdown)",
            "SUCCESS:".green().bold(),
            self.destination.cyan(),
            self.cells,
            self.code_cells,
            self.markdown_cells
        )
    }
}

/// Destination used when none is given: the source with an `.ipynb` extension.
pub fn default_destination(src: &Path) -> PathBuf {
    src.with_extension("ipynb")
}

fn is_notebook(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "ipynb")
}

/// Run the decode command
pub fn run(src: &str, dst: Option<&str>, format: OutputFormat) -> Result<()> {
    let src_path = Path::new(src);
    if is_notebook(src_path) {
        anyhow::bail!("Input file must be a .txt or .py file, got '{}'", src);
    }

    let text = std::fs::read_to_string(src_path)
        .with_context(|| format!("File '{}' not found or unreadable", src))?;

    let (json, doc) = nbtext_core::text_to_notebook(&text)?;

    let dst_path = dst
        .map(PathBuf::from)
        .unwrap_or_else(|| default_destination(src_path));
    std::fs::write(&dst_path, json)
        .with_context(|| format!("Failed to write to: {}", dst_path.display()))?;

    let markdown_cells = doc
        .iter()
        .filter(|c| c.kind == nbtext_core::CellKind::Markdown)
        .count();
    tracing::info!(
        destination = %dst_path.display(),
        cells = doc.len(),
        "Decoded notebook"
    );

    let result = DecodeResult {
        source: src.to_string(),
        destination: dst_path.display().to_string(),
        cells: doc.len(),
        code_cells: doc.len() - markdown_cells,
        markdown_cells,
    };
    Output::new(result, format).render()
}
