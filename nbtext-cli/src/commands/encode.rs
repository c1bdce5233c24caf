//! Encode command - Flatten a notebook into marked text for an LLM

use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of encoding a notebook
#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub source: String,
    pub destination: String,
    /// Cells written to the text file
    pub cells_written: usize,
    /// Blank cells left out
    pub cells_skipped: usize,
}

impl TableDisplay for EncodeResult {
    fn to_table(&self) -> String {
        let mut output = format!(
            "{} Created '{}'\n",
            "SUCCESS:".green().bold(),
            self.destination.cyan()
        );
        output.push_str(&format!("Total cells extracted: {}", self.cells_written));
        if self.cells_skipped > 0 {
            output.push_str(&format!(" ({} empty skipped)", self.cells_skipped));
        }
        output.push_str("\n\nYou can now share this .txt file with an LLM for modifications.");
        output
    }
}

/// Destination used when none is given: the source with a `.txt` extension.
pub fn default_destination(src: &Path) -> PathBuf {
    src.with_extension("txt")
}

/// Run the encode command
pub fn run(src: &str, dst: Option<&str>, format: OutputFormat) -> Result<()> {
    let src_path = Path::new(src);
    let content = std::fs::read_to_string(src_path)
        .with_context(|| format!("File '{}' not found or unreadable", src))?;

    let (text, doc) = nbtext_core::notebook_to_text(&content)
        .with_context(|| format!("'{}' is not a valid notebook", src))?;

    let dst_path = dst
        .map(PathBuf::from)
        .unwrap_or_else(|| default_destination(src_path));
    std::fs::write(&dst_path, &text)
        .with_context(|| format!("Failed to write to: {}", dst_path.display()))?;

    let cells_written = doc.non_blank_count();
    tracing::info!(
        destination = %dst_path.display(),
        cells_written,
        "Encoded notebook"
    );

    let result = EncodeResult {
        source: src.to_string(),
        destination: dst_path.display().to_string(),
        cells_written,
        cells_skipped: doc.len() - cells_written,
    };
    Output::new(result, format).render()
}
