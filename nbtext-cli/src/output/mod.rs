//! Output formatting module for the nbtext CLI
//!
//! Command results render either as colored human-readable text (table) or
//! as JSON for scripts.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod json;

pub use self::json::JsonOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Compact mode (single-line JSON)
    pub compact: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            compact: false,
        }
    }
}

/// Trait for command results that can be displayed
///
/// `to_table` is the human-readable rendering; JSON comes from `Serialize`.
pub trait TableDisplay: Serialize {
    /// Convert to human-readable text
    fn to_table(&self) -> String;

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => JsonOutput::format(self, config),
        }
    }
}

/// Result wrapper for formatted output with automatic format selection
pub struct Output<T> {
    data: T,
    config: OutputConfig,
}

impl<T: TableDisplay> Output<T> {
    /// Create a new output wrapper with specified format
    pub fn new(data: T, format: OutputFormat) -> Self {
        Self {
            data,
            config: OutputConfig::new(format),
        }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Note {
        message: String,
    }

    impl TableDisplay for Note {
        fn to_table(&self) -> String {
            format!("note: {}", self.message)
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_by_format() {
        let note = Note {
            message: "hi".to_string(),
        };
        let table = note.render(&OutputConfig::new(OutputFormat::Table));
        assert_eq!(table, "note: hi");

        let json = note.render(&OutputConfig {
            format: OutputFormat::Json,
            compact: true,
        });
        assert_eq!(json, r#"{"message":"hi"}"#);
    }

    #[test]
    fn test_output_wrapper_render_to_string() {
        let output = Output::new(
            Note {
                message: "x".to_string(),
            },
            OutputFormat::Json,
        );
        assert!(output.render_to_string().contains("\"message\": \"x\""));
    }
}
