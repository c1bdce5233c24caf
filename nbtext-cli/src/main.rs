//! nbtext CLI - Notebook to text conversion for LLM editing
//!
//! Flattens Jupyter notebooks into marked plain text an LLM can rewrite,
//! rebuilds notebooks from that text, and forwards quick questions to Gemini.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod gemini;
mod output;

use commands::*;
use config::NbtextConfig;
use output::OutputFormat;

/// Round-trip Jupyter notebooks through LLM-friendly text.
#[derive(Parser)]
#[command(name = "nbtext")]
#[command(author, version)]
#[command(about = "Round-trip Jupyter notebooks through LLM-friendly text")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  nbtext encode analysis.ipynb          Write analysis.txt
  nbtext decode analysis.txt out.ipynb  Rebuild a notebook
  nbtext ask \"what is a closure?\"       Ask Gemini a quick question")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a notebook (.ipynb) to marked text (.txt)
    Encode {
        /// Notebook to read
        src: String,

        /// Text file to write (default: source with .txt extension)
        dst: Option<String>,
    },

    /// Convert marked text back to a notebook (.ipynb)
    Decode {
        /// Text file to read (.txt or .py)
        src: String,

        /// Notebook to write (default: source with .ipynb extension)
        dst: Option<String>,
    },

    /// Ask Gemini a question and print the answer
    Ask {
        /// The question to send
        question: String,

        /// Model name (overrides config)
        #[arg(short, long)]
        model: Option<String>,

        /// Request timeout in seconds (overrides config)
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = NbtextConfig::load(std::path::Path::new("."));

    // CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Encode { src, dst } => encode::run(&src, dst.as_deref(), format),
        Commands::Decode { src, dst } => decode::run(&src, dst.as_deref(), format),
        Commands::Ask {
            question,
            model,
            timeout,
        } => ask::run(&question, model.as_deref(), timeout, &config, format).await,
        Commands::Completions {
            shell,
            instructions,
        } => {
            if instructions {
                completions::run_instructions(shell, format)
            } else {
                let mut cmd = Cli::command();
                completions::generate_completions_with_cmd(shell, &mut cmd);
                Ok(())
            }
        }
    }
}
