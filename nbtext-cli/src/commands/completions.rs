//! Shell completions command - Generate shell completion scripts
//!
//! Generates completion scripts for bash, zsh, fish, powershell and elvish.

use std::io;

use clap::Command;
use clap_complete::{generate, shells};
use colored::Colorize;
use serde::Serialize;

use crate::output::{Output, OutputFormat, TableDisplay};

/// Name of the binary completions are generated for
const BIN_NAME: &str = "nbtext";

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Instructions for installing completions
#[derive(Debug, Serialize)]
pub struct CompletionInstructions {
    pub shell: String,
    pub instructions: Vec<String>,
}

impl TableDisplay for CompletionInstructions {
    fn to_table(&self) -> String {
        let mut output = format!(
            "{} completions for {}\n\n{}\n",
            BIN_NAME.cyan().bold(),
            self.shell.yellow(),
            "Installation:".cyan().bold()
        );
        for instruction in &self.instructions {
            output.push_str(&format!("  {}\n", instruction));
        }
        output
    }
}

fn get_instructions(shell: Shell) -> Vec<String> {
    let lines: &[&str] = match shell {
        Shell::Bash => &[
            "# Add to ~/.bashrc:",
            "eval \"$(nbtext completions bash)\"",
        ],
        Shell::Zsh => &[
            "# Add to ~/.zshrc:",
            "eval \"$(nbtext completions zsh)\"",
        ],
        Shell::Fish => &[
            "# Save to fish completions directory:",
            "nbtext completions fish > ~/.config/fish/completions/nbtext.fish",
        ],
        Shell::PowerShell => &[
            "# Add to $PROFILE:",
            "Invoke-Expression (& nbtext completions powershell | Out-String)",
        ],
        Shell::Elvish => &[
            "# Add to ~/.elvish/rc.elv:",
            "eval (nbtext completions elvish | slurp)",
        ],
    };
    lines.iter().map(|l| l.to_string()).collect()
}

/// Generate completions and write to stdout using provided Command
pub fn generate_completions_with_cmd(shell: Shell, cmd: &mut Command) {
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, BIN_NAME, &mut io::stdout()),
        Shell::Zsh => generate(shells::Zsh, cmd, BIN_NAME, &mut io::stdout()),
        Shell::Fish => generate(shells::Fish, cmd, BIN_NAME, &mut io::stdout()),
        Shell::PowerShell => generate(shells::PowerShell, cmd, BIN_NAME, &mut io::stdout()),
        Shell::Elvish => generate(shells::Elvish, cmd, BIN_NAME, &mut io::stdout()),
    }
}

/// Print installation instructions for a shell
pub fn run_instructions(shell: Shell, format: OutputFormat) -> anyhow::Result<()> {
    let instructions = CompletionInstructions {
        shell: shell.to_string(),
        instructions: get_instructions(shell),
    };
    Output::new(instructions, format).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_display() {
        assert_eq!(Shell::Bash.to_string(), "bash");
        assert_eq!(Shell::PowerShell.to_string(), "powershell");
    }

    #[test]
    fn test_get_instructions() {
        let bash = get_instructions(Shell::Bash);
        assert!(bash.iter().any(|i| i.contains("bashrc")));

        let fish = get_instructions(Shell::Fish);
        assert!(fish.iter().any(|i| i.contains("nbtext.fish")));
    }
}
