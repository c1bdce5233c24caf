//! nbtext configuration loading from `.nbtextrc.toml`.
//!
//! Configuration is optional - nbtext uses defaults when no config file
//! exists. Command-line flags override anything set here.
//!
//! # Example Configuration
//!
//! ```toml
//! [ask]
//! model = "gemini-2.5-flash-lite"
//! timeout_secs = 60
//! api_base = "https://generativelanguage.googleapis.com/v1beta"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::gemini::{ClientOptions, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".nbtextrc.toml";

/// Root configuration structure loaded from `.nbtextrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct NbtextConfig {
    /// Settings for the `ask` command.
    #[serde(default)]
    pub ask: AskSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Settings for the Gemini client used by `nbtext ask`.
#[derive(Debug, Deserialize, Default)]
pub struct AskSettings {
    /// Model name, e.g. `gemini-2.5-flash-lite`.
    #[serde(default)]
    pub model: Option<String>,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Base URL of the Generative Language API.
    #[serde(default)]
    pub api_base: Option<String>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Unset means auto-detect.
    #[serde(default)]
    pub color: Option<bool>,
}

impl NbtextConfig {
    /// Load configuration from `.nbtextrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Build client options for `ask`.
    ///
    /// Precedence: explicit flag, then config file, then built-in default.
    pub fn client_options(
        &self,
        api_key: String,
        model: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> ClientOptions {
        let model = model
            .map(str::to_string)
            .or_else(|| self.ask.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout = timeout_secs
            .or(self.ask.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let api_base = self
            .ask
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        ClientOptions::new(api_key)
            .with_model(model)
            .with_timeout(Duration::from_secs(timeout))
            .with_api_base(api_base)
    }
}
