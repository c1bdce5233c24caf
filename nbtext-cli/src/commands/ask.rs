//! Ask command - Forward a question to Gemini and print the answer

use crate::config::NbtextConfig;
use crate::gemini::{AskError, GeminiClient, API_KEY_ENV};
use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::Result;
use serde::Serialize;
use std::time::Instant;

/// Answer returned by the model
#[derive(Debug, Serialize)]
pub struct AskResult {
    pub model: String,
    pub question: String,
    pub answer: String,
    pub elapsed_ms: u64,
}

impl TableDisplay for AskResult {
    fn to_table(&self) -> String {
        self.answer.trim_end().to_string()
    }
}

/// Read the API key after loading `.env`, if one exists.
fn api_key_from_env() -> Result<String, AskError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!("Failed to load .env: {}", e);
        }
    }
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(AskError::MissingApiKey)
}

/// Run the ask command
pub async fn run(
    question: &str,
    model: Option<&str>,
    timeout_secs: Option<u64>,
    config: &NbtextConfig,
    format: OutputFormat,
) -> Result<()> {
    if question.trim().is_empty() {
        return Err(AskError::EmptyQuestion.into());
    }

    let start = Instant::now();
    let options = config.client_options(api_key_from_env()?, model, timeout_secs);
    let client = GeminiClient::new(options)?;
    tracing::debug!(elapsed = ?start.elapsed(), model = client.model(), "Client ready");

    let answer = client.ask(question).await?;
    let elapsed = start.elapsed();
    tracing::debug!(elapsed = ?elapsed, "Response received");

    let result = AskResult {
        model: client.model().to_string(),
        question: question.to_string(),
        answer,
        elapsed_ms: elapsed.as_millis() as u64,
    };
    Output::new(result, format).render()
}
