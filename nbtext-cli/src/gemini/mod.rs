//! Minimal client for the Google Gemini `generateContent` API.
//!
//! The client is an explicit value built from [`ClientOptions`]; nothing is
//! read from the environment here.

mod error;

pub use error::{AskError, Result};

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used when neither a flag nor the config names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Public Generative Language API endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Generation method a model must support to be suggested.
const GENERATE_METHOD: &str = "generateContent";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Gemini API client.
pub struct GeminiClient {
    http: Client,
    options: ClientOptions,
}

impl GeminiClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        if options.api_key.trim().is_empty() {
            return Err(AskError::MissingApiKey);
        }
        let http = Client::builder().timeout(options.timeout).build()?;
        Ok(Self { http, options })
    }

    pub fn model(&self) -> &str {
        &self.options.model
    }

    /// Ask a question using the CLI answer prompt.
    ///
    /// A 404 for the model is turned into [`AskError::ModelNotFound`] listing
    /// the models that can generate content.
    pub async fn ask(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(AskError::EmptyQuestion);
        }
        match self.generate(&build_prompt(question)).await {
            Err(AskError::Api { status: 404, .. }) => {
                let available = self.list_generation_models().await?;
                Err(AskError::ModelNotFound {
                    model: self.options.model.clone(),
                    available,
                })
            }
            other => other,
        }
    }

    /// Send a raw prompt and return the concatenated answer text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.options.api_base, self.options.model
        );
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        tracing::debug!(model = %self.options.model, "Sending generateContent request");
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.options.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(classify_failure(status, message));
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AskError::EmptyResponse);
        }
        Ok(text)
    }

    /// Names of the models that support `generateContent`, without the
    /// `models/` prefix.
    pub async fn list_generation_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/models", self.options.api_base);
        let resp = self
            .http
            .get(&url)
            .header("x-goog-api-key", &self.options.api_key)
            .query(&[("pageSize", "1000")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(classify_failure(status, message));
        }

        let list: ModelList = resp.json().await?;
        Ok(list
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == GENERATE_METHOD)
            })
            .map(|m| {
                m.name
                    .strip_prefix("models/")
                    .unwrap_or(&m.name)
                    .to_string()
            })
            .collect())
    }
}

fn classify_failure(status: StatusCode, message: String) -> AskError {
    let key_rejected = matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) && message.contains("API key");

    if key_rejected {
        AskError::InvalidApiKey
    } else {
        AskError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Wrap a question in instructions suited to terminal display.
pub fn build_prompt(question: &str) -> String {
    format!(
        r#"
Please provide a helpful, accurate, and concise response to the following question.
If it's a technical question, include practical examples when appropriate.
If it's a coding question, provide clear code examples with explanations.
This will be used in a CLI environment so adapt your response with:
 - No large code snippets.
 - Use "-" for bullet points.
 - add spaces before and after bullet points.
 - make the response concise and as direct and short as possible.

return only the main response text.
if question is too ambiguous, ask for clarification or more context.
Also the user is a developer, so serious tone, provide good response with playful tone but absolutely no icons or emojis.
Question: {question}
"#
    )
}
