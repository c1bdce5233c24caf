//! Error types for the Gemini client.

use thiserror::Error;

/// Result type alias for Gemini client operations.
pub type Result<T> = std::result::Result<T, AskError>;

/// Errors that can occur while asking the model a question.
#[derive(Error, Debug)]
pub enum AskError {
    /// No API key in the environment or `.env`.
    #[error("API key not found. Please set the GEMINI_API_KEY environment variable with your Gemini API key.")]
    MissingApiKey,

    /// Question was empty or whitespace only.
    #[error("Empty question provided")]
    EmptyQuestion,

    /// The API rejected the key.
    #[error("Invalid API key. Please check your GEMINI_API_KEY environment variable.")]
    InvalidApiKey,

    /// The configured model does not exist.
    #[error("Model '{model}' not found. Available models are:\n{}", .available.join("\n"))]
    ModelNotFound {
        /// Model that was requested.
        model: String,
        /// Models that support content generation.
        available: Vec<String>,
    },

    /// The API answered without any text.
    #[error("Empty response from Gemini")]
    EmptyResponse,

    /// Any other non-success HTTP status.
    #[error("Gemini API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Transport failure (connection, timeout, decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AskError::ModelNotFound {
            model: "gemini-0".to_string(),
            available: vec!["gemini-2.5-pro".to_string(), "gemini-2.5-flash".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("gemini-0"));
        assert!(message.ends_with("gemini-2.5-pro\ngemini-2.5-flash"));

        let err = AskError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error (500): boom");

        assert!(AskError::MissingApiKey.to_string().contains("GEMINI_API_KEY"));
    }
}
