//! Error types for nbtext-core.

use thiserror::Error;

/// Result type alias for notebook container operations.
pub type Result<T> = std::result::Result<T, NotebookError>;

/// Errors raised at the notebook container boundary.
///
/// The encoder and decoder themselves never fail.
#[derive(Error, Debug)]
pub enum NotebookError {
    /// The input is not valid notebook JSON.
    #[error("Invalid notebook JSON: {0}")]
    Json(#[from] serde_json::Error),
}
