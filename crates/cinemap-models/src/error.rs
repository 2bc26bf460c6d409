//! Error types for model parsing and validation.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised at the project document boundary.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid project settings: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
