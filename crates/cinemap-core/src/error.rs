//! Error types for editing operations.
//!
//! Interpolation itself never fails; these cover sequence and editor updates.

use cinemap_models::{KeyframeId, ModelError};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Keyframe not found: {0}")]
    KeyframeNotFound(KeyframeId),

    #[error("Invalid project settings: {0}")]
    InvalidSettings(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CoreError {
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings(message.into())
    }
}
