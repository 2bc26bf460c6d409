//! Render pipeline error types.

use cinemap_models::ModelError;
use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project error: {0}")]
    Model(#[from] ModelError),

    #[error("Frame target error: {0}")]
    Target(String),

    #[error("Sampling task failed: {0}")]
    TaskJoin(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No project file given (pass a path or set CINEMAP_PROJECT)")]
    MissingProject,
}

impl RenderError {
    pub fn target(msg: impl Into<String>) -> Self {
        Self::Target(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<tokio::task::JoinError> for RenderError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::TaskJoin(e.to_string())
    }
}
