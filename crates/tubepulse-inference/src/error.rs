//! Inference error types.

use thiserror::Error;

/// Result type for inference operations.
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Errors that can occur calling the summarization endpoint.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Failed to configure inference client: {0}")]
    ConfigError(String),

    #[error("Endpoint returned {0}: {1}")]
    EndpointFailed(u16, String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl InferenceError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
