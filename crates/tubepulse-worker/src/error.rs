//! Worker error types.

use thiserror::Error;

pub type WorkerResult<T> = Result<T, WorkerError>;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Missing transcript: {0}")]
    MissingTranscript(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Inference error: {0}")]
    Inference(#[from] tubepulse_inference::InferenceError),

    #[error("Storage error: {0}")]
    Storage(#[from] tubepulse_storage::StorageError),

    #[error("Store error: {0}")]
    Store(#[from] tubepulse_store::StoreError),

    #[error("Events error: {0}")]
    Events(#[from] tubepulse_events::EventsError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkerError {
    pub fn missing_transcript(msg: impl Into<String>) -> Self {
        Self::MissingTranscript(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
