//! Events error types.

use thiserror::Error;

pub type EventsResult<T> = Result<T, EventsError>;

#[derive(Debug, Error)]
pub enum EventsError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
