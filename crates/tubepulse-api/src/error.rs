//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error(transparent)]
    InvalidUrl(#[from] tubepulse_models::UrlError),

    #[error("Storage error: {0}")]
    Storage(#[from] tubepulse_storage::StorageError),

    #[error("Store error: {0}")]
    Store(#[from] tubepulse_store::StoreError),

    #[error("Events error: {0}")]
    Events(#[from] tubepulse_events::EventsError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_)
            | ApiError::Store(_)
            | ApiError::Events(_)
            | ApiError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let error = if status == StatusCode::INTERNAL_SERVER_ERROR
            && std::env::var("ENVIRONMENT").unwrap_or_default() == "production"
        {
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
