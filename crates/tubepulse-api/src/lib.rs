//! Axum HTTP API server.
//!
//! This crate provides:
//! - The ingestion endpoint that accepts video feedback requests
//! - Duplicate-analysis short-circuit against the result store
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
