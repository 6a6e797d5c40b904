//! Analysis worker.
//!
//! Consumes object-created notifications, reads the handoff record from
//! the bucket, and runs the full analysis: chunked summarization,
//! categorization, sentiment scoring, comparable-video lookup, and the
//! final status update.

pub mod config;
pub mod error;
pub mod executor;
pub mod processor;

pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use executor::WorkerExecutor;
pub use processor::ProcessingContext;
