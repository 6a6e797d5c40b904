//! Client for the hosted summarization endpoint.
//!
//! The endpoint is an opaque external function: JSON in, one summary out.
//! No retries; a failed call aborts the caller's whole analysis.

pub mod client;
pub mod error;

pub use client::{Summarizer, SummarizerClient, SummarizerConfig};
pub use error::{InferenceError, InferenceResult};
