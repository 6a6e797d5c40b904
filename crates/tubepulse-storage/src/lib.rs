//! S3 handoff-bucket client.
//!
//! Ingestion writes the normalized handoff record here; the analysis
//! worker reads it back when the object-created notification arrives.

pub mod client;
pub mod error;

pub use client::{ObjectStore, S3Client, S3Config};
pub use error::{StorageError, StorageResult};
