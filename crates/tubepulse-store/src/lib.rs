//! DynamoDB-backed stores for the TubePulse pipeline.
//!
//! This crate provides:
//! - [`AnalysisStore`]: the result table keyed by video id, including the
//!   comparable-video scan
//! - [`StatusStore`]: the request-status table keyed by correlation token
//!
//! Both are trait seams with DynamoDB implementations so handlers can be
//! exercised with fakes.

pub mod analysis_store;
pub mod config;
pub mod error;
pub mod marshal;
pub mod status_store;

pub use analysis_store::{AnalysisStore, DynamoAnalysisStore};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use status_store::{DynamoStatusStore, StatusStore};
