//! Shared data models for the TubePulse backend.
//!
//! This crate provides Serde-serializable types for:
//! - The storage handoff record written by ingestion
//! - Analysis results and the final feedback payload
//! - Request status tracking
//! - Video identifier extraction from YouTube URLs

pub mod category;
pub mod record;
pub mod url;

// Re-export common types
pub use category::Category;
pub use record::{AnalysisRecord, FinalResult, HandoffRecord, RequestStatus, MAX_COMMENT_CHARS};
pub use url::{extract_video_id, UrlError, UrlResult};
