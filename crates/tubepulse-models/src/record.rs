//! Pipeline records: the storage handoff object, the persisted analysis
//! result, and the request status entity.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Maximum number of comment characters kept at ingestion.
pub const MAX_COMMENT_CHARS: usize = 2000;

/// The normalized record written to object storage by ingestion and read
/// back by the analysis worker.
///
/// Keyed in the bucket as `<video_id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffRecord {
    /// Raw comment text, truncated to [`MAX_COMMENT_CHARS`] characters.
    pub transcript: String,
    /// Canonical video identifier.
    pub id: String,
    /// Caller-supplied correlation token for status reporting.
    pub request_id: String,
}

impl HandoffRecord {
    /// Build a handoff record, truncating the comment text.
    pub fn new(
        video_id: impl Into<String>,
        request_id: impl Into<String>,
        comments: &str,
    ) -> Self {
        Self {
            transcript: comments.chars().take(MAX_COMMENT_CHARS).collect(),
            id: video_id.into(),
            request_id: request_id.into(),
        }
    }

    /// Object-storage key for this record.
    pub fn storage_key(&self) -> String {
        format!("{}.json", self.id)
    }
}

/// The structured payload returned to the caller and mirrored into the
/// request status entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalResult {
    pub video_id: String,
    pub category: Category,
    /// Integer percent, floor-truncated, rendered as `"NN%"`.
    pub sentiment_score_percentage: String,
    /// Templated feedback message for the creator.
    pub sentiment_feedback: String,
    /// Newline-joined suggestion links, or the fixed fallback message.
    pub video_suggestions: String,
}

/// The full analysis record persisted to the result store, keyed by
/// video id. Written once, after all fields are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub video_id: String,
    /// Raw input text the summary was produced from.
    pub input_text: String,
    /// Space-joined per-chunk summaries, order preserving.
    pub summary: String,
    pub category: Category,
    /// Sentiment score in [0.2, 1.0].
    pub sentiment_score: f64,
    pub video_suggestions: String,
    /// Serialized [`FinalResult`] payload.
    pub final_result: String,
}

/// Lifecycle state of a caller's analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoff_truncates_comments() {
        let comments: String = "x".repeat(MAX_COMMENT_CHARS + 500);
        let record = HandoffRecord::new("abc123", "req-1", &comments);
        assert_eq!(record.transcript.chars().count(), MAX_COMMENT_CHARS);
        assert_eq!(record.id, "abc123");
    }

    #[test]
    fn test_handoff_short_comments_untouched() {
        let record = HandoffRecord::new("abc123", "req-1", "great video");
        assert_eq!(record.transcript, "great video");
    }

    #[test]
    fn test_handoff_truncation_respects_char_boundaries() {
        // Multi-byte characters count as one character each.
        let comments: String = "é".repeat(MAX_COMMENT_CHARS + 10);
        let record = HandoffRecord::new("abc123", "req-1", &comments);
        assert_eq!(record.transcript.chars().count(), MAX_COMMENT_CHARS);
    }

    #[test]
    fn test_storage_key() {
        let record = HandoffRecord::new("dQw4w9WgXcQ", "req-1", "");
        assert_eq!(record.storage_key(), "dQw4w9WgXcQ.json");
    }

    #[test]
    fn test_handoff_serde_field_names() {
        let record = HandoffRecord::new("abc", "req-1", "hello");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["transcript"], "hello");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["request_id"], "req-1");
    }

    #[test]
    fn test_final_result_serialization() {
        let result = FinalResult {
            video_id: "abc".to_string(),
            category: Category::Tech,
            sentiment_score_percentage: "70%".to_string(),
            sentiment_feedback: "feedback".to_string(),
            video_suggestions: "- link".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "tech");
        assert_eq!(json["sentiment_score_percentage"], "70%");
    }
}
