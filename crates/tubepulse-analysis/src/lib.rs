//! Pure analysis core for the TubePulse pipeline.
//!
//! This crate provides:
//! - Transcript chunking for the size-limited summarization endpoint
//! - Rule-based content categorization over keyword tables
//! - Lexicon-based sentiment scoring with feedback templates
//! - Suggestion list rendering
//!
//! Everything here is deterministic and side-effect free; the keyword and
//! lexicon tables are explicit configuration objects so tests can
//! substitute smaller tables.

pub mod chunk;
pub mod classify;
pub mod feedback;
pub mod sentiment;

pub use chunk::{chunk_text, MAX_CHUNK_CHARS};
pub use classify::KeywordTable;
pub use feedback::{
    feedback_message, feedback_tier, render_suggestions, score_percentage, FeedbackTier,
    MIN_SUGGESTION_SCORE, NO_SUGGESTIONS_MESSAGE, SUGGESTION_LIMIT,
};
pub use sentiment::SentimentLexicon;
