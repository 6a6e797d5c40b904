//! Feedback rendering: sentiment tiers, message templates, percentage
//! formatting, and suggestion lists.

use tubepulse_models::Category;

/// Maximum number of suggestion links rendered.
pub const SUGGESTION_LIMIT: usize = 5;

/// Sentiment threshold a video must strictly exceed to be suggested.
pub const MIN_SUGGESTION_SCORE: f64 = 0.55;

/// Fallback message when no comparable videos are found.
pub const NO_SUGGESTIONS_MESSAGE: &str =
    " Unfortunately, we couldn't find top videos in this category at the moment.";

/// Feedback tier derived from a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Positive,
    Neutral,
    Negative,
}

/// Map a score to its feedback tier: above 0.5 positive, exactly 0.5
/// neutral, below negative. Scores are exact tenths, so the equality
/// comparison is sound.
pub fn feedback_tier(score: f64) -> FeedbackTier {
    if score > 0.5 {
        FeedbackTier::Positive
    } else if score == 0.5 {
        FeedbackTier::Neutral
    } else {
        FeedbackTier::Negative
    }
}

/// Render the creator-facing feedback message for a score and category.
pub fn feedback_message(score: f64, category: Category) -> String {
    match feedback_tier(score) {
        FeedbackTier::Positive => format!(
            "Your video in the '{}' category is doing well! The sentiment is very positive. \
             Keep up the great work! If you are curious about some other well-performing videos \
             in this category, check them out below!",
            category
        ),
        FeedbackTier::Neutral => format!(
            "Your video in the '{}' category has a neutral sentiment. It’s good, but there’s \
             room for improvement. Consider engaging your audience more. Take a look at some \
             video suggestions below for inspiration!",
            category
        ),
        FeedbackTier::Negative => format!(
            "Your video in the '{}' category received negative sentiment feedback. Analyze the \
             comments and consider addressing viewer concerns to improve. Here are some videos \
             in the same category that might help you understand how to better engage your \
             audience.",
            category
        ),
    }
}

/// Floor-truncated integer percentage, rendered as `"NN%"`.
pub fn score_percentage(score: f64) -> String {
    format!("{}%", (score * 100.0).floor() as i64)
}

/// Render up to [`SUGGESTION_LIMIT`] links as `- <link>` lines joined by
/// newlines, or the fixed fallback message when the list is empty.
pub fn render_suggestions(links: &[String]) -> String {
    if links.is_empty() {
        return NO_SUGGESTIONS_MESSAGE.to_string();
    }

    links
        .iter()
        .take(SUGGESTION_LIMIT)
        .map(|link| format!("- {}", link))
        .collect::<Vec<_>>()
        .join("\n")
}
