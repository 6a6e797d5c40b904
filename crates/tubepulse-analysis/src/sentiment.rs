//! Lexicon-based sentiment scoring.

use std::collections::HashSet;

/// Baseline score before any lexicon match, in tenths.
const BASELINE_TENTHS: i32 = 7;
/// Clamp bounds, in tenths.
const MIN_TENTHS: i32 = 2;
const MAX_TENTHS: i32 = 10;

/// Positive/negative word lists driving sentiment scoring.
///
/// Tokens are produced by whitespace-splitting the case-folded text and
/// matched exactly, so every lexicon entry must be a single word. The
/// default lexicon is the production one; tests may substitute smaller
/// lists with [`SentimentLexicon::new`].
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicon {
    /// Build a lexicon from explicit word lists.
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    /// Score text: baseline 0.7, +0.1 per positive token, -0.1 per negative
    /// token, clamped to [0.2, 1.0].
    ///
    /// A token in both lists counts as positive. The arithmetic runs on an
    /// integer tenths scale so the neutral 0.5 boundary is exact.
    pub fn score(&self, text: &str) -> f64 {
        let mut tenths = BASELINE_TENTHS;

        for token in text.to_lowercase().split_whitespace() {
            if self.positive.contains(token) {
                tenths += 1;
            } else if self.negative.contains(token) {
                tenths -= 1;
            }
        }

        f64::from(tenths.clamp(MIN_TENTHS, MAX_TENTHS)) / 10.0
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(
            words(&[
                "good", "great", "excellent", "amazing", "awesome", "fantastic", "love", "lovely",
                "beautiful", "nice", "cool", "perfect", "funny", "hilarious", "superb", "wonderful",
                "brilliant", "incredible", "dope", "epic", "genius", "sweet", "lit", "wow",
                "impressive", "inspiring", "helpful", "cheerful", "fun", "enjoyable", "informative",
                "outstanding", "creative", "unique", "spectacular", "entertaining", "breathtaking",
                "thoughtful", "insightful", "engaging", "relatable", "exciting", "uplifting",
                "supportive", "motivating", "refreshing", "heartwarming", "innovative", "kind",
                "charming", "pleasant", "admirable", "favorite", "fav", "fave", "adorable",
                "blessed", "legendary", "proud", "super", "respect", "accurate", "clever",
                "funniest", "amused",
            ]),
            words(&[
                "bad", "poor", "terrible", "horrible", "awful", "hate", "worst", "boring", "dull",
                "annoying", "cringe", "stupid", "lame", "weak", "ugly", "nonsense", "trash",
                "garbage", "disgusting", "lazy", "failure", "broken", "toxic", "negative", "sad",
                "angry", "disappointed", "mad", "upset", "hurt", "sick", "nasty", "arrogant",
                "ignorant", "fake", "cheap", "overrated", "pathetic", "pointless", "shame",
                "gross", "irritating", "useless", "mean", "offensive", "irrelevant", "childish",
                "immature", "tired", "annoyed", "biased", "misleading", "horrendous", "ridiculous",
                "dreadful", "insulting", "unnecessary", "waste", "ugh", "ruined", "fail", "lies",
            ]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_baseline() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.score(""), 0.7);
    }

    #[test]
    fn test_neutral_text_is_baseline() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.score("the quick brown fox jumps"), 0.7);
    }

    #[test]
    fn test_three_positive_tokens_clamp_to_one() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.score("great amazing helpful"), 1.0);
    }

    #[test]
    fn test_upper_clamp() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.score("great amazing helpful awesome fantastic"), 1.0);
    }

    #[test]
    fn test_lower_clamp() {
        let lexicon = SentimentLexicon::default();
        let text = "bad poor terrible horrible awful hate worst";
        assert_eq!(lexicon.score(text), 0.2);
    }

    #[test]
    fn test_neutral_boundary_is_exact() {
        let lexicon = SentimentLexicon::default();
        // Two negative tokens: 0.7 - 0.2 == 0.5 exactly.
        assert_eq!(lexicon.score("bad poor"), 0.5);
    }

    #[test]
    fn test_case_folded_tokens() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.score("GREAT"), 0.8);
    }

    #[test]
    fn test_exact_match_only() {
        let lexicon = SentimentLexicon::default();
        // "greatest" is not an exact token match for "great".
        assert_eq!(lexicon.score("greatest"), 0.7);
        // Punctuation glued to the token defeats exact matching.
        assert_eq!(lexicon.score("great!"), 0.7);
    }

    #[test]
    fn test_word_in_both_lists_counts_positive() {
        let lexicon =
            SentimentLexicon::new(vec!["mixed".to_string()], vec!["mixed".to_string()]);
        assert_eq!(lexicon.score("mixed"), 0.8);
    }

    #[test]
    fn test_score_always_in_bounds() {
        let lexicon = SentimentLexicon::default();
        for text in ["", "bad", "great", "bad bad bad bad bad bad bad bad", "lorem ipsum"] {
            let score = lexicon.score(text);
            assert!((0.2..=1.0).contains(&score), "score {} out of bounds", score);
        }
    }
}
