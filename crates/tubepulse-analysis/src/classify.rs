//! Rule-based content categorization.

use tubepulse_models::Category;

/// Keyword table driving categorization.
///
/// Categories are scanned in [`Category::CLASSIFIED`] order; ties break
/// toward the earlier category. The default table is the production one;
/// tests may build smaller tables with [`KeywordTable::new`].
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl KeywordTable {
    /// Build a table from explicit entries. Order defines tie-breaking.
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Classify text by counting, per category, how many distinct keywords
    /// occur as case-insensitive substrings. Highest count wins; all-zero
    /// yields [`Category::General`].
    pub fn classify(&self, text: &str) -> Category {
        let text = text.to_lowercase();

        let mut best = Category::General;
        let mut best_score = 0usize;

        for (category, keywords) in &self.entries {
            let score = keywords
                .iter()
                .filter(|keyword| text.contains(&keyword.to_lowercase()))
                .count();
            if score > best_score {
                best_score = score;
                best = *category;
            }
        }

        best
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(vec![
            (
                Category::Educational,
                keywords(&[
                    "learn", "explain", "tutorial", "guide", "how to", "lesson",
                    "educational", "tips", "tricks", "walkthrough", "strategy",
                    "hack", "instructional", "knowledge", "overview", "step-by-step",
                    "beginner", "advanced", "breakdown", "teaching", "skill",
                    "demonstration", "DIY", "example", "practice", "training",
                ]),
            ),
            (
                Category::Entertainment,
                keywords(&[
                    "fun", "game", "play", "laugh", "amusing", "exciting",
                    "reaction", "funny", "hilarious", "joke", "challenge",
                    "meme", "prank", "roast", "parody", "stream",
                    "let's play", "entertaining", "skit", "comedy", "laughing",
                    "epic", "awesome", "movie", "series", "show", "cinematic",
                    "clips", "viral", "highlight", "storytime", "cartoon",
                ]),
            ),
            (
                Category::News,
                keywords(&[
                    "news", "update", "current", "report", "breaking", "analysis",
                    "headline", "coverage", "story", "recent", "press", "announcement",
                    "live", "today", "world", "investigation", "trending",
                    "fact", "journalism", "interview", "commentary", "politics",
                    "economy", "debate", "event", "exclusive",
                ]),
            ),
            (
                Category::Lifestyle,
                keywords(&[
                    "lifestyle", "daily", "routine", "life", "vlog", "personal",
                    "fitness", "self-care", "travel", "home", "family", "relax",
                    "style", "fashion", "beauty", "morning", "night", "experience",
                    "story", "wellness", "health", "food", "day in the life",
                    "minimalism", "decor", "week", "adventure", "memories",
                    "hobby", "balance", "diary", "journey", "cooking", "pets",
                ]),
            ),
            (
                Category::Tech,
                keywords(&[
                    "technology", "software", "hardware", "coding", "programming", "digital",
                    "python", "aws", "cloud", "gadget", "device", "setup",
                    "review", "tutorial", "explanation", "features", "specs",
                    "comparison", "update", "script", "automation",
                    "system", "framework", "setup guide", "debug", "ML", "AI",
                    "machine learning", "deep learning", "data", "workflow", "neural network",
                    "robotics", "test", "configuration", "benchmark", "video",
                    "Marques", "unboxing", "performance", "teardown", "engineering",
                    "functionality", "optimization", "API", "SDK", "tools",
                    "cybersecurity", "apps", "developer", "project",
                ]),
            ),
            (
                Category::Business,
                keywords(&[
                    "business", "finance", "money", "entrepreneur", "startup", "market",
                    "economy", "growth", "strategy", "investing", "stock", "shares",
                    "revenue", "profit", "marketing", "sales", "trade", "analysis",
                    "branding", "consulting", "debt", "valuation", "cash flow",
                    "plan", "capital", "fund", "budget", "venture", "taxes",
                    "accounting", "expense", "earnings", "wealth", "success",
                    "corporate", "industry", "trend", "pitch", "productivity",
                    "organization", "team", "CEO", "founder", "leader", "management",
                ]),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_yields_general() {
        let table = KeywordTable::default();
        assert_eq!(table.classify("xyzzy qwerty"), Category::General);
        assert_eq!(table.classify(""), Category::General);
    }

    #[test]
    fn test_substring_matching() {
        let table = KeywordTable::default();
        // "explanation" contains "explain" as a substring.
        assert_eq!(
            table.classify("a detailed explanation and a tutorial lesson"),
            Category::Educational
        );
    }

    #[test]
    fn test_case_insensitive() {
        let table = KeywordTable::default();
        assert_eq!(
            table.classify("BREAKING NEWS headline coverage today"),
            Category::News
        );
    }

    #[test]
    fn test_uppercase_table_entries_match() {
        let table = KeywordTable::default();
        // Entries stored capitalized in the table still match lowercased
        // text, since both sides are folded.
        assert_eq!(table.classify("marques"), Category::Tech);
        assert_eq!(table.classify("a diy walkthrough lesson"), Category::Educational);
        assert_eq!(table.classify("ceo pitch for venture capital"), Category::Business);
    }

    #[test]
    fn test_deterministic() {
        let table = KeywordTable::default();
        let text = "startup revenue growth and profit margins";
        assert_eq!(table.classify(text), table.classify(text));
    }

    #[test]
    fn test_tie_breaks_toward_earlier_category() {
        let table = KeywordTable::new(vec![
            (Category::Educational, vec!["alpha".to_string()]),
            (Category::Tech, vec!["alpha".to_string()]),
        ]);
        assert_eq!(table.classify("alpha"), Category::Educational);
    }

    #[test]
    fn test_highest_score_wins() {
        let table = KeywordTable::new(vec![
            (Category::Educational, vec!["alpha".to_string()]),
            (
                Category::Business,
                vec!["alpha".to_string(), "beta".to_string()],
            ),
        ]);
        assert_eq!(table.classify("alpha beta"), Category::Business);
    }

    #[test]
    fn test_distinct_keywords_counted_once() {
        let table = KeywordTable::new(vec![
            (Category::Educational, vec!["alpha".to_string(), "beta".to_string()]),
            (Category::Tech, vec!["gamma".to_string()]),
        ]);
        // "alpha" appearing twice still counts as one keyword; gamma's
        // single distinct match cannot outrank two distinct matches.
        assert_eq!(table.classify("alpha alpha beta gamma"), Category::Educational);
    }
}
