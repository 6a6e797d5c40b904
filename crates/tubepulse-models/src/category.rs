//! Content category labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topic category assigned to an analyzed video.
///
/// The first six variants form the closed classification set; `General` is
/// the fallback when no keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Educational,
    Entertainment,
    News,
    Lifestyle,
    Tech,
    Business,
    General,
}

impl Category {
    /// The closed classification set, in tie-breaking order.
    pub const CLASSIFIED: [Category; 6] = [
        Category::Educational,
        Category::Entertainment,
        Category::News,
        Category::Lifestyle,
        Category::Tech,
        Category::Business,
    ];

    /// Lowercase label as stored and rendered.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Educational => "educational",
            Category::Entertainment => "entertainment",
            Category::News => "news",
            Category::Lifestyle => "lifestyle",
            Category::Tech => "tech",
            Category::Business => "business",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "educational" => Ok(Category::Educational),
            "entertainment" => Ok(Category::Entertainment),
            "news" => Ok(Category::News),
            "lifestyle" => Ok(Category::Lifestyle),
            "tech" => Ok(Category::Tech),
            "business" => Ok(Category::Business),
            "general" => Ok(Category::General),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}
