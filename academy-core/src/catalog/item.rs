//! Catalog items (courses, quizzes, quests)
//!
//! All three kinds are structurally identical as far as the engine is
//! concerned, so a single record type covers them. It deserializes from both
//! the backend shape (`name`, `reward_points`, `estimated_duration`) and the
//! mock-data shape (`title`, `points`, `duration`).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Identifier of an item, unique within its collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Int(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// Difficulty of an item.
///
/// Declaration order is the comparison order used by every difficulty sort:
/// `Beginner < Intermediate < Advanced < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[serde(alias = "Beginner", alias = "Easy", alias = "beginner", alias = "easy")]
    Beginner,
    #[serde(
        alias = "Intermediate",
        alias = "Medium",
        alias = "intermediate",
        alias = "medium"
    )]
    Intermediate,
    #[serde(alias = "Advanced", alias = "Hard", alias = "advanced", alias = "hard")]
    Advanced,
    #[serde(alias = "Expert", alias = "expert")]
    Expert,
}

impl Difficulty {
    /// Every difficulty, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Canonical upper-case name (`BEGINNER`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
            Difficulty::Expert => "EXPERT",
        }
    }

    /// Title-case label for display
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A course, quiz, or quest as consumed by the catalog engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier
    pub id: ItemId,

    /// Display name, used for search and slugs
    #[serde(alias = "title")]
    pub name: String,

    /// Optional description, also searched
    #[serde(default)]
    pub description: Option<String>,

    /// Difficulty level
    pub difficulty: Difficulty,

    /// Free-form category label
    #[serde(default)]
    pub category: Option<String>,

    /// Reward points
    #[serde(default, alias = "reward_points")]
    pub points: i64,

    /// Time estimate; string values keep only their leading number
    #[serde(
        default,
        alias = "estimated_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub duration: f64,

    /// Raw status key as supplied by the data source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CatalogItem {
    /// Minimal item used by tests and fixtures
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            difficulty,
            category: None,
            points: 0,
            duration: 0.0,
            status: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Case-insensitive substring match against name and description.
    ///
    /// `query_lower` must already be lower-cased.
    pub(crate) fn matches_text(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(query_lower))
    }
}

/// Parse the leading numeric portion of a duration string.
///
/// `"65"` gives 65, `"12 hours"` gives 12, `"1.5h"` gives 1.5. Anything without
/// a leading number is treated as zero.
pub fn parse_leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '-' | '+' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }

    text[..end].parse::<f64>().unwrap_or(0.0)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDuration {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawDuration>::deserialize(deserializer)? {
        Some(RawDuration::Number(n)) => n,
        Some(RawDuration::Text(s)) => parse_leading_number(&s),
        None => 0.0,
    })
}
