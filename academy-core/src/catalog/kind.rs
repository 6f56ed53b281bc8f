//! Catalog kinds and their per-kind presentation details

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::filter::SortOption;
use super::item::ItemId;
use crate::error::ParseError;
use crate::slug::create_slug_with_id;

/// Which catalog a view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Course,
    Quiz,
    Quest,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [CatalogKind::Course, CatalogKind::Quiz, CatalogKind::Quest];

    pub fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Course => "course",
            CatalogKind::Quiz => "quiz",
            CatalogKind::Quest => "quest",
        }
    }

    /// Singular display name (`Course`, `Quiz`, `Quest`)
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Course => "Course",
            CatalogKind::Quiz => "Quiz",
            CatalogKind::Quest => "Quest",
        }
    }

    /// Route segment of the catalog page
    pub fn route(self) -> &'static str {
        match self {
            CatalogKind::Course => "course-catalog",
            CatalogKind::Quiz => "quiz-catalog",
            CatalogKind::Quest => "quest-catalog",
        }
    }

    /// Plural noun used in headings and captions
    pub fn plural(self) -> &'static str {
        match self {
            CatalogKind::Course => "courses",
            CatalogKind::Quiz => "quizzes",
            CatalogKind::Quest => "quests",
        }
    }

    /// Sort options offered by this kind's filter bar.
    ///
    /// The quest bar only offers points and duration.
    pub fn sort_options(self) -> &'static [SortOption] {
        match self {
            CatalogKind::Course | CatalogKind::Quiz => &SortOption::ALL,
            CatalogKind::Quest => &[
                SortOption::PointsDesc,
                SortOption::PointsAsc,
                SortOption::DurationDesc,
                SortOption::DurationAsc,
            ],
        }
    }

    /// Whether this kind's filter bar has a category menu
    pub fn has_category_filter(self) -> bool {
        matches!(self, CatalogKind::Quiz)
    }

    /// `"1 course found"`, `"2 quizzes found"`, ...
    pub fn results_caption(self, count: usize) -> String {
        let noun = if count == 1 { self.as_str() } else { self.plural() };
        format!("{count} {noun} found")
    }

    /// Detail link for an item of this kind
    pub fn detail_href(self, name: &str, id: &ItemId) -> String {
        format!("/{}/{}", self.route(), create_slug_with_id(name, id))
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "course" | "courses" => Ok(CatalogKind::Course),
            "quiz" | "quizzes" => Ok(CatalogKind::Quiz),
            "quest" | "quests" => Ok(CatalogKind::Quest),
            _ => Err(ParseError::UnknownKind(s.to_string())),
        }
    }
}
