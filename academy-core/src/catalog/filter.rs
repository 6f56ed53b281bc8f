//! Filter-bar state: search text, multi-select sets, and sort order

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::item::Difficulty;
use super::status::{ensure_valid_active_status, tabs_for_role, Role, StatusKey};
use crate::error::ParseError;

/// A multi-select set where "nothing selected" means "match everything"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<T: Ord> {
    selected: BTreeSet<T>,
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<T: Ord> Selection<T> {
    /// The "ALL" state
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether this is the "ALL" state
    pub fn is_all(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether a value passes the filter
    pub fn matches(&self, value: &T) -> bool {
        self.is_all() || self.selected.contains(value)
    }

    /// Whether the value's checkbox is shown as checked
    pub fn is_checked(&self, value: &T) -> bool {
        self.selected.contains(value)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.selected.iter()
    }

    /// Back to "ALL"
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Plain add/remove toggle, used where the value universe is open
    pub fn toggle(&mut self, value: T) {
        if !self.selected.remove(&value) {
            self.selected.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl Selection<Difficulty> {
    /// Apply a checkbox change with the normalizing rules of the difficulty menu:
    ///
    /// - from "ALL", checking a value starts a singleton selection and
    ///   unchecking does nothing;
    /// - checking the last missing value collapses back to "ALL";
    /// - unchecking the last selected value is "ALL" as well.
    pub fn set_checked(&mut self, difficulty: Difficulty, checked: bool) {
        if self.is_all() {
            if checked {
                self.selected.insert(difficulty);
            }
            return;
        }

        if checked {
            self.selected.insert(difficulty);
            if self.selected.len() == Difficulty::ALL.len() {
                self.selected.clear();
            }
        } else {
            self.selected.remove(&difficulty);
        }
    }

    /// Flip a difficulty's checkbox
    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        let checked = self.is_checked(&difficulty);
        self.set_checked(difficulty, !checked);
    }

    /// Badge text next to the menu: `all`, a single name, or `N selected`
    pub fn badge_label(&self) -> String {
        match self.selected.len() {
            0 => "all".to_string(),
            1 => self
                .selected
                .iter()
                .next()
                .map(|d| d.as_str().to_lowercase())
                .unwrap_or_default(),
            n => format!("{n} selected"),
        }
    }
}

/// How the visible items are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOption {
    PointsDesc,
    PointsAsc,
    DurationAsc,
    DurationDesc,
    DifficultyAsc,
    DifficultyDesc,
    /// Keep the filtered order
    #[serde(other, rename = "DEFAULT")]
    Unsorted,
}

impl SortOption {
    /// Every option offered by the course and quiz filter bars
    pub const ALL: [SortOption; 6] = [
        SortOption::PointsDesc,
        SortOption::PointsAsc,
        SortOption::DurationAsc,
        SortOption::DurationDesc,
        SortOption::DifficultyAsc,
        SortOption::DifficultyDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::PointsDesc => "POINTS_DESC",
            SortOption::PointsAsc => "POINTS_ASC",
            SortOption::DurationAsc => "DURATION_ASC",
            SortOption::DurationDesc => "DURATION_DESC",
            SortOption::DifficultyAsc => "DIFFICULTY_ASC",
            SortOption::DifficultyDesc => "DIFFICULTY_DESC",
            SortOption::Unsorted => "DEFAULT",
        }
    }

    /// Label shown on the sort button
    pub fn label(self) -> &'static str {
        match self {
            SortOption::PointsDesc => "Points (High to Low)",
            SortOption::PointsAsc => "Points (Low to High)",
            SortOption::DurationAsc => "Duration (Short to Long)",
            SortOption::DurationDesc => "Duration (Long to Short)",
            SortOption::DifficultyAsc => "Difficulty (Easy to Hard)",
            SortOption::DifficultyDesc => "Difficulty (Hard to Easy)",
            SortOption::Unsorted => "Default",
        }
    }

    /// Lenient parse: unrecognized names mean "no reorder"
    pub fn parse_or_unsorted(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(option = name, "Unrecognized sort option, keeping filtered order");
            SortOption::Unsorted
        })
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "POINTS_DESC" => Ok(SortOption::PointsDesc),
            "POINTS_ASC" => Ok(SortOption::PointsAsc),
            "DURATION_ASC" => Ok(SortOption::DurationAsc),
            "DURATION_DESC" => Ok(SortOption::DurationDesc),
            "DIFFICULTY_ASC" => Ok(SortOption::DifficultyAsc),
            "DIFFICULTY_DESC" => Ok(SortOption::DifficultyDesc),
            "DEFAULT" | "NONE" => Ok(SortOption::Unsorted),
            _ => Err(ParseError::UnknownSortOption(s.to_string())),
        }
    }
}

/// Transient filter state for one catalog view
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<S: StatusKey> {
    /// Free text matched against name and description
    pub search_text: String,

    /// Difficulty multi-select (empty = all)
    pub selected_difficulties: Selection<Difficulty>,

    /// Category multi-select (empty = all)
    pub selected_categories: Selection<String>,

    /// Sort order
    pub sort_option: SortOption,

    /// Bucket being viewed
    pub active_status: S,
}

impl<S: StatusKey> FilterState<S> {
    /// Fresh state on the role's first tab
    pub fn for_role(role: Role, sort_option: SortOption) -> Self {
        let tabs = tabs_for_role::<S>(role);
        Self {
            search_text: String::new(),
            selected_difficulties: Selection::all(),
            selected_categories: Selection::all(),
            sort_option,
            active_status: tabs[0],
        }
    }

    /// Re-derive the active tab after the role (and so the tab set) changed
    pub fn on_role_change(&mut self, role: Role) {
        self.active_status = ensure_valid_active_status(self.active_status, tabs_for_role(role));
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.selected_difficulties = difficulties.into_iter().collect();
        self
    }

    pub fn with_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.selected_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort_option: SortOption) -> Self {
        self.sort_option = sort_option;
        self
    }

    pub fn with_status(mut self, status: S) -> Self {
        self.active_status = status;
        self
    }
}
