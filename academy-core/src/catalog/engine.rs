//! Bucket maps and the filter/sort pipeline
//!
//! `visible_items` never mutates the bucket it reads from: each stage builds a
//! new vector of references, so repeated calls with different filters always
//! start from the same source order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

use super::filter::{FilterState, SortOption};
use super::item::CatalogItem;
use super::status::StatusKey;

/// Items partitioned by status key
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBucketMap<S: StatusKey> {
    buckets: BTreeMap<S, Vec<CatalogItem>>,
}

impl<S: StatusKey> Default for StatusBucketMap<S> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<S: StatusKey> StatusBucketMap<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of one bucket
    pub fn insert(&mut self, status: S, items: Vec<CatalogItem>) {
        self.buckets.insert(status, items);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_bucket(mut self, status: S, items: Vec<CatalogItem>) -> Self {
        self.insert(status, items);
        self
    }

    /// Items in a bucket; a missing bucket is empty
    pub fn bucket(&self, status: S) -> &[CatalogItem] {
        self.buckets.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of items in a bucket
    pub fn count(&self, status: S) -> usize {
        self.bucket(status).len()
    }

    /// Total number of items across all buckets
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn statuses(&self) -> impl Iterator<Item = S> + '_ {
        self.buckets.keys().copied()
    }

    /// Partition a flat item list by each item's `status` field.
    ///
    /// Items without a status, or with a status this kind does not know, are
    /// skipped. Relative order within each bucket follows the input.
    pub fn group_by_status(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut map = Self::new();

        for item in items {
            let Some(raw) = item.status.as_deref() else {
                warn!(id = %item.id, "Skipping item without a status");
                continue;
            };

            match S::from_key(raw) {
                Some(status) => map.buckets.entry(status).or_default().push(item),
                None => warn!(id = %item.id, status = raw, kind = S::KIND, "Skipping item with unknown status"),
            }
        }

        map
    }
}

/// Filter and sort the active bucket.
///
/// Stages, in order: text search on name/description, difficulty filter,
/// category filter, then the selected sort. Empty selections match everything.
pub fn visible_items<'a, S: StatusKey>(
    map: &'a StatusBucketMap<S>,
    filters: &FilterState<S>,
) -> Vec<&'a CatalogItem> {
    let base = map.bucket(filters.active_status);

    let query = filters.search_text.to_lowercase();
    let by_text: Vec<&CatalogItem> = if filters.search_text.trim().is_empty() {
        base.iter().collect()
    } else {
        base.iter().filter(|item| item.matches_text(&query)).collect()
    };
    trace!(stage = "text", remaining = by_text.len());

    let by_difficulty: Vec<&CatalogItem> = by_text
        .into_iter()
        .filter(|item| filters.selected_difficulties.matches(&item.difficulty))
        .collect();
    trace!(stage = "difficulty", remaining = by_difficulty.len());

    let by_category: Vec<&CatalogItem> = if filters.selected_categories.is_all() {
        by_difficulty
    } else {
        by_difficulty
            .into_iter()
            .filter(|item| {
                item.category
                    .as_ref()
                    .is_some_and(|c| filters.selected_categories.matches(c))
            })
            .collect()
    };
    trace!(stage = "category", remaining = by_category.len());

    let sorted = sort_items(by_category, filters.sort_option);

    debug!(
        status = filters.active_status.key(),
        bucket = base.len(),
        visible = sorted.len(),
        sort = %filters.sort_option,
        "Computed visible items"
    );

    sorted
}

/// Stable sort by the given option; `Unsorted` keeps the input order
pub fn sort_items(mut items: Vec<&CatalogItem>, option: SortOption) -> Vec<&CatalogItem> {
    let compare: fn(&CatalogItem, &CatalogItem) -> Ordering = match option {
        SortOption::PointsAsc => |a, b| a.points.cmp(&b.points),
        SortOption::PointsDesc => |a, b| b.points.cmp(&a.points),
        SortOption::DurationAsc => |a, b| a.duration.total_cmp(&b.duration),
        SortOption::DurationDesc => |a, b| b.duration.total_cmp(&a.duration),
        SortOption::DifficultyAsc => |a, b| a.difficulty.cmp(&b.difficulty),
        SortOption::DifficultyDesc => |a, b| b.difficulty.cmp(&a.difficulty),
        SortOption::Unsorted => return items,
    };

    items.sort_by(|a, b| compare(a, b));
    items
}

#[cfg(test)]
mod engine_tests {
    use super::*;
    use crate::catalog::filter::FilterState;
    use crate::catalog::item::Difficulty;
    use crate::catalog::status::{QuizStatus, Role, TrackStatus};
    use pretty_assertions::assert_eq;

    fn ids(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    fn sample_map() -> StatusBucketMap<TrackStatus> {
        StatusBucketMap::new().with_bucket(
            TrackStatus::Available,
            vec![
                CatalogItem::new(1u64, "Intro to X", Difficulty::Beginner)
                    .with_points(100)
                    .with_duration(10.0),
                CatalogItem::new(2u64, "Adv Y", Difficulty::Advanced)
                    .with_points(50)
                    .with_duration(40.0),
            ],
        )
    }

    fn learner_filters() -> FilterState<TrackStatus> {
        FilterState::for_role(Role::Learner, SortOption::PointsDesc)
    }

    #[test]
    fn test_points_desc_example() {
        let map = sample_map();
        let visible = visible_items(&map, &learner_filters());
        assert_eq!(ids(&visible), vec!["1", "2"]);
    }

    #[test]
    fn test_single_difficulty_example() {
        let map = sample_map();
        let filters = learner_filters().with_difficulties([Difficulty::Advanced]);
        let visible = visible_items(&map, &filters);
        assert_eq!(ids(&visible), vec!["2"]);
    }

    #[test]
    fn test_missing_bucket_is_empty() {
        let map = sample_map();
        let filters = learner_filters().with_status(TrackStatus::Completed);
        assert!(visible_items(&map, &filters).is_empty());
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let map = StatusBucketMap::new().with_bucket(
            TrackStatus::Available,
            vec![
                CatalogItem::new(1u64, "Ownership", Difficulty::Beginner)
                    .with_description("Borrow checker basics"),
                CatalogItem::new(2u64, "Traits", Difficulty::Beginner),
            ],
        );
        let filters = learner_filters().with_search("BORROW");
        assert_eq!(ids(&visible_items(&map, &filters)), vec!["1"]);
    }

    #[test]
    fn test_whitespace_search_removes_nothing() {
        let map = sample_map();
        let filters = learner_filters().with_search("   ");
        assert_eq!(visible_items(&map, &filters).len(), 2);
    }

    #[test]
    fn test_category_filter_excludes_uncategorized() {
        let map = StatusBucketMap::new().with_bucket(
            QuizStatus::Available,
            vec![
                CatalogItem::new(1u64, "HTML Quiz", Difficulty::Beginner).with_category("Frontend"),
                CatalogItem::new(2u64, "SQL Quiz", Difficulty::Beginner).with_category("Database"),
                CatalogItem::new(3u64, "Mystery Quiz", Difficulty::Beginner),
            ],
        );
        let filters = FilterState::for_role(Role::Learner, SortOption::Unsorted)
            .with_categories(["Database", "Frontend"]);
        assert_eq!(ids(&visible_items(&map, &filters)), vec!["1", "2"]);
    }

    #[test]
    fn test_difficulty_sort_uses_enum_order() {
        let map = StatusBucketMap::new().with_bucket(
            TrackStatus::Available,
            vec![
                CatalogItem::new(1u64, "E", Difficulty::Expert),
                CatalogItem::new(2u64, "B", Difficulty::Beginner),
                CatalogItem::new(3u64, "A", Difficulty::Advanced),
                CatalogItem::new(4u64, "I", Difficulty::Intermediate),
            ],
        );

        let asc = learner_filters().with_sort(SortOption::DifficultyAsc);
        assert_eq!(ids(&visible_items(&map, &asc)), vec!["2", "4", "3", "1"]);

        let desc = learner_filters().with_sort(SortOption::DifficultyDesc);
        assert_eq!(ids(&visible_items(&map, &desc)), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn test_ties_keep_filter_order() {
        let map = StatusBucketMap::new().with_bucket(
            TrackStatus::Available,
            vec![
                CatalogItem::new(1u64, "a", Difficulty::Beginner).with_points(10),
                CatalogItem::new(2u64, "b", Difficulty::Beginner).with_points(20),
                CatalogItem::new(3u64, "c", Difficulty::Beginner).with_points(10),
            ],
        );
        let filters = learner_filters().with_sort(SortOption::PointsAsc);
        assert_eq!(ids(&visible_items(&map, &filters)), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_group_by_status_skips_unknown() {
        let items = vec![
            CatalogItem::new(1u64, "a", Difficulty::Beginner).with_status("locked"),
            CatalogItem::new(2u64, "b", Difficulty::Beginner).with_status("in-progress"),
            CatalogItem::new(3u64, "c", Difficulty::Beginner).with_status("retired"),
            CatalogItem::new(4u64, "d", Difficulty::Beginner),
            CatalogItem::new(5u64, "e", Difficulty::Beginner).with_status("locked"),
        ];

        let map = StatusBucketMap::<QuizStatus>::group_by_status(items);
        assert_eq!(map.total(), 3);
        assert_eq!(map.count(QuizStatus::Locked), 2);
        assert_eq!(map.bucket(QuizStatus::Locked)[1].id.to_string(), "5");
        assert_eq!(map.count(QuizStatus::Available), 0);
    }
}
