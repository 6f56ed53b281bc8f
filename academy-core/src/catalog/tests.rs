//! Cross-module tests for the catalog

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{
        tab_descriptors, tabs_for_role, visible_items, CatalogItem, CatalogKind, Difficulty,
        FilterState, QuizStatus, Role, SortOption, StatusBucketMap, StatusKey, TrackStatus,
    };
    use crate::slug::extract_id_from_slug;

    fn mixed_bucket() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(1u64, "HTML & CSS Fundamentals Quiz", Difficulty::Beginner)
                .with_description("Tags, selectors and basic styling")
                .with_category("Web Development")
                .with_points(100)
                .with_duration(15.0),
            CatalogItem::new(2u64, "Python Data Types", Difficulty::Intermediate)
                .with_category("Programming")
                .with_points(250)
                .with_duration(30.0),
            CatalogItem::new(3u64, "System Design Interview", Difficulty::Expert)
                .with_description("Scalability and architecture")
                .with_category("System Design")
                .with_points(500)
                .with_duration(60.0),
            CatalogItem::new(4u64, "Docker Essentials", Difficulty::Advanced)
                .with_category("DevOps")
                .with_points(250)
                .with_duration(45.0),
            CatalogItem::new(5u64, "CSS Grid Deep Dive", Difficulty::Intermediate)
                .with_category("Frontend")
                .with_points(180)
                .with_duration(25.0),
        ]
    }

    fn quiz_map() -> StatusBucketMap<QuizStatus> {
        StatusBucketMap::new()
            .with_bucket(QuizStatus::Available, mixed_bucket())
            .with_bucket(
                QuizStatus::Locked,
                vec![CatalogItem::new(9u64, "Cloud Patterns", Difficulty::Expert)],
            )
    }

    #[test]
    fn test_tabs_are_deterministic_and_non_empty() {
        for role in [Role::Learner, Role::Admin] {
            assert!(!tabs_for_role::<TrackStatus>(role).is_empty());
            assert!(!tabs_for_role::<QuizStatus>(role).is_empty());
            assert_eq!(
                tab_descriptors::<TrackStatus>(role),
                tab_descriptors::<TrackStatus>(role)
            );
        }
    }

    #[test]
    fn test_filtering_never_invents_items() {
        let map = quiz_map();
        let filter_sets = vec![
            FilterState::for_role(Role::Learner, SortOption::PointsDesc),
            FilterState::for_role(Role::Learner, SortOption::DurationAsc).with_search("css"),
            FilterState::for_role(Role::Learner, SortOption::DifficultyDesc)
                .with_difficulties([Difficulty::Intermediate, Difficulty::Expert]),
            FilterState::for_role(Role::Learner, SortOption::Unsorted)
                .with_categories(["Frontend", "DevOps"]),
            FilterState::for_role(Role::Admin, SortOption::PointsAsc)
                .with_status(QuizStatus::Locked),
        ];

        for filters in filter_sets {
            let bucket = map.bucket(filters.active_status);
            for item in visible_items(&map, &filters) {
                assert!(bucket.contains(item), "{:?} not in bucket", item.id);
            }
        }
    }

    #[test]
    fn test_empty_difficulty_selection_keeps_every_difficulty() {
        let map = quiz_map();
        let filters = FilterState::for_role(Role::Learner, SortOption::Unsorted);
        let visible = visible_items(&map, &filters);

        for d in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Expert,
        ] {
            assert!(visible.iter().any(|i| i.difficulty == d), "missing {d}");
        }
    }

    #[test]
    fn test_unsorted_preserves_bucket_order() {
        let map = quiz_map();
        let filters = FilterState::for_role(Role::Learner, SortOption::Unsorted)
            .with_difficulties([Difficulty::Intermediate, Difficulty::Advanced]);
        let ids: Vec<String> = visible_items(&map, &filters)
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        assert_eq!(ids, vec!["2", "4", "5"]);
    }

    #[test]
    fn test_repeated_calls_do_not_disturb_bucket() {
        let map = quiz_map();
        let before = map.clone();

        let desc = FilterState::for_role(Role::Learner, SortOption::PointsDesc);
        let asc = desc.clone().with_sort(SortOption::PointsAsc);
        let _ = visible_items(&map, &desc);
        let _ = visible_items(&map, &asc);

        assert_eq!(map, before);
    }

    #[test]
    fn test_stages_combine() {
        let map = quiz_map();
        let filters = FilterState::for_role(Role::Learner, SortOption::DurationDesc)
            .with_search("css")
            .with_difficulties([Difficulty::Beginner, Difficulty::Intermediate])
            .with_categories(["Frontend", "Web Development"]);

        let ids: Vec<String> = visible_items(&map, &filters)
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        assert_eq!(ids, vec!["5", "1"]);
    }

    #[test]
    fn test_detail_links_round_trip_ids() {
        let map = quiz_map();
        let filters = FilterState::for_role(Role::Learner, SortOption::PointsDesc);

        for item in visible_items(&map, &filters) {
            let href = CatalogKind::Quiz.detail_href(&item.name, &item.id);
            let segment = href.rsplit('/').next().unwrap();
            assert_eq!(extract_id_from_slug(segment), item.id.to_string());
        }
    }

    #[test]
    fn test_switching_role_keeps_valid_tab() {
        let mut filters = FilterState::<QuizStatus>::for_role(Role::Learner, SortOption::PointsDesc)
            .with_status(QuizStatus::Completed);

        filters.on_role_change(Role::Admin);
        assert_eq!(filters.active_status, QuizStatus::Available);
        assert!(QuizStatus::ADMIN_TABS.contains(&filters.active_status));

        filters.active_status = QuizStatus::Locked;
        filters.on_role_change(Role::Learner);
        assert_eq!(filters.active_status, QuizStatus::Locked);
    }
}
