//! Status buckets, roles, and tab orders
//!
//! Every catalog kind has a closed set of status keys. A role sees a fixed,
//! ordered subset of them as tabs: the learner role sees progress states,
//! every other role sees the review workflow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::ParseError;

/// Default name of the privileged learner role
pub const DEFAULT_STUDENT_ROLE: &str = "Student";

/// View mode selected by the signed-in user's role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Learner,
    Admin,
}

impl Role {
    /// Resolve a raw role name.
    ///
    /// Only an exact match on `student_role` selects the learner view; any other
    /// value, including no role at all, falls back to the administrative view.
    pub fn from_name(role: Option<&str>, student_role: &str) -> Self {
        match role {
            Some(name) if name == student_role => Role::Learner,
            _ => Role::Admin,
        }
    }
}

/// A closed enumeration of status keys for one catalog kind
pub trait StatusKey: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Kind name used in error messages
    const KIND: &'static str;

    /// Tab order for the learner role
    const LEARNER_TABS: &'static [Self];

    /// Tab order for every other role
    const ADMIN_TABS: &'static [Self];

    /// The key as it appears in bucket maps (`inProgress`, `in-progress`, ...)
    fn key(self) -> &'static str;

    /// Display label for the tab
    fn label(self) -> &'static str;

    /// Parse a key, accepting backend aliases
    fn from_key(key: &str) -> Option<Self>;
}

/// Ordered tab set for a role
pub fn tabs_for_role<S: StatusKey>(role: Role) -> &'static [S] {
    match role {
        Role::Learner => S::LEARNER_TABS,
        Role::Admin => S::ADMIN_TABS,
    }
}

/// Keep `current` if it is one of `tabs`, otherwise fall back to the first tab
pub fn ensure_valid_active_status<S: StatusKey>(current: S, tabs: &[S]) -> S {
    if tabs.contains(&current) {
        return current;
    }

    match tabs.first() {
        Some(&first) => {
            tracing::debug!(
                from = current.key(),
                to = first.key(),
                "Active status not in tab set, resetting"
            );
            first
        }
        None => current,
    }
}

/// A tab as rendered by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabDescriptor {
    pub key: &'static str,
    pub label: &'static str,
}

/// `(key, label)` descriptors for every tab the role can see, in order
pub fn tab_descriptors<S: StatusKey>(role: Role) -> Vec<TabDescriptor> {
    tabs_for_role::<S>(role)
        .iter()
        .map(|s| TabDescriptor {
            key: s.key(),
            label: s.label(),
        })
        .collect()
}

/// Statuses shared by courses and quests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackStatus {
    #[serde(alias = "AVAILABLE")]
    Available,
    #[serde(alias = "IN_PROGRESS")]
    InProgress,
    #[serde(alias = "NOT_STARTED")]
    NotStarted,
    #[serde(alias = "PAUSED")]
    Paused,
    #[serde(alias = "ABANDONED")]
    Abandoned,
    #[serde(alias = "COMPLETED")]
    Completed,
    #[serde(alias = "PUBLISHED")]
    Published,
    #[serde(alias = "DRAFT")]
    Draft,
    #[serde(alias = "UNDER_REVIEW")]
    UnderReview,
    #[serde(alias = "REJECTED")]
    Rejected,
    #[serde(alias = "ARCHIVED")]
    Archived,
}

impl StatusKey for TrackStatus {
    const KIND: &'static str = "course/quest";

    const LEARNER_TABS: &'static [Self] = &[
        TrackStatus::Available,
        TrackStatus::InProgress,
        TrackStatus::NotStarted,
        TrackStatus::Paused,
        TrackStatus::Abandoned,
        TrackStatus::Completed,
    ];

    const ADMIN_TABS: &'static [Self] = &[
        TrackStatus::Published,
        TrackStatus::Draft,
        TrackStatus::UnderReview,
        TrackStatus::Rejected,
        TrackStatus::Archived,
    ];

    fn key(self) -> &'static str {
        match self {
            TrackStatus::Available => "available",
            TrackStatus::InProgress => "inProgress",
            TrackStatus::NotStarted => "notStarted",
            TrackStatus::Paused => "paused",
            TrackStatus::Abandoned => "abandoned",
            TrackStatus::Completed => "completed",
            TrackStatus::Published => "published",
            TrackStatus::Draft => "draft",
            TrackStatus::UnderReview => "underReview",
            TrackStatus::Rejected => "rejected",
            TrackStatus::Archived => "archived",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TrackStatus::Available => "Available",
            TrackStatus::InProgress => "In Progress",
            TrackStatus::NotStarted => "Not Started",
            TrackStatus::Paused => "Paused",
            TrackStatus::Abandoned => "Abandoned",
            TrackStatus::Completed => "Completed",
            TrackStatus::Published => "Published",
            TrackStatus::Draft => "Draft",
            TrackStatus::UnderReview => "Under Review",
            TrackStatus::Rejected => "Rejected",
            TrackStatus::Archived => "Archived",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        let status = match key {
            "available" | "AVAILABLE" => TrackStatus::Available,
            "inProgress" | "IN_PROGRESS" => TrackStatus::InProgress,
            "notStarted" | "NOT_STARTED" => TrackStatus::NotStarted,
            "paused" | "PAUSED" => TrackStatus::Paused,
            "abandoned" | "ABANDONED" => TrackStatus::Abandoned,
            "completed" | "COMPLETED" => TrackStatus::Completed,
            "published" | "PUBLISHED" => TrackStatus::Published,
            "draft" | "DRAFT" => TrackStatus::Draft,
            "underReview" | "UNDER_REVIEW" => TrackStatus::UnderReview,
            "rejected" | "REJECTED" => TrackStatus::Rejected,
            "archived" | "ARCHIVED" => TrackStatus::Archived,
            _ => return None,
        };
        Some(status)
    }
}

/// Statuses for quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizStatus {
    Available,
    InProgress,
    Completed,
    Locked,
}

impl StatusKey for QuizStatus {
    const KIND: &'static str = "quiz";

    const LEARNER_TABS: &'static [Self] = &[
        QuizStatus::Available,
        QuizStatus::InProgress,
        QuizStatus::Completed,
        QuizStatus::Locked,
    ];

    const ADMIN_TABS: &'static [Self] = &[QuizStatus::Available, QuizStatus::Locked];

    fn key(self) -> &'static str {
        match self {
            QuizStatus::Available => "available",
            QuizStatus::InProgress => "in-progress",
            QuizStatus::Completed => "completed",
            QuizStatus::Locked => "locked",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QuizStatus::Available => "Available",
            QuizStatus::InProgress => "In Progress",
            QuizStatus::Completed => "Completed",
            QuizStatus::Locked => "Locked",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        let status = match key {
            "available" => QuizStatus::Available,
            "in-progress" => QuizStatus::InProgress,
            "completed" => QuizStatus::Completed,
            "locked" => QuizStatus::Locked,
            _ => return None,
        };
        Some(status)
    }
}

impl FromStr for TrackStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ParseError::UnknownStatus {
            kind: Self::KIND,
            key: s.to_string(),
        })
    }
}

impl FromStr for QuizStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ParseError::UnknownStatus {
            kind: Self::KIND,
            key: s.to_string(),
        })
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn test_role_only_exact_student_is_learner() {
        assert_eq!(Role::from_name(Some("Student"), "Student"), Role::Learner);
        assert_eq!(Role::from_name(Some("student"), "Student"), Role::Admin);
        assert_eq!(Role::from_name(Some("Instructor"), "Student"), Role::Admin);
        assert_eq!(Role::from_name(None, "Student"), Role::Admin);
    }

    #[test]
    fn test_tabs_for_role_orders() {
        let learner: Vec<_> = tabs_for_role::<TrackStatus>(Role::Learner)
            .iter()
            .map(|s| s.key())
            .collect();
        assert_eq!(
            learner,
            vec!["available", "inProgress", "notStarted", "paused", "abandoned", "completed"]
        );

        let admin: Vec<_> = tabs_for_role::<TrackStatus>(Role::Admin)
            .iter()
            .map(|s| s.key())
            .collect();
        assert_eq!(admin, vec!["published", "draft", "underReview", "rejected", "archived"]);

        assert_eq!(
            tabs_for_role::<QuizStatus>(Role::Admin),
            &[QuizStatus::Available, QuizStatus::Locked]
        );
    }

    #[test]
    fn test_every_tab_has_label_and_round_trips_key() {
        for role in [Role::Learner, Role::Admin] {
            for s in tabs_for_role::<TrackStatus>(role) {
                assert!(!s.label().is_empty());
                assert_eq!(TrackStatus::from_key(s.key()), Some(*s));
            }
            for s in tabs_for_role::<QuizStatus>(role) {
                assert!(!s.label().is_empty());
                assert_eq!(QuizStatus::from_key(s.key()), Some(*s));
            }
        }
    }

    #[test]
    fn test_ensure_valid_active_status() {
        let learner = tabs_for_role::<TrackStatus>(Role::Learner);
        let admin = tabs_for_role::<TrackStatus>(Role::Admin);

        assert_eq!(
            ensure_valid_active_status(TrackStatus::Paused, learner),
            TrackStatus::Paused
        );
        assert_eq!(
            ensure_valid_active_status(TrackStatus::Paused, admin),
            TrackStatus::Published
        );
        assert_eq!(
            ensure_valid_active_status(TrackStatus::Draft, learner),
            TrackStatus::Available
        );
    }

    #[test]
    fn test_backend_aliases() {
        assert_eq!("UNDER_REVIEW".parse::<TrackStatus>().unwrap(), TrackStatus::UnderReview);
        let status: TrackStatus = serde_json::from_str("\"NOT_STARTED\"").unwrap();
        assert_eq!(status, TrackStatus::NotStarted);
        assert!("in_progress".parse::<QuizStatus>().is_err());
    }

    #[test]
    fn test_tab_descriptors() {
        let tabs = tab_descriptors::<QuizStatus>(Role::Learner);
        assert_eq!(tabs.len(), 4);
        assert_eq!(
            tabs[1],
            TabDescriptor {
                key: "in-progress",
                label: "In Progress"
            }
        );
    }
}
