//! Breadcrumb trail for a route path
//!
//! Known route segments get fixed names, slug segments (`name-123`) get the
//! slug's display name, and anything else is title-cased word by word.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::slug::{capitalize, extract_name_from_slug};

static SLUG_WITH_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"-[0-9]+$").unwrap());

/// Root crumb label
pub const DASHBOARD_LABEL: &str = "Dashboard";

const ROUTE_NAMES: &[(&str, &str)] = &[
    ("course-catalog", "Course Catalog"),
    ("quiz-catalog", "Quiz Catalog"),
    ("quest-catalog", "Quest Catalog"),
    ("quest", "Quest"),
    ("documentation", "Documentation"),
    ("help", "Help Center"),
];

/// One entry of the trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    /// The page being viewed; rendered as text rather than a link
    pub current: bool,
}

/// Display name for a single path segment
pub fn segment_label(segment: &str) -> String {
    if let Some((_, name)) = ROUTE_NAMES.iter().find(|(route, _)| *route == segment) {
        return (*name).to_string();
    }

    if SLUG_WITH_ID.is_match(segment) {
        return extract_name_from_slug(segment);
    }

    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the trail for `pathname`, starting with the dashboard
pub fn breadcrumbs(pathname: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return vec![Crumb {
            label: DASHBOARD_LABEL.to_string(),
            href: "/".to_string(),
            current: true,
        }];
    }

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(Crumb {
        label: DASHBOARD_LABEL.to_string(),
        href: "/".to_string(),
        current: false,
    });

    for (index, segment) in segments.iter().enumerate() {
        trail.push(Crumb {
            label: segment_label(segment),
            href: format!("/{}", segments[..=index].join("/")),
            current: index == segments.len() - 1,
        });
    }

    trail
}
