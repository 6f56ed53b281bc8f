//! File-backed data source for bucket maps
//!
//! A catalog file is JSON or YAML (chosen by extension) in one of two shapes:
//!
//! ```yaml
//! # keyed by status
//! available:
//!   - { id: 1, title: Intro, difficulty: Easy, points: 100, duration: 10 }
//! locked: []
//! ```
//!
//! ```yaml
//! # flat list, partitioned by each item's status
//! - { id: 1, title: Intro, difficulty: Easy, status: available }
//! ```
//!
//! Learner and admin payloads from the backend are assembled into the same
//! bucket map shape by [`learner_buckets`] and [`admin_buckets`].

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::catalog::{CatalogItem, StatusBucketMap, StatusKey, TrackStatus};

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Keyed(BTreeMap<String, Vec<CatalogItem>>),
    Flat(Vec<CatalogItem>),
}

/// Parse a JSON or YAML document based on the file extension
fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display())),
        Some("yaml") | Some("yml") => serde_yaml_ng::from_str(content)
            .with_context(|| format!("Failed to parse YAML: {}", path.display())),
        _ => bail!(
            "Unsupported catalog file format: {} (expected .json, .yaml or .yml)",
            path.display()
        ),
    }
}

/// Load a bucket map from a catalog file
pub fn load_buckets<S: StatusKey>(path: &Path) -> Result<StatusBucketMap<S>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let file: CatalogFile = parse_document(path, &content)?;

    let map = match file {
        CatalogFile::Keyed(buckets) => keyed_buckets(buckets),
        CatalogFile::Flat(items) => StatusBucketMap::group_by_status(items),
    };

    debug!(path = %path.display(), items = map.total(), "Loaded catalog file");
    Ok(map)
}

fn keyed_buckets<S: StatusKey>(buckets: BTreeMap<String, Vec<CatalogItem>>) -> StatusBucketMap<S> {
    let mut map = StatusBucketMap::new();
    for (key, items) in buckets {
        match S::from_key(&key) {
            Some(status) => map.insert(status, items),
            None => warn!(
                key = key.as_str(),
                kind = S::KIND,
                dropped = items.len(),
                "Ignoring bucket with unknown status key"
            ),
        }
    }
    map
}

/// An enrollment as returned by the learner dashboard; the item sits under `quest`
#[derive(Debug, Clone, Deserialize)]
pub struct Enrollment {
    pub quest: CatalogItem,
}

/// The parts of the learner dashboard payload the catalog consumes.
///
/// Every list is optional; absent lists become empty buckets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LearnerDashboard {
    #[serde(default)]
    pub not_started_quests: Vec<Enrollment>,
    #[serde(default)]
    pub in_progress_quests: Vec<Enrollment>,
    #[serde(default)]
    pub paused_quests: Vec<Enrollment>,
    #[serde(default)]
    pub abandoned_quests: Vec<Enrollment>,
    #[serde(default)]
    pub completed_quests: Vec<Enrollment>,
}

impl LearnerDashboard {
    /// Load a learner dashboard payload from a JSON or YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dashboard file: {}", path.display()))?;
        parse_document(path, &content)
    }
}

fn unwrap_enrollments(enrollments: Vec<Enrollment>) -> Vec<CatalogItem> {
    enrollments.into_iter().map(|e| e.quest).collect()
}

/// Learner view: `available` from the available list, the rest from enrollments
pub fn learner_buckets(
    dashboard: Option<LearnerDashboard>,
    available: Vec<CatalogItem>,
) -> StatusBucketMap<TrackStatus> {
    let dashboard = dashboard.unwrap_or_default();

    StatusBucketMap::new()
        .with_bucket(TrackStatus::Available, available)
        .with_bucket(TrackStatus::InProgress, unwrap_enrollments(dashboard.in_progress_quests))
        .with_bucket(TrackStatus::NotStarted, unwrap_enrollments(dashboard.not_started_quests))
        .with_bucket(TrackStatus::Paused, unwrap_enrollments(dashboard.paused_quests))
        .with_bucket(TrackStatus::Abandoned, unwrap_enrollments(dashboard.abandoned_quests))
        .with_bucket(TrackStatus::Completed, unwrap_enrollments(dashboard.completed_quests))
}

/// Admin view: one fetched list per backend status
pub fn admin_buckets(
    fetched: impl IntoIterator<Item = (TrackStatus, Vec<CatalogItem>)>,
) -> StatusBucketMap<TrackStatus> {
    let mut map = StatusBucketMap::new();
    for (status, items) in fetched {
        map.insert(status, items);
    }
    map
}
