//! Academy Catalog - status tabs, filtering and sorting
//!
//! This module turns a set of status buckets, a role, and the user's filter
//! state into a render-ready list of items.
//!
//! # Overview
//!
//! - Each catalog kind (course, quiz, quest) has a closed set of status keys
//! - A role sees a fixed, ordered subset of those keys as tabs
//! - The active bucket is searched, filtered by difficulty and category, and sorted
//!
//! # Pipeline
//!
//! ```text
//! StatusBucketMap ──► bucket(active_status)
//!                          │
//!                          ▼
//!                     text search (name, description)
//!                          │
//!                          ▼
//!                     difficulty ∈ selection   (empty = all)
//!                          │
//!                          ▼
//!                     category ∈ selection     (empty = all)
//!                          │
//!                          ▼
//!                     sort (points | duration | difficulty | none)
//! ```

mod engine;
mod filter;
mod item;
mod kind;
mod preview;
mod status;

pub use engine::{sort_items, visible_items, StatusBucketMap};
pub use filter::{FilterState, Selection, SortOption};
pub use item::{parse_leading_number, CatalogItem, Difficulty, ItemId};
pub use kind::CatalogKind;
pub use preview::{preview, Preview};
pub use status::{
    ensure_valid_active_status, tab_descriptors, tabs_for_role, QuizStatus, Role, StatusKey,
    TabDescriptor, TrackStatus, DEFAULT_STUDENT_ROLE,
};

#[cfg(test)]
mod tests;
