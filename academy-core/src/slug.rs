//! URL slugs that embed an item id in a human-readable path segment
//!
//! A slug has the form `<normalized-name>-<id>`. The id is whatever follows
//! the last hyphen, so ids must not contain hyphens themselves. A name whose
//! normalized form ends in a number (`"Top 10"`) is indistinguishable from the
//! id when only the slug is available; callers that need the real name must
//! look it up by id.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;
use tracing::trace;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Convert text into a URL-safe slug.
///
/// Lower-cases, replaces whitespace runs with `-`, strips everything that is
/// not an ASCII word character or hyphen, collapses repeated hyphens and trims
/// hyphens from both ends. Idempotent.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(lowered.trim(), "-");
    let stripped = NON_WORD.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    let slug = collapsed.trim_matches('-').to_string();
    trace!(input = text, slug = slug.as_str(), "Slugified");
    slug
}

/// `slugify(name)` followed by `-` and the id
pub fn create_slug_with_id(name: &str, id: impl Display) -> String {
    format!("{}-{}", slugify(name), id)
}

/// The last hyphen-delimited segment, taken as the id without validation
pub fn extract_id_from_slug(slug: &str) -> &str {
    slug.rsplit('-').next().unwrap_or(slug)
}

/// Approximate display name: every segment but the last, title-cased and
/// joined with spaces.
pub fn extract_name_from_slug(slug: &str) -> String {
    let parts: Vec<&str> = slug.split('-').collect();
    parts[..parts.len() - 1]
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character, leave the rest untouched
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod slug_tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("React Basics!!"), "react-basics");
        assert_eq!(slugify("  Hello   World  "), "hello-world");
        assert_eq!(slugify("C++ & Rust -- Together"), "c-rust-together");
        assert_eq!(slugify("---edge---"), "edge");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in [
            "React Basics!!",
            "  Über  Café -- 2024 ",
            "a - b - c",
            "Top 10",
            "___",
            "MiXeD\tCase\nLines",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_create_and_extract() {
        let slug = create_slug_with_id("React Basics!!", 42);
        assert_eq!(slug, "react-basics-42");
        assert_eq!(extract_id_from_slug(&slug), "42");
        assert_eq!(extract_name_from_slug(&slug), "React Basics");
    }

    #[test]
    fn test_round_trip_integer_ids() {
        for (name, id) in [("Intro to X", 1u64), ("Adv Y", 0), ("Data 101 Basics", 987654321)] {
            let slug = create_slug_with_id(name, id);
            assert_eq!(extract_id_from_slug(&slug), id.to_string());
        }
    }

    #[test]
    fn test_extract_id_accepts_any_trailing_token() {
        assert_eq!(extract_id_from_slug("some-course-abc"), "abc");
        assert_eq!(extract_id_from_slug("plain"), "plain");
        assert_eq!(extract_id_from_slug(""), "");
    }

    #[test]
    fn test_trailing_number_in_name_is_ambiguous() {
        // Name "Top 10" with id 7: the id is still the last segment,
        // but the name's number survives only as part of the display name.
        let slug = create_slug_with_id("Top 10", 7);
        assert_eq!(slug, "top-10-7");
        assert_eq!(extract_id_from_slug(&slug), "7");
        assert_eq!(extract_name_from_slug(&slug), "Top 10");

        // Without an id the trailing numeral is mistaken for one.
        assert_eq!(extract_id_from_slug("top-10"), "10");
    }

    #[test]
    fn test_extract_name_without_hyphen_is_empty() {
        assert_eq!(extract_name_from_slug("42"), "");
    }
}
