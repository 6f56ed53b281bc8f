//! Academy catalog CLI commands
//!
//! Loads status buckets from disk and renders tabs, filtered listings and
//! dashboard previews.

use anyhow::{bail, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::{debug, warn};

use academy_core::catalog::{
    ensure_valid_active_status, preview, tab_descriptors, tabs_for_role, visible_items,
    CatalogItem, CatalogKind, Difficulty, FilterState, QuizStatus, Role, SortOption,
    StatusBucketMap, StatusKey, TrackStatus,
};
use academy_core::config::AcademyConfig;
use academy_core::source::{learner_buckets, load_buckets, LearnerDashboard};
use academy_core::ParseError;

/// Show the status tabs a role sees for a catalog kind
#[derive(Args, Debug)]
pub struct TabsArgs {
    /// Catalog kind (course, quiz, quest)
    #[clap(long, default_value = "course")]
    pub kind: CatalogKind,

    /// Role name of the signed-in user
    #[clap(long)]
    pub role: Option<String>,

    /// Output as JSON
    #[clap(long)]
    pub json: bool,
}

/// Filter and sort one tab of a catalog file
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog file (JSON or YAML, keyed by status or a flat list)
    pub file: PathBuf,

    /// Catalog kind (course, quiz, quest)
    #[clap(long, default_value = "course")]
    pub kind: CatalogKind,

    /// Role name of the signed-in user
    #[clap(long)]
    pub role: Option<String>,

    /// Status tab to show (defaults to the role's first tab)
    #[clap(long)]
    pub status: Option<String>,

    /// Free-text search over name and description
    #[clap(long, default_value = "")]
    pub search: String,

    /// Difficulty to include (repeatable or comma-separated)
    #[clap(long, value_delimiter = ',')]
    pub difficulty: Vec<Difficulty>,

    /// Category to include (repeatable)
    #[clap(long)]
    pub category: Vec<String>,

    /// Sort option, e.g. POINTS_DESC or duration-asc (defaults to config)
    #[clap(long)]
    pub sort: Option<String>,

    /// Output as JSON
    #[clap(long)]
    pub json: bool,
}

/// Preview the first tab of each catalog, as the dashboard does
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Course catalog file
    #[clap(long)]
    pub courses: Option<PathBuf>,

    /// Quiz catalog file
    #[clap(long)]
    pub quizzes: Option<PathBuf>,

    /// Quest catalog file
    #[clap(long)]
    pub quests: Option<PathBuf>,

    /// Learner dashboard payload supplying quest enrollments
    #[clap(long)]
    pub enrollments: Option<PathBuf>,

    /// Role name of the signed-in user
    #[clap(long)]
    pub role: Option<String>,
}

/// Table row for tab listings
#[derive(Tabled)]
struct TabRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: String,
}

/// Table row for catalog items
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Points")]
    points: i64,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Link")]
    link: String,
}

impl ItemRow {
    fn new(kind: CatalogKind, item: &CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: truncate(&item.name, 40),
            difficulty: item.difficulty.label().to_string(),
            category: item.category.clone().unwrap_or_else(|| "-".to_string()),
            points: item.points,
            duration: format!("{}", item.duration),
            link: kind.detail_href(&item.name, &item.id),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

pub fn execute_tabs(args: &TabsArgs, config: &AcademyConfig) -> Result<()> {
    let role = config.role(args.role.as_deref());
    let descriptors = match args.kind {
        CatalogKind::Course | CatalogKind::Quest => tab_descriptors::<TrackStatus>(role),
        CatalogKind::Quiz => tab_descriptors::<QuizStatus>(role),
    };

    if args.json {
        let sorts: Vec<&str> = args.kind.sort_options().iter().map(|s| s.as_str()).collect();
        let output = serde_json::json!({
            "kind": args.kind,
            "role": role,
            "tabs": descriptors,
            "sort_options": sorts,
            "category_filter": args.kind.has_category_filter(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let rows: Vec<TabRow> = descriptors
        .iter()
        .map(|t| TabRow {
            key: t.key.to_string(),
            label: t.label.to_string(),
        })
        .collect();

    println!("{} catalog tabs ({:?} view):\n", args.kind.label(), role);
    println!("{}", render_table(&rows));
    println!("\nSort options:");
    for option in args.kind.sort_options() {
        println!("  {:<16} {}", option.as_str(), option.label());
    }

    Ok(())
}

pub fn execute_list(args: &ListArgs, config: &AcademyConfig) -> Result<()> {
    match args.kind {
        CatalogKind::Course | CatalogKind::Quest => list_kind::<TrackStatus>(args, config),
        CatalogKind::Quiz => list_kind::<QuizStatus>(args, config),
    }
}

/// Resolve the requested tab, correcting it to the role's first tab when the
/// role cannot see it
fn resolve_status<S: StatusKey>(requested: Option<&str>, role: Role) -> Result<S> {
    let tabs = tabs_for_role::<S>(role);
    let Some(first) = tabs.first().copied() else {
        bail!("No {} tabs for this role", S::KIND);
    };

    let Some(raw) = requested else {
        return Ok(first);
    };

    let status = S::from_key(raw).ok_or_else(|| ParseError::UnknownStatus {
        kind: S::KIND,
        key: raw.to_string(),
    })?;

    let resolved = ensure_valid_active_status(status, tabs);
    if resolved != status {
        warn!(
            requested = status.key(),
            shown = resolved.key(),
            "Status is not a tab for this role, showing first tab instead"
        );
    }
    Ok(resolved)
}

fn list_kind<S: StatusKey>(args: &ListArgs, config: &AcademyConfig) -> Result<()> {
    let role = config.role(args.role.as_deref());
    let map: StatusBucketMap<S> = load_buckets(&args.file)?;

    let sort = match args.sort.as_deref() {
        Some(name) => SortOption::parse_or_unsorted(name),
        None => config.default_sort,
    };
    if sort != SortOption::Unsorted && !args.kind.sort_options().contains(&sort) {
        warn!(sort = %sort, kind = %args.kind, "Sort option is not offered for this catalog kind");
    }
    if !args.category.is_empty() && !args.kind.has_category_filter() {
        debug!(kind = %args.kind, "Category filter applied to a kind without a category menu");
    }

    let filters = FilterState::for_role(role, sort)
        .with_status(resolve_status::<S>(args.status.as_deref(), role)?)
        .with_search(args.search.clone())
        .with_difficulties(args.difficulty.iter().copied())
        .with_categories(args.category.iter().cloned());

    let visible = visible_items(&map, &filters);

    if args.json {
        let items: Vec<serde_json::Value> = visible
            .iter()
            .map(|item| {
                serde_json::json!({
                    "id": item.id,
                    "name": item.name,
                    "difficulty": item.difficulty,
                    "category": item.category,
                    "points": item.points,
                    "duration": item.duration,
                    "href": args.kind.detail_href(&item.name, &item.id),
                })
            })
            .collect();
        let output = serde_json::json!({
            "kind": args.kind,
            "status": filters.active_status.key(),
            "sort": filters.sort_option,
            "count": visible.len(),
            "items": items,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} | Sort: {} | Difficulty: {}",
        filters.active_status.label(),
        filters.sort_option.label(),
        filters.selected_difficulties.badge_label()
    );
    println!("{}\n", args.kind.results_caption(visible.len()));

    if visible.is_empty() {
        println!("No {} match the current filters.", args.kind.plural());
        return Ok(());
    }

    let rows: Vec<ItemRow> = visible
        .iter()
        .map(|item| ItemRow::new(args.kind, item))
        .collect();
    println!("{}", render_table(&rows));

    Ok(())
}

pub fn execute_dashboard(args: &DashboardArgs, config: &AcademyConfig) -> Result<()> {
    let role = config.role(args.role.as_deref());

    if args.courses.is_none() && args.quizzes.is_none() && args.quests.is_none() {
        bail!("Nothing to show. Pass at least one of --courses, --quizzes or --quests");
    }

    if let Some(path) = &args.courses {
        let map = load_buckets::<TrackStatus>(path)?;
        print_section(CatalogKind::Course, &map, role, config);
    }

    if let Some(path) = &args.quizzes {
        let map = load_buckets::<QuizStatus>(path)?;
        print_section(CatalogKind::Quiz, &map, role, config);
    }

    if let Some(path) = &args.quests {
        let map = quest_buckets(path, args.enrollments.as_deref(), role)?;
        print_section(CatalogKind::Quest, &map, role, config);
    }

    Ok(())
}

/// Learners see their enrollments next to the available quests
fn quest_buckets(
    path: &Path,
    enrollments: Option<&Path>,
    role: Role,
) -> Result<StatusBucketMap<TrackStatus>> {
    let map = load_buckets::<TrackStatus>(path)?;
    match (role, enrollments) {
        (Role::Learner, Some(enrollments)) => {
            let dashboard = LearnerDashboard::from_file(enrollments)?;
            let available = map.bucket(TrackStatus::Available).to_vec();
            Ok(learner_buckets(Some(dashboard), available))
        }
        (Role::Admin, Some(_)) => {
            debug!("Ignoring enrollments for the administrative view");
            Ok(map)
        }
        (_, None) => Ok(map),
    }
}

fn print_section<S: StatusKey>(
    kind: CatalogKind,
    map: &StatusBucketMap<S>,
    role: Role,
    config: &AcademyConfig,
) {
    let Some(&status) = tabs_for_role::<S>(role).first() else {
        return;
    };

    // Sections show the head of the bucket in source order
    let bucket = map.bucket(status);
    let shown = preview(bucket, config.preview_limits.for_kind(kind));

    println!(
        "\n{} ({}): {}",
        kind.label(),
        status.label(),
        kind.results_caption(bucket.len())
    );

    if shown.visible.is_empty() {
        return;
    }

    let rows: Vec<ItemRow> = shown
        .visible
        .iter()
        .map(|item| ItemRow::new(kind, item))
        .collect();
    println!("{}", render_table(&rows));

    if shown.has_more() {
        println!("Show {} more in /{}", shown.hidden, kind.route());
    }
}
