//! Academy - browse course, quiz and quest catalogs from the command line
//!
//! Thin front end over `academy_core`: catalog files are loaded from disk,
//! the filter/sort pipeline runs locally, and results are printed as tables
//! or JSON. Logs always go to stderr.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use academy_core::config::AcademyConfig;

mod catalog_cli;
mod slug_cli;

use catalog_cli::{DashboardArgs, ListArgs, TabsArgs};
use slug_cli::SlugCommand;

/// Trace modules
#[derive(Debug, Clone, PartialEq, ValueEnum)]
enum TraceModule {
    Engine,
    Slug,
    Source,
    All,
}

/// Log levels
#[derive(Debug, Clone, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "academy",
    about = "Browse Academy course, quiz and quest catalogs",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Enable tracing for modules (comma-separated: engine,slug,source,all)
    #[clap(long, value_delimiter = ',', global = true)]
    trace: Vec<TraceModule>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Use this configuration file instead of .academy/ or the global config
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Show the status tabs a role sees
    Tabs(TabsArgs),

    /// Filter and sort one tab of a catalog file
    List(ListArgs),

    /// Preview the first tab of each catalog
    Dashboard(DashboardArgs),

    /// Create or parse item slugs
    Slug {
        #[clap(subcommand)]
        command: SlugCommand,
    },

    /// Show the breadcrumb trail for a route path
    Breadcrumb {
        /// Route path, e.g. /course-catalog/react-basics-42
        path: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

/// Initialize tracing with CLI flags
///
/// When --trace is set, the named modules log at trace level as JSON.
fn initialize_tracing(log_level: &LogLevel, trace_modules: &[TraceModule]) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    for module in trace_modules {
        let directive = match module {
            TraceModule::Engine => "academy_core::catalog=trace",
            TraceModule::Slug => "academy_core::slug=trace",
            TraceModule::Source => "academy_core::source=trace",
            TraceModule::All => "academy_core=trace",
        };

        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }

    if !trace_modules.is_empty() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!(trace_modules = ?trace_modules, "Academy tracing enabled");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, &cli.trace);

    let working_dir = std::env::current_dir()?;
    let config = AcademyConfig::load(cli.config.as_deref(), &working_dir)?;
    debug!(?config, "Resolved academy config");

    match cli.command {
        Command::Tabs(args) => catalog_cli::execute_tabs(&args, &config),
        Command::List(args) => catalog_cli::execute_list(&args, &config),
        Command::Dashboard(args) => catalog_cli::execute_dashboard(&args, &config),
        Command::Slug { command } => command.execute(),
        Command::Breadcrumb { path, json } => slug_cli::execute_breadcrumb(&path, json),
    }
}
