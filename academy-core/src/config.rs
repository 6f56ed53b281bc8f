//! Academy configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. An explicit file passed by the caller (`--config`)
//! 2. `.academy/config.yaml` - Project-level config
//! 3. `~/.config/academy/config.yaml` - Global config
//! 4. Built-in defaults
//!
//! Every field is optional in the file:
//!
//! ```yaml
//! student_role: Student
//! default_sort: POINTS_DESC
//! preview_limits:
//!   courses: 4
//!   quizzes: 4
//!   quests: 6
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{CatalogKind, Role, SortOption, DEFAULT_STUDENT_ROLE};

/// Config file name inside a config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Project-level config directory
pub const PROJECT_CONFIG_DIR: &str = ".academy";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademyConfig {
    /// The one role name that selects the learner view
    #[serde(default = "default_student_role")]
    pub student_role: String,

    /// Sort order of a fresh filter state
    #[serde(default = "default_sort")]
    pub default_sort: SortOption,

    /// Dashboard truncation limits
    #[serde(default)]
    pub preview_limits: PreviewLimits,
}

/// How many items each dashboard section shows before "show more"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLimits {
    #[serde(default = "default_course_limit")]
    pub courses: usize,
    #[serde(default = "default_quiz_limit")]
    pub quizzes: usize,
    #[serde(default = "default_quest_limit")]
    pub quests: usize,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            student_role: default_student_role(),
            default_sort: default_sort(),
            preview_limits: PreviewLimits::default(),
        }
    }
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            courses: default_course_limit(),
            quizzes: default_quiz_limit(),
            quests: default_quest_limit(),
        }
    }
}

fn default_student_role() -> String {
    DEFAULT_STUDENT_ROLE.to_string()
}

fn default_sort() -> SortOption {
    SortOption::PointsDesc
}

fn default_course_limit() -> usize {
    4
}

fn default_quiz_limit() -> usize {
    4
}

fn default_quest_limit() -> usize {
    6
}

impl PreviewLimits {
    pub fn for_kind(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Course => self.courses,
            CatalogKind::Quiz => self.quizzes,
            CatalogKind::Quest => self.quests,
        }
    }
}

impl AcademyConfig {
    /// Parse config from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse academy config YAML")
    }

    /// Load config from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Load from the first directory that has a config file: project, then global.
    ///
    /// A missing file falls through to the next source; a malformed one is an
    /// error.
    pub fn load_from_directory(project_dir: Option<&Path>, global_dir: Option<&Path>) -> Result<Self> {
        for dir in [project_dir, global_dir].into_iter().flatten() {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.is_file() {
                debug!("Loading academy config from {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        debug!("No academy config found, using defaults");
        Ok(Self::default())
    }

    /// Resolve config the way the CLI does: explicit file, then
    /// `.academy/` under `working_dir`, then the global config directory.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let project_dir = working_dir.join(PROJECT_CONFIG_DIR);
        let global_dir = global_config_dir();
        Self::load_from_directory(Some(&project_dir), global_dir.as_deref())
    }

    /// Role for a raw role name under this config
    pub fn role(&self, name: Option<&str>) -> Role {
        Role::from_name(name, &self.student_role)
    }
}

/// Global config directory, if the platform has one
pub fn global_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "academy", "academy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| dirs::config_dir().map(|d| d.join("academy")))
}
