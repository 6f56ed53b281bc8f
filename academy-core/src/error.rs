//! Parse errors for the closed vocabularies used by the catalog

use thiserror::Error;

/// Errors raised when a caller names a difficulty, status, or catalog kind
/// that the catalog does not know about.
///
/// The engine operations themselves never fail; these only surface when text
/// input (CLI flags, config files) is converted into typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown difficulty '{0}'. Expected one of: beginner, intermediate, advanced, expert")]
    UnknownDifficulty(String),

    #[error("Unknown {kind} status '{key}'")]
    UnknownStatus { kind: &'static str, key: String },

    #[error("Unknown catalog kind '{0}'. Expected one of: course, quiz, quest")]
    UnknownKind(String),

    #[error("Unknown sort option '{0}'")]
    UnknownSortOption(String),
}
