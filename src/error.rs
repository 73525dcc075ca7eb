use std::path::PathBuf;

use thiserror::Error;

use crate::types::SourceRange;
use crate::validate::ValidationIssue;

/// Errors raised while loading or reading locale tables.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The table for `locale` has no entry for `key`.
    #[error("Key '{key}' not found in locale '{locale}'")]
    KeyNotFound { locale: String, key: String },

    /// No table is registered for the locale identifier.
    #[error("Locale '{0}' is not loaded")]
    UnknownLocale(String),

    /// The string is not part of the widget key vocabulary.
    #[error("Unknown widget key '{0}'")]
    UnknownKey(String),

    #[error("Invalid locale identifier '{0}'")]
    InvalidLocale(String),

    /// A key occurs twice in one resource.
    #[error("Duplicate key '{key}' at {}", .range.start)]
    DuplicateKey { key: String, range: SourceRange },

    /// A key repeats among entries that have no source position.
    #[error("Duplicate key '{0}'")]
    DuplicateEntry(String),

    #[error("Locale '{locale}' is defined more than once (again in {})", .path.display())]
    DuplicateLocale { locale: String, path: PathBuf },

    #[error("Value of key '{key}' must be a string")]
    NonStringValue { key: String },

    #[error("Malformed locale resource: {0}")]
    Malformed(String),

    /// Strict loading rejected a table.
    #[error("Locale '{locale}' failed validation:\n{}", format_issues(.issues))]
    Invalid { locale: String, issues: Vec<ValidationIssue> },

    #[error("Failed to read locale resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse locale resource: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid resource file pattern: {0}")]
    Glob(#[from] globset::Error),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .enumerate()
        .map(|(i, issue)| format!("  {}. {issue}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
