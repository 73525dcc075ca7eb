use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::input::resource::is_locale_tag;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "resourceFiles.excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings read from `.comment-locale.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSettings {
    pub resource_files: ResourceFilesConfig,

    /// Locales to load from the resource directory.
    ///
    /// - `None`: every resource file found is loaded (default)
    /// - `Some([...])`: files for other locales are skipped
    pub locales: Option<Vec<String>>,

    /// Reject tables that fail validation instead of loading them.
    pub strict: bool,

    /// Start from the compiled-in tables. Files override them per locale.
    pub include_builtin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceFilesConfig {
    pub file_pattern: String,
    pub exclude_patterns: Vec<String>,
}

impl ResourceSettings {
    /// # Errors
    /// - Empty or invalid glob pattern
    /// - Empty or malformed locale identifier
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let file_pattern = &self.resource_files.file_pattern;
        if file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "resourceFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/i18n/*.{js,json}\"",
            ));
        } else if let Err(e) = globset::Glob::new(file_pattern) {
            errors.push(ValidationError::new(
                "resourceFiles.filePattern",
                format!("Invalid glob pattern '{file_pattern}': {e}"),
            ));
        }

        for (index, pattern) in self.resource_files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("resourceFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, locale) in self.locales.iter().flatten().enumerate() {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    "The locale cannot be empty. Example: \"de\"",
                ));
            } else if !is_locale_tag(locale) {
                errors.push(ValidationError::new(
                    format!("locales[{index}]"),
                    format!("'{locale}' is not a locale identifier. Example: \"de\" or \"pt-BR\""),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Returns true if files for `locale` should be loaded.
    #[must_use]
    pub fn wants_locale(&self, locale: &str) -> bool {
        self.locales.as_ref().is_none_or(|locales| locales.iter().any(|l| l == locale))
    }
}

impl Default for ResourceFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/i18n/*.{js,json}".to_string(), exclude_patterns: Vec::new() }
    }
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            resource_files: ResourceFilesConfig::default(),
            locales: None,
            strict: true,
            include_builtin: true,
        }
    }
}
