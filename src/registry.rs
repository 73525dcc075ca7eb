//! Locale identifier → table registry.
//!
//! A registry never falls back from one locale to another: asking for a
//! locale it does not hold is [`LocaleError::UnknownLocale`], asking a
//! table for a key it does not hold is [`LocaleError::KeyNotFound`].

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use crate::config::ResourceSettings;
use crate::error::LocaleError;
use crate::input::resource::{
    load_resource_file,
    locale_from_path,
};
use crate::locales::{
    self,
    BUILTIN_LOCALES,
};
use crate::table::LocaleTable;
use crate::validate::ValidationIssue;

/// Shared, read-only locale tables keyed by locale identifier.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    tables: HashMap<String, Arc<LocaleTable>>,
    sources: HashMap<String, PathBuf>,
}

impl LocaleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the compiled-in tables.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for locale in BUILTIN_LOCALES {
            if let Some(table) = locales::builtin(locale) {
                registry.insert(table.clone());
            }
        }
        registry
    }

    /// Registers `table` under its locale, returning the table it replaces.
    pub fn insert(&mut self, table: LocaleTable) -> Option<Arc<LocaleTable>> {
        self.sources.remove(table.locale());
        self.tables.insert(table.locale().to_string(), Arc::new(table))
    }

    /// Resource file the table for `locale` was loaded from. `None` for
    /// built-in and inserted tables.
    #[must_use]
    pub fn source(&self, locale: &str) -> Option<&Path> {
        self.sources.get(locale).map(PathBuf::as_path)
    }

    /// # Errors
    /// [`LocaleError::UnknownLocale`] if no table is registered for `locale`.
    pub fn table(&self, locale: &str) -> Result<Arc<LocaleTable>, LocaleError> {
        self.tables
            .get(locale)
            .cloned()
            .ok_or_else(|| LocaleError::UnknownLocale(locale.to_string()))
    }

    /// Looks up `key` in the table for `locale`.
    ///
    /// # Errors
    /// [`LocaleError::UnknownLocale`] or [`LocaleError::KeyNotFound`].
    pub fn lookup(&self, locale: &str, key: &str) -> Result<&str, LocaleError> {
        self.tables
            .get(locale)
            .ok_or_else(|| LocaleError::UnknownLocale(locale.to_string()))?
            .get(key)
    }

    /// Registered locale identifiers, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Registered tables, sorted by locale.
    #[must_use]
    pub fn tables(&self) -> Vec<Arc<LocaleTable>> {
        let mut tables: Vec<Arc<LocaleTable>> = self.tables.values().cloned().collect();
        tables.sort_unstable_by(|a, b| a.locale().cmp(b.locale()));
        tables
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Loads every resource file under `resource_root`.
    ///
    /// Files that match the pattern but are not named after a locale are
    /// skipped with a warning.
    ///
    /// # Errors
    /// - [`LocaleError::Glob`] for an invalid pattern
    /// - [`LocaleError::DuplicateLocale`] if two files define one locale
    /// - [`LocaleError::Invalid`] if `strict` is set and a table has errors
    /// - any error from reading or parsing a file
    pub fn load_dir(
        resource_root: &Path,
        settings: &ResourceSettings,
    ) -> Result<Self, LocaleError> {
        tracing::debug!(resource_root = %resource_root.display(), "Loading locale resources");

        let mut registry = if settings.include_builtin { Self::with_builtin() } else { Self::new() };

        for path in find_resource_files(resource_root, settings)? {
            let locale = match locale_from_path(&path) {
                Ok(locale) => locale,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "Skipping resource file");
                    continue;
                }
            };
            if !settings.wants_locale(&locale) {
                tracing::debug!(path = %path.display(), %locale, "Locale not configured, skipping");
                continue;
            }
            if registry.sources.contains_key(&locale) {
                return Err(LocaleError::DuplicateLocale { locale, path });
            }

            let table = load_resource_file(&path)?;
            if settings.strict {
                let (errors, warnings): (Vec<_>, Vec<_>) =
                    table.validate().into_iter().partition(ValidationIssue::is_error);
                if !errors.is_empty() {
                    return Err(LocaleError::Invalid { locale, issues: errors });
                }
                for issue in warnings {
                    tracing::warn!(path = %path.display(), %issue, "Locale resource warning");
                }
            }

            if registry.insert(table).is_some() {
                tracing::debug!(%locale, "Resource file overrides built-in table");
            }
            registry.sources.insert(locale, path);
        }

        Ok(registry)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, LocaleError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Resource files under `resource_root`, sorted by path.
fn find_resource_files(
    resource_root: &Path,
    settings: &ResourceSettings,
) -> Result<Vec<PathBuf>, LocaleError> {
    let include_set =
        build_glob_set(std::slice::from_ref(&settings.resource_files.file_pattern))?;
    let exclude_set = build_glob_set(&settings.resource_files.exclude_patterns)?;

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(resource_root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(resource_root) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    Ok(found_files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::ResourceFilesConfig;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn lenient() -> ResourceSettings {
        ResourceSettings { strict: false, ..ResourceSettings::default() }
    }

    #[rstest]
    fn with_builtin_has_german() {
        let registry = LocaleRegistry::with_builtin();

        assert_that!(registry.locales(), elements_are![eq(&"de")]);
        assert_eq!(registry.lookup("de", "postbox-submit").unwrap(), "Abschicken");
    }

    #[rstest]
    fn lookup_does_not_fall_back() {
        let registry = LocaleRegistry::with_builtin();

        assert!(matches!(
            registry.lookup("de-AT", "postbox-submit"),
            Err(LocaleError::UnknownLocale(ref l)) if l == "de-AT"
        ));
        assert!(matches!(
            registry.lookup("de", "postbox-cancel"),
            Err(LocaleError::KeyNotFound { .. })
        ));
    }

    #[rstest]
    fn insert_replaces_table() {
        let mut registry = LocaleRegistry::with_builtin();
        let table = LocaleTable::from_entries("de", [("postbox-submit", "Senden")]).unwrap();

        let previous = registry.insert(table);

        assert!(previous.is_some());
        assert_eq!(registry.lookup("de", "postbox-submit").unwrap(), "Senden");
        assert_that!(registry.len(), eq(1));
    }

    #[rstest]
    fn table_is_shared() {
        let registry = LocaleRegistry::with_builtin();

        let first = registry.table("de").unwrap();
        let second = registry.table("de").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(matches!(registry.table("fr"), Err(LocaleError::UnknownLocale(_))));
    }

    #[rstest]
    fn load_dir_reads_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "js/app/i18n/fr.js", r#"define({"postbox-submit": "Soumettre"});"#);
        write(temp_dir.path(), "js/app/i18n/pt_BR.json", r#"{"postbox-submit": "Enviar"}"#);
        write(temp_dir.path(), "js/app/other/it.json", r#"{"postbox-submit": "Invia"}"#);

        let registry = LocaleRegistry::load_dir(temp_dir.path(), &lenient()).unwrap();

        assert_that!(registry.locales(), elements_are![eq(&"de"), eq(&"fr"), eq(&"pt_BR")]);
        assert_eq!(registry.lookup("fr", "postbox-submit").unwrap(), "Soumettre");
        assert_eq!(registry.lookup("pt_BR", "postbox-submit").unwrap(), "Enviar");
    }

    #[rstest]
    fn load_dir_without_builtin() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/fr.js", r#"define({"date-now": "à l'instant"});"#);
        let settings = ResourceSettings { include_builtin: false, ..lenient() };

        let registry = LocaleRegistry::load_dir(temp_dir.path(), &settings).unwrap();

        assert_that!(registry.locales(), elements_are![eq(&"fr")]);
    }

    #[rstest]
    fn load_dir_file_overrides_builtin() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/de.json", r#"{"postbox-submit": "Senden"}"#);

        let registry = LocaleRegistry::load_dir(temp_dir.path(), &lenient()).unwrap();

        assert_eq!(registry.lookup("de", "postbox-submit").unwrap(), "Senden");
        assert!(registry.lookup("de", "date-now").is_err());
    }

    #[rstest]
    fn load_dir_respects_locales_and_excludes() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/fr.js", r#"define({"date-now": "à l'instant"});"#);
        write(temp_dir.path(), "i18n/es.js", r#"define({"date-now": "justo ahora"});"#);
        write(temp_dir.path(), "dist/i18n/it.js", r#"define({"date-now": "adesso"});"#);
        let settings = ResourceSettings {
            locales: Some(vec!["fr".to_string(), "it".to_string()]),
            include_builtin: false,
            resource_files: ResourceFilesConfig {
                exclude_patterns: vec!["dist/**".to_string()],
                ..ResourceFilesConfig::default()
            },
            ..lenient()
        };

        let registry = LocaleRegistry::load_dir(temp_dir.path(), &settings).unwrap();

        assert_that!(registry.locales(), elements_are![eq(&"fr")]);
    }

    #[rstest]
    fn load_dir_skips_files_not_named_after_a_locale() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/index.js", "define(function () {});");

        let registry = LocaleRegistry::load_dir(temp_dir.path(), &lenient()).unwrap();

        assert_that!(registry.locales(), elements_are![eq(&"de")]);
    }

    #[rstest]
    fn load_dir_rejects_duplicate_locale() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/fr.js", r#"define({"date-now": "à l'instant"});"#);
        write(temp_dir.path(), "i18n/fr.json", r#"{"date-now": "maintenant"}"#);

        let result = LocaleRegistry::load_dir(temp_dir.path(), &lenient());

        assert!(matches!(
            result,
            Err(LocaleError::DuplicateLocale { ref locale, ref path })
                if locale == "fr" && path.ends_with("i18n/fr.json")
        ));
    }

    #[rstest]
    fn load_dir_strict_rejects_incomplete_table() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/fr.js", r#"define({"date-now": "à l'instant"});"#);

        let result = LocaleRegistry::load_dir(temp_dir.path(), &ResourceSettings::default());

        let Err(LocaleError::Invalid { locale, issues }) = result else {
            panic!("expected strict validation to fail");
        };
        assert_eq!(locale, "fr");
        assert_eq!(issues.len(), 27);
    }

    #[rstest]
    fn load_dir_strict_accepts_complete_table() {
        let temp_dir = TempDir::new().unwrap();
        let german = serde_json::to_string(LocaleTable::builtin("de").unwrap().entries()).unwrap();
        write(temp_dir.path(), "i18n/de-CH.json", &german);

        let registry =
            LocaleRegistry::load_dir(temp_dir.path(), &ResourceSettings::default()).unwrap();

        assert_that!(registry.locales(), elements_are![eq(&"de"), eq(&"de-CH")]);
    }

    #[rstest]
    fn load_dir_strict_accepts_single_counted_form() {
        let temp_dir = TempDir::new().unwrap();
        let mut entries = LocaleTable::builtin("de").unwrap().entries().clone();
        entries.insert("comment-hidden".to_string(), "{{ n }} versteckt".to_string());
        write(temp_dir.path(), "i18n/de.json", &serde_json::to_string(&entries).unwrap());

        let registry =
            LocaleRegistry::load_dir(temp_dir.path(), &ResourceSettings::default()).unwrap();

        assert_eq!(registry.lookup("de", "comment-hidden").unwrap(), "{{ n }} versteckt");
    }

    #[rstest]
    fn load_dir_records_sources() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/fr.js", r#"define({"date-now": "à l'instant"});"#);

        let mut registry = LocaleRegistry::load_dir(temp_dir.path(), &lenient()).unwrap();

        assert!(registry.source("fr").unwrap().ends_with("i18n/fr.js"));
        assert!(registry.source("de").is_none());

        registry.insert(LocaleTable::from_entries("fr", [("date-now", "maintenant")]).unwrap());
        assert!(registry.source("fr").is_none());
    }

    #[rstest]
    fn load_dir_propagates_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "i18n/fr.json", "{ not json");

        let result = LocaleRegistry::load_dir(temp_dir.path(), &lenient());

        assert!(matches!(result, Err(LocaleError::Parse(_))));
    }

    #[rstest]
    fn concurrent_readers_see_identical_values() {
        let registry = LocaleRegistry::with_builtin();
        let expected = registry.lookup("de", "date-week").unwrap().to_string();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(registry.lookup("de", "date-week").unwrap(), expected);
                    }
                });
            }
        });
    }
}
