//! Immutable key→text table for one locale.
//!
//! # Invariants
//!
//! 1. **Unique keys**: construction rejects a repeated key instead of
//!    keeping either value.
//! 2. **Read-only**: no method takes `&mut self`; a table is shared as-is
//!    between threads (`Send + Sync`).
//! 3. **Raw values**: lookups return the stored text byte-for-byte. The
//!    `{{ n }}` placeholder is never substituted and no plural form is
//!    chosen here.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;

use crate::error::LocaleError;
use crate::key::WidgetKey;
use crate::locales;
use crate::plural::PluralForms;
use crate::validate::{
    self,
    ValidationIssue,
};

/// Localized strings of one locale, keyed by widget key.
///
/// # Example
///
/// ```
/// use comment_locale::LocaleTable;
///
/// let table = LocaleTable::from_entries("de", [
///     ("postbox-submit", "Abschicken"),
///     ("date-day", "Gestern\nvor {{ n }} Tagen"),
/// ])
/// .unwrap();
///
/// assert_eq!(table.get("postbox-submit").unwrap(), "Abschicken");
/// assert_eq!(table.forms("date-day").unwrap().plural, Some("vor {{ n }} Tagen"));
/// assert!(table.get("postbox-cancel").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleTable {
    locale: String,
    entries: BTreeMap<String, String>,
}

impl LocaleTable {
    /// Builds a table from `(key, value)` pairs.
    ///
    /// # Errors
    /// [`LocaleError::DuplicateEntry`] if a key repeats.
    pub fn from_entries<I, K, V>(locale: impl Into<String>, entries: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            match map.entry(key.into()) {
                Entry::Occupied(occupied) => {
                    return Err(LocaleError::DuplicateEntry(occupied.key().clone()));
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(value.into());
                }
            }
        }
        Ok(Self { locale: locale.into(), entries: map })
    }

    /// Builds a table from a map whose keys are already unique.
    pub(crate) fn from_map(locale: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
        Self { locale: locale.into(), entries }
    }

    /// The compiled-in table for `locale`, if there is one.
    #[must_use]
    pub fn builtin(locale: &str) -> Option<&'static Self> {
        locales::builtin(locale)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the raw value for `key`.
    ///
    /// # Errors
    /// [`LocaleError::KeyNotFound`] if the table has no such key.
    pub fn get(&self, key: &str) -> Result<&str, LocaleError> {
        self.entries.get(key).map(String::as_str).ok_or_else(|| LocaleError::KeyNotFound {
            locale: self.locale.clone(),
            key: key.to_string(),
        })
    }

    /// Returns the raw value for a vocabulary key.
    ///
    /// # Errors
    /// [`LocaleError::KeyNotFound`] if the table lacks the key.
    pub fn text(&self, key: WidgetKey) -> Result<&str, LocaleError> {
        self.get(key.as_str())
    }

    /// Returns the value for `key` split into its plural forms.
    ///
    /// # Errors
    /// [`LocaleError::KeyNotFound`] if the table has no such key.
    pub fn forms(&self, key: &str) -> Result<PluralForms<'_>, LocaleError> {
        self.get(key).map(PluralForms::split)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Checks the table against the widget vocabulary.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate::validate_entries(&self.entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn sample() -> LocaleTable {
        LocaleTable::from_entries(
            "de",
            [
                ("postbox-submit", "Abschicken"),
                ("num-comments", "1 Kommentar\n{{ n }} Kommentare"),
            ],
        )
        .unwrap()
    }

    #[rstest]
    fn get_returns_raw_value() {
        let table = sample();

        assert_eq!(table.get("num-comments").unwrap(), "1 Kommentar\n{{ n }} Kommentare");
        assert_eq!(table.text(WidgetKey::PostboxSubmit).unwrap(), "Abschicken");
    }

    #[rstest]
    fn get_unknown_key_fails() {
        let table = sample();

        let err = table.get("postbox-preview").unwrap_err();
        assert!(matches!(
            err,
            LocaleError::KeyNotFound { ref locale, ref key } if locale == "de" && key == "postbox-preview"
        ));
    }

    #[rstest]
    fn from_entries_rejects_duplicates() {
        let result = LocaleTable::from_entries("de", [("date-now", "eben"), ("date-now", "jetzt")]);

        let err = result.unwrap_err();
        assert!(matches!(err, LocaleError::DuplicateEntry(ref key) if key == "date-now"));
        assert_eq!(err.to_string(), "Duplicate key 'date-now'");
    }

    #[rstest]
    fn forms_splits_value() {
        let table = sample();

        let forms = table.forms("num-comments").unwrap();
        assert_eq!(forms.singular, "1 Kommentar");
        assert_eq!(forms.plural, Some("{{ n }} Kommentare"));
        assert_eq!(table.forms("postbox-submit").unwrap().plural, None);
    }

    #[rstest]
    fn keys_are_sorted() {
        let table = sample();

        assert_eq!(table.keys().collect::<Vec<_>>(), ["num-comments", "postbox-submit"]);
        assert_that!(table.len(), eq(2));
        assert!(!table.is_empty());
        assert!(table.contains("num-comments"));
        assert!(!table.contains("Num-Comments"));
    }

    #[rstest]
    fn serializes_locale_and_entries() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["locale"], "de");
        assert_eq!(json["entries"]["postbox-submit"], "Abschicken");
    }

    #[rstest]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocaleTable>();
    }
}
