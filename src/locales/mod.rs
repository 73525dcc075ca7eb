//! Locale tables compiled into the crate.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::table::LocaleTable;

mod de;

/// Identifiers of the compiled-in locales.
pub const BUILTIN_LOCALES: &[&str] = &["de"];

static DE: LazyLock<LocaleTable> = LazyLock::new(|| table("de", de::ENTRIES));

fn table(locale: &str, entries: &[(&str, &str)]) -> LocaleTable {
    let map: BTreeMap<String, String> =
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    debug_assert_eq!(map.len(), entries.len(), "duplicate key in built-in locale '{locale}'");
    LocaleTable::from_map(locale, map)
}

/// Returns the compiled-in table for `locale`.
///
/// Identifiers match exactly; `de-AT` does not resolve to `de`.
#[must_use]
pub fn builtin(locale: &str) -> Option<&'static LocaleTable> {
    match locale {
        "de" => Some(&*DE),
        _ => None,
    }
}
