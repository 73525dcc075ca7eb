//! Locale resource file reader.
//!
//! A resource is a flat JSON object of string values, either bare or
//! wrapped as an AMD module (`define({...});`) the way the widget ships
//! its translations.

use std::borrow::Cow;
use std::collections::{
    BTreeMap,
    HashSet,
};
use std::path::Path;

use serde_json::Value;

use crate::error::LocaleError;
use crate::table::LocaleTable;
use crate::types::SourceRange;

const MODULE_PREFIX: &str = "define(";

/// Replaces the AMD wrapper with blanks so positions in the object stay
/// those of the original text.
fn strip_module_wrapper(text: &str) -> Result<Cow<'_, str>, LocaleError> {
    let head = text.trim_start();
    if !head.starts_with(MODULE_PREFIX) {
        return Ok(Cow::Borrowed(text));
    }
    let body_start = text.len() - head.len() + MODULE_PREFIX.len();

    let tail = text.trim_end();
    let tail = tail.strip_suffix(';').unwrap_or(tail).trim_end();
    let Some(body) = tail.strip_suffix(')') else {
        return Err(LocaleError::Malformed("`define(` is never closed".to_string()));
    };
    let body_end = body.len();

    let (Some(prefix), Some(inner), Some(suffix)) =
        (text.get(..body_start), text.get(body_start..body_end), text.get(body_end..))
    else {
        return Err(LocaleError::Malformed("malformed `define()` module".to_string()));
    };

    let mut masked = String::with_capacity(text.len());
    masked.extend(prefix.chars().map(blank));
    masked.push_str(inner);
    masked.extend(suffix.chars().map(blank));
    Ok(Cow::Owned(masked))
}

const fn blank(c: char) -> char {
    if c == '\n' { c } else { ' ' }
}

/// Parses resource text into a table for `locale`.
///
/// # Examples
/// ```
/// use comment_locale::input::resource::parse_resource;
///
/// let table = parse_resource("de", r#"define({
///     "postbox-submit": "Abschicken"
/// });"#).unwrap();
///
/// assert_eq!(table.get("postbox-submit").unwrap(), "Abschicken");
/// ```
///
/// # Errors
/// - [`LocaleError::Parse`] if the object is not valid JSON
/// - [`LocaleError::Malformed`] if the root is not an object or the
///   module wrapper is broken
/// - [`LocaleError::NonStringValue`] for nested or non-string values
/// - [`LocaleError::DuplicateKey`] if a key occurs twice
pub fn parse_resource(locale: impl Into<String>, text: &str) -> Result<LocaleTable, LocaleError> {
    let source = strip_module_wrapper(text)?;

    let Value::Object(object) = serde_json::from_str::<Value>(&source)? else {
        return Err(LocaleError::Malformed("expected an object of strings".to_string()));
    };

    // serde_json keeps the last of two equal keys, so duplicates are
    // found on the syntax tree instead.
    let mut seen = HashSet::new();
    for (key, range) in collect_key_ranges(&source) {
        if !seen.insert(key.clone()) {
            return Err(LocaleError::DuplicateKey { key, range });
        }
    }

    let mut entries = BTreeMap::new();
    for (key, value) in object {
        let Value::String(text) = value else {
            return Err(LocaleError::NonStringValue { key });
        };
        entries.insert(key, text);
    }

    Ok(LocaleTable::from_map(locale, entries))
}

/// Source range of every key in the resource, in file order.
///
/// Repeated keys are listed once per occurrence.
///
/// # Errors
/// [`LocaleError::Malformed`] if the module wrapper is broken.
pub fn key_ranges(text: &str) -> Result<Vec<(String, SourceRange)>, LocaleError> {
    let source = strip_module_wrapper(text)?;
    Ok(collect_key_ranges(&source))
}

fn collect_key_ranges(source: &str) -> Vec<(String, SourceRange)> {
    let mut ranges = Vec::new();

    let mut parser = tree_sitter::Parser::new();
    let Ok(()) = parser.set_language(&tree_sitter_json::LANGUAGE.into()) else {
        tracing::warn!("Failed to set tree-sitter-json language");
        return ranges;
    };

    let Some(tree) = parser.parse(source, None) else {
        tracing::warn!("Failed to parse locale resource with tree-sitter");
        return ranges;
    };

    let root = tree.root_node();
    let mut cursor = root.walk();
    for object in root.named_children(&mut cursor).filter(|node| node.kind() == "object") {
        let mut pair_cursor = object.walk();
        for pair in object.named_children(&mut pair_cursor).filter(|node| node.kind() == "pair") {
            let Some(key_node) = pair.child_by_field_name("key") else {
                continue;
            };
            let Ok(raw) = key_node.utf8_text(source.as_bytes()) else {
                tracing::warn!("Failed to get key text from node");
                continue;
            };
            let key = serde_json::from_str::<String>(raw)
                .unwrap_or_else(|_| raw.trim_matches('"').to_string());
            ranges.push((key, SourceRange::from_node(&key_node)));
        }
    }

    ranges
}

/// Returns true for tags shaped like `de`, `pt-BR`, `zh_Hant_TW`.
#[must_use]
pub fn is_locale_tag(tag: &str) -> bool {
    let mut subtags = tag.split(['-', '_']);
    let Some(language) = subtags.next() else {
        return false;
    };
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    subtags.all(|s| (2..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Locale identifier of a resource file: its file stem.
///
/// # Errors
/// [`LocaleError::InvalidLocale`] if the stem is not a locale tag.
pub fn locale_from_path(file_path: &Path) -> Result<String, LocaleError> {
    let stem = file_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
    if is_locale_tag(&stem) { Ok(stem) } else { Err(LocaleError::InvalidLocale(stem)) }
}

/// Reads a resource file and returns the source range of every key.
///
/// # Errors
/// Returns error if the file cannot be read or the module wrapper is broken.
pub fn load_key_ranges(file_path: &Path) -> Result<Vec<(String, SourceRange)>, LocaleError> {
    key_ranges(&read_resource_text(file_path)?)
}

fn read_resource_text(file_path: &Path) -> Result<String, LocaleError> {
    let content = std::fs::read_to_string(file_path)?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Loads a resource file, naming the table after the file stem.
///
/// # Errors
/// Returns error if the file cannot be read, is not named after a locale,
/// or does not parse.
pub fn load_resource_file(file_path: &Path) -> Result<LocaleTable, LocaleError> {
    let locale = locale_from_path(file_path)?;
    tracing::debug!(path = %file_path.display(), %locale, "Loading locale resource");

    let content = read_resource_text(file_path)?;
    parse_resource(locale, &content)
}
