//! Checks a locale table against the widget vocabulary and the plural convention.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::key::WidgetKey;
use crate::plural::{
    self,
    PluralForms,
};

/// What is wrong with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    MissingKey,
    UnknownKey,
    EmptyValue,
    /// Plural-capable key whose value is not exactly two forms.
    ExpectedPluralForms,
    /// Plural-capable key with one form carrying `{{ n }}`, used for every
    /// count. Not an error.
    SinglePluralForm,
    /// Single-form key whose value contains a form separator.
    UnexpectedPluralForms,
    EmptyForm,
    MissingPlaceholder,
    UnexpectedPlaceholder,
}

impl IssueKind {
    /// Whether the issue makes the entry unusable. Strict loading only
    /// rejects tables with errors.
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::SinglePluralForm)
    }

    const fn message(self) -> &'static str {
        match self {
            Self::MissingKey => "key is missing",
            Self::UnknownKey => "key is not used by the widget",
            Self::EmptyValue => "value is empty",
            Self::ExpectedPluralForms => {
                "expected singular and plural forms separated by exactly one newline"
            }
            Self::SinglePluralForm => "single form is used for every count",
            Self::UnexpectedPluralForms => "value must not contain a newline",
            Self::EmptyForm => "singular and plural forms must not be empty",
            Self::MissingPlaceholder => "plural form must contain '{{ n }}'",
            Self::UnexpectedPlaceholder => "'{{ n }}' is only allowed in plural forms",
        }
    }
}

/// One problem found in a locale table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{key} - {}", .kind.message())]
pub struct ValidationIssue {
    pub key: String,
    pub kind: IssueKind,
}

impl ValidationIssue {
    fn new(key: impl Into<String>, kind: IssueKind) -> Self {
        Self { key: key.into(), kind }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

/// Validates `entries`, returning issues sorted by key.
#[must_use]
pub fn validate_entries(entries: &BTreeMap<String, String>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for key in WidgetKey::ALL {
        if !entries.contains_key(key.as_str()) {
            issues.push(ValidationIssue::new(key.as_str(), IssueKind::MissingKey));
        }
    }

    for (key, value) in entries {
        let Ok(widget_key) = key.parse::<WidgetKey>() else {
            issues.push(ValidationIssue::new(key, IssueKind::UnknownKey));
            continue;
        };
        if let Some(kind) = check_value(widget_key, value) {
            issues.push(ValidationIssue::new(key, kind));
        }
    }

    issues.sort_by(|a, b| a.key.cmp(&b.key));
    issues
}

fn check_value(key: WidgetKey, value: &str) -> Option<IssueKind> {
    if value.is_empty() {
        return Some(IssueKind::EmptyValue);
    }

    if !key.is_plural() {
        if plural::form_count(value) != 1 {
            return Some(IssueKind::UnexpectedPluralForms);
        }
        if plural::has_placeholder(value) {
            return Some(IssueKind::UnexpectedPlaceholder);
        }
        return None;
    }

    match plural::form_count(value) {
        2 => {}
        1 if plural::has_placeholder(value) => return Some(IssueKind::SinglePluralForm),
        _ => return Some(IssueKind::ExpectedPluralForms),
    }
    let forms = PluralForms::split(value);
    let plural_form = forms.plural.unwrap_or_default();
    if forms.singular.is_empty() || plural_form.is_empty() {
        return Some(IssueKind::EmptyForm);
    }
    if !plural::has_placeholder(plural_form) {
        return Some(IssueKind::MissingPlaceholder);
    }
    None
}
