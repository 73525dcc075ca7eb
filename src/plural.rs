//! Newline-delimited singular/plural values.
//!
//! A plural-capable value is two forms joined by a single `\n`: the
//! singular first, then the plural, which carries [`PLACEHOLDER`]. Picking
//! a form for a count and substituting the placeholder is left to the
//! renderer.

/// Token the renderer replaces with the count.
pub const PLACEHOLDER: &str = "{{ n }}";

/// Separates the singular form from the plural form.
pub const FORM_SEPARATOR: char = '\n';

/// A value viewed as its plural forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms<'a> {
    pub singular: &'a str,
    /// `None` for single-form values.
    pub plural: Option<&'a str>,
}

impl<'a> PluralForms<'a> {
    /// Splits at the first separator.
    ///
    /// Anything after a second separator stays in the plural form; use
    /// [`form_count`] to detect such values.
    #[must_use]
    pub fn split(value: &'a str) -> Self {
        match value.split_once(FORM_SEPARATOR) {
            Some((singular, plural)) => Self { singular, plural: Some(plural) },
            None => Self { singular: value, plural: None },
        }
    }

    #[must_use]
    pub const fn is_plural(&self) -> bool {
        self.plural.is_some()
    }
}

/// Number of forms encoded in `value`.
#[must_use]
pub fn form_count(value: &str) -> usize {
    value.matches(FORM_SEPARATOR).count() + 1
}

/// Returns true if `form` carries the count placeholder.
#[must_use]
pub fn has_placeholder(form: &str) -> bool {
    form.contains(PLACEHOLDER)
}
