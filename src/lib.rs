//! comment-locale
//!
//! コメントウィジェット向けのロケールリソーステーブル

pub mod config;
pub mod error;
pub mod input;
pub mod key;
pub mod locales;
pub mod plural;
pub mod registry;
pub mod table;
pub mod types;
pub mod validate;

pub use error::LocaleError;
pub use key::WidgetKey;
pub use plural::{
    PLACEHOLDER,
    PluralForms,
};
pub use registry::LocaleRegistry;
pub use table::LocaleTable;
pub use validate::{
    IssueKind,
    ValidationIssue,
};
