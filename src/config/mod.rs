//! `.comment-locale.json` settings.
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
};
pub use types::{
    ConfigError,
    ResourceFilesConfig,
    ResourceSettings,
    ValidationError,
};
