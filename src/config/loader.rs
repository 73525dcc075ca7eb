//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    ResourceSettings,
};

/// Name of the settings file at the root of a resource directory.
pub const CONFIG_FILE_NAME: &str = ".comment-locale.json";

/// リソースディレクトリから設定を読み込む
///
/// `.comment-locale.json` ファイルを探して読み込み、検証する
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みと検証に成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込み、パース、または検証エラー
pub fn load_from_dir(resource_root: &Path) -> Result<Option<ResourceSettings>, ConfigError> {
    let config_path = resource_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: ResourceSettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(Some(settings))
}
