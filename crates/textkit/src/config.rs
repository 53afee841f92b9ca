//! Configuration following the XDG Base Directory specification.
//!
//! The file lives at `$XDG_CONFIG_HOME/textkit/textkit.toml` (or the
//! platform equivalent) and currently only holds wrap defaults:
//!
//! ```toml
//! [wrap]
//! width = 72
//! wrap_long_words = true
//! wrap_on = "[ ,;]"
//! ```

use crate::error::{TextError, TextResult};
use crate::wrap::{DEFAULT_WIDTH, WrapOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name for XDG directories.
const APP_NAME: &str = "textkit";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TextConfig {
    pub wrap: WrapConfig,
}

/// Line wrapping defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WrapConfig {
    /// Maximum number of code points per line.
    pub width: usize,
    /// String inserted at each break. Uses the platform line separator when unset.
    pub new_line: Option<String>,
    /// Split words longer than `width` instead of keeping them whole.
    pub wrap_long_words: bool,
    /// Regular expression matching break positions. A single space when unset.
    pub wrap_on: Option<String>,
}

impl Default for WrapConfig {
    fn default() -> Self {
        WrapConfig {
            width: DEFAULT_WIDTH,
            new_line: None,
            wrap_long_words: false,
            wrap_on: None,
        }
    }
}

impl From<&WrapConfig> for WrapOptions {
    fn from(config: &WrapConfig) -> Self {
        WrapOptions {
            width: config.width,
            new_line: config.new_line.clone(),
            wrap_long_words: config.wrap_long_words,
            wrap_on: config.wrap_on.clone(),
        }
    }
}

/// Get the XDG config directory for this application.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME))
}

/// Get the path to the config file.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("textkit.toml"))
}

/// Load configuration from the default location, or return defaults if not found.
pub fn load_config() -> TextConfig {
    match config_file_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => TextConfig::default(),
    }
}

/// Load configuration from a specific path.
///
/// A missing or malformed file is logged and replaced by the defaults.
pub fn load_config_from_path(path: &Path) -> TextConfig {
    if !path.exists() {
        log::warn!("Config file not found: {:?}", path);
        return TextConfig::default();
    }

    match try_load_config_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}", e);
            TextConfig::default()
        }
    }
}

/// Load configuration from a specific path, failing on any error.
pub fn try_load_config_from_path(path: &Path) -> TextResult<TextConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| TextError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    let config = toml::from_str(&content)
        .map_err(|e| TextError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Generate the default configuration as a TOML string with a comment header.
pub fn generate_default_config() -> TextResult<String> {
    let toml_content = toml::to_string_pretty(&TextConfig::default())
        .map_err(|e| TextError::Config(format!("failed to serialize default config: {}", e)))?;

    let header = "# textkit configuration file\n\
                  #\n\
                  # Unset `new_line` means the platform line separator,\n\
                  # unset `wrap_on` means a single space.\n\n";

    Ok(format!("{}{}", header, toml_content))
}

/// Schema generation for configuration.
pub mod schema {
    use super::TextConfig;
    use crate::error::{TextError, TextResult};
    use schemars::schema_for;

    /// Generate JSON schema for the configuration.
    pub fn generate_schema() -> TextResult<String> {
        let schema = schema_for!(TextConfig);
        serde_json::to_string_pretty(&schema)
            .map_err(|e| TextError::Config(format!("failed to serialize schema: {}", e)))
    }
}
