use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::handle::ScrollPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read list config at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse list config: {source}")]
    ConfigParseError {
        #[from]
        source: toml::de::Error,
    },

    #[error("Item height must be a positive number, got {0}")]
    InvalidItemHeight(f32),
}

/// Settings of a reorderable list. Every field has a default so partial TOML files are accepted.
///
/// ```toml
/// item_height = 40.0
/// scroll_policy = "end_while_short"
/// short_list_len = 5
/// normalize_after_reorder = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Fixed height of every row, handed to the widget with the render descriptors
    pub item_height: f32,
    pub scroll_policy: ScrollPolicy,
    /// Upper bound on the list length for [ScrollPolicy::EndWhileShort]
    pub short_list_len: usize,
    /// Renumber positions after every reorder, so malformed mappings can't leave gaps
    pub normalize_after_reorder: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 50.0,
            scroll_policy: ScrollPolicy::default(),
            short_list_len: 5,
            normalize_after_reorder: false,
        }
    }
}

impl ListConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `config_path`. Returns `Ok(None)` if there is no such file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        Self::from_toml_str(&content).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        Ok(())
    }
}
