//! Text box configuration
//!
//! Read from `~/.config/tagbox/config.yaml` or an explicit YAML file.
//! Every field has a default, so a partial file is fine.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{ValueMode, DEFAULT_WARNING_THRESHOLD};

/// Character limit of the standard compose box
pub const DEFAULT_CHAR_LIMIT: usize = 480;
/// Character limit of the extended (chat) compose box
pub const EXTENDED_CHAR_LIMIT: usize = 10_000;

/// Construction-time settings for a text box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBoxConfig {
    /// Maximum number of chars counted as within the limit
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,

    /// Prefix for generated entity links (empty = relative links)
    #[serde(default)]
    pub base_url: String,

    /// Whether the text box or its host owns the value
    #[serde(default)]
    pub mode: ValueMode,

    /// Remaining-chars count at which the counter turns to a warning
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: i64,

    /// Refuse to submit whitespace-only text
    #[serde(default)]
    pub ignore_blank_submit: bool,
}

fn default_char_limit() -> usize {
    DEFAULT_CHAR_LIMIT
}

fn default_warning_threshold() -> i64 {
    DEFAULT_WARNING_THRESHOLD
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
            base_url: String::new(),
            mode: ValueMode::default(),
            warning_threshold: default_warning_threshold(),
            ignore_blank_submit: false,
        }
    }
}

impl TextBoxConfig {
    /// Defaults with a different character limit
    pub fn with_limit(char_limit: usize) -> Self {
        Self {
            char_limit,
            ..Self::default()
        }
    }

    /// Long-form variant used for chat composers
    pub fn extended() -> Self {
        Self::with_limit(EXTENDED_CHAR_LIMIT)
    }

    /// Set the link base URL (builder pattern)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the value mode (builder pattern)
    pub fn mode(mut self, mode: ValueMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.char_limit > 0, "char_limit must be positive");
        Ok(())
    }

    /// Parse and validate YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("Invalid text box config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In {}", path.display()))
    }

    /// Load from the user config file, or return defaults if it is missing
    /// or broken
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TextBoxConfig::default();
        assert_eq!(config.char_limit, 480);
        assert_eq!(config.base_url, "");
        assert_eq!(config.mode, ValueMode::SelfManaged);
        assert_eq!(config.warning_threshold, 20);
        assert!(!config.ignore_blank_submit);
    }

    #[test]
    fn test_extended_preset() {
        assert_eq!(TextBoxConfig::extended().char_limit, 10_000);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = TextBoxConfig::from_yaml("base_url: https://x.com\n").unwrap();
        assert_eq!(config.base_url, "https://x.com");
        assert_eq!(config.char_limit, DEFAULT_CHAR_LIMIT);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(TextBoxConfig::from_yaml("char_limit: 0\n").is_err());
    }

    #[test]
    fn test_builder() {
        let config = TextBoxConfig::with_limit(140)
            .base_url("https://example.social")
            .mode(ValueMode::External);
        assert_eq!(config.char_limit, 140);
        assert_eq!(config.base_url, "https://example.social");
        assert_eq!(config.mode, ValueMode::External);
    }
}
