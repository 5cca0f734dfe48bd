//! Configuration module for Mention

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme
    #[serde(default)]
    pub theme: Theme,

    /// Base URL of the Mention API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Whether this account has premium access (unlocks advanced search
    /// facets)
    #[serde(default)]
    pub premium: bool,

    /// Number of posts to keep in the feed view
    #[serde(default = "default_post_limit")]
    pub post_limit: usize,

    /// Whether to show the navigation sidebar
    #[serde(default = "default_show_sidebar")]
    pub show_sidebar: bool,
}

fn default_api_url() -> String {
    "https://api.mention.earth".to_string()
}

fn default_post_limit() -> usize {
    50
}

fn default_show_sidebar() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            api_url: default_api_url(),
            premium: false,
            post_limit: default_post_limit(),
            show_sidebar: default_show_sidebar(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_non_premium() {
        let config = Config::default();
        assert!(!config.premium);
        assert_eq!(config.api_url, "https://api.mention.earth");
        assert_eq!(config.post_limit, 50);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.premium = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.premium);
        assert_eq!(loaded.api_url, config.api_url);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(!config.premium);
    }
}
