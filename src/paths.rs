//! Common paths for Mention data storage
//!
//! All Mention data is stored under ~/.config/mention/ on all platforms:
//! - config.toml - User configuration
//! - mention.sqlite - Snapshot database

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the Mention data directory (~/.config/mention/)
///
/// This is consistent across all platforms for simplicity.
pub fn mention_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let mention_dir = home.join(".config").join("mention");
    fs::create_dir_all(&mention_dir).context("Failed to create mention directory")?;
    Ok(mention_dir)
}

/// Get the config file path (~/.config/mention/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(mention_dir()?.join("config.toml"))
}

/// Get the database file path (~/.config/mention/mention.sqlite)
pub fn database_path() -> Result<PathBuf> {
    Ok(mention_dir()?.join("mention.sqlite"))
}
