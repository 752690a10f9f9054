//! Application configuration management.
//!
//! Loads persistent defaults (symlink policy, preview target size) from a
//! platform-specific config file the user maintains by hand. CLI flags
//! always win over the file; the file wins over built-in defaults. A
//! missing or unreadable file falls back to defaults silently.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;

/// Default preview target width, in pixels.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 600;

/// Default preview target height, in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 800;

/// Persistent application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Follow symbolic links during directory walks.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Target width for preview rendering.
    #[serde(default = "default_preview_width")]
    pub preview_width: u32,

    /// Target height for preview rendering.
    #[serde(default = "default_preview_height")]
    pub preview_height: u32,
}

fn default_preview_width() -> u32 {
    DEFAULT_PREVIEW_WIDTH
}

fn default_preview_height() -> u32 {
    DEFAULT_PREVIEW_HEIGHT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            preview_width: DEFAULT_PREVIEW_WIDTH,
            preview_height: DEFAULT_PREVIEW_HEIGHT,
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path.
    pub fn load() -> Self {
        match Self::load_internal() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn load_internal() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the default platform-specific configuration path.
    fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "pdfdupe", "pdfdupe")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.json"))
    }
}
