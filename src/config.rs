/// Application settings
///
/// Settings live in a `settings.toml` file in the user's config directory:
/// - Linux: ~/.config/photo-feed/settings.toml
/// - macOS: ~/Library/Application Support/photo-feed/settings.toml
/// - Windows: %APPDATA%\photo-feed\settings.toml
///
/// A missing file or invalid TOML falls back to the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const APP_DIR: &str = "photo-feed";
const CONFIG_FILE: &str = "settings.toml";

/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "Buildbox Web Challenge";

/// Default edge length (pixels) of stored photo thumbnails
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 512;

/// Default tracing filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info,photo_feed=debug";

/// Where posts are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite catalog plus photo thumbnails on disk
    #[default]
    Sqlite,
    /// Process memory only, gone when the window closes
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_title: String,
    pub storage: StorageBackend,
    /// Overrides the platform data directory for the database and photos
    pub data_dir: Option<PathBuf>,
    pub thumbnail_size: u32,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            storage: StorageBackend::default(),
            data_dir: None,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Directory holding `posts.db` and the `photos/` folder
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|path| path.join(APP_DIR))
            .ok_or_else(|| Error::Config("could not determine user data directory".to_string()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from the default location
pub fn load() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
