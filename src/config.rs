//! Configuration file handling
//!
//! Settings live in `<config dir>/sketchlist/config.toml`. Every field has a
//! default, so a partial (or missing) file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::listing::NameRules;
use crate::palette::Palette;
use crate::render::{MAX_THUMBNAIL_SIZE, THUMBNAIL_SIZE};
use crate::service::ServerConfig;

/// Directory name under the platform config/cache dirs.
pub const APP_DIR: &str = "sketchlist";

const CONFIG_FILE: &str = "config.toml";

/// Thumbnail rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Edge length of exported thumbnails in pixels.
    pub size: u32,
    /// Sixteen `#RRGGBB` colors, indexed by descriptor characters `A`..`P`.
    pub palette: Vec<String>,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: THUMBNAIL_SIZE,
            palette: Palette::pico8().to_hex(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub names: NameRules,
    pub thumbnail: ThumbnailConfig,
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured palette.
    pub fn palette(&self) -> Result<Palette> {
        Palette::from_hex(&self.thumbnail.palette).context("Invalid thumbnail palette")
    }

    fn validate(&self) -> Result<()> {
        self.palette()?;
        if !(1..=MAX_THUMBNAIL_SIZE).contains(&self.thumbnail.size) {
            bail!(
                "thumbnail.size must be between 1 and {}, got {}",
                MAX_THUMBNAIL_SIZE,
                self.thumbnail.size
            );
        }
        Ok(())
    }
}
