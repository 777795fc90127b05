//! Command handlers
//!
//! Each submodule handles one CLI command. Shared setup (config loading,
//! fetching and rendering the listing) lives here.

pub mod browse;
pub mod completions;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use sketchlist::service::HttpService;
use sketchlist::{parse_listing, Config, Gallery, SketchService, ThumbnailRenderer};

/// The config file to use: `--config` if given, else the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Load the config and apply the `--server` override.
pub fn load_config(path: &Path, server: Option<&str>) -> Result<Config> {
    let mut config = Config::load_from(path)?;
    if let Some(url) = server {
        tracing::debug!(url, "server overridden from command line");
        config.server.url = url.to_string();
    }
    Ok(config)
}

/// HTTP client for the configured server.
pub fn connect(config: &Config) -> Result<HttpService> {
    HttpService::new(config.server.clone()).context("Cannot use the configured server")
}

/// Fetch the listing and render every sketch onto a `size` x `size` canvas.
pub fn fetch_gallery(config: &Config, size: u32) -> Result<Gallery> {
    let service = connect(config)?;
    let body = service
        .fetch_listing()
        .context("Failed to fetch the sketch list")?;
    let listing = parse_listing(&body);
    let renderer = ThumbnailRenderer::new(config.palette()?);
    Ok(Gallery::from_listing(&listing, &renderer, &config.names, size))
}
