//! Browse command handler

use std::sync::Arc;

use anyhow::{bail, Result};

use sketchlist::tui::{GalleryApp, TuiApp};
use sketchlist::{Config, ThumbnailRenderer};

/// Open the interactive gallery.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("The gallery needs an interactive terminal; try `sketchlist list`");
    }

    let service = Arc::new(super::connect(config)?);
    let renderer = ThumbnailRenderer::new(config.palette()?);
    let mut app = GalleryApp::new(service, renderer, config.names.clone())?;
    app.run()
}
