//! PNG export of a gallery.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::files::{sanitize, unique_file_name};
use crate::gallery::Gallery;
use crate::render::png::write_png;

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written, in gallery order.
    pub written: Vec<PathBuf>,
    /// Names of sketches that could not be decoded.
    pub skipped: Vec<String>,
}

/// Write every decodable thumbnail of `gallery` to `dir` as
/// `<sanitized name>.png`. Creates `dir` if needed.
pub fn export_gallery(gallery: &Gallery, dir: &Path) -> Result<ExportReport> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut report = ExportReport::default();
    let mut used = HashSet::new();
    for (idx, thumbnail) in gallery.thumbnails().iter().enumerate() {
        let canvas = match (&thumbnail.error, gallery.canvas(idx)) {
            (None, Some(canvas)) => canvas,
            _ => {
                report.skipped.push(thumbnail.name.clone());
                continue;
            }
        };
        let file_name = unique_file_name(&sanitize(&thumbnail.name), "png", &mut used);
        let path = dir.join(file_name);
        write_png(canvas, &path)?;
        tracing::debug!(sketch = %thumbnail.name, path = %path.display(), "exported");
        report.written.push(path);
    }
    Ok(report)
}
