//! PNG export of rendered thumbnails.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::canvas::PixelCanvas;
use super::surface::Surface;

/// Encode `canvas` as an 8-bit RGBA PNG into `writer`.
pub fn encode_png<W: Write>(canvas: &PixelCanvas, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.rgba_bytes())?;
    Ok(())
}

/// Save `canvas` as a PNG file at `path`.
pub fn write_png(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    encode_png(canvas, BufWriter::new(file))
        .with_context(|| format!("Failed to write PNG {}", path.display()))
}
