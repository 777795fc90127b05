//! Thumbnail renderer: paints decoded sketches onto surfaces.

use super::surface::{FillRect, Surface, SurfaceRegistry};
use crate::palette::Palette;
use crate::sketch::{scan_order, DecodeError, Descriptor, GRID_HEIGHT, GRID_WIDTH};

/// Errors from rendering into a registered surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no surface registered with id '{0}'")]
    UnknownSurface(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Paints 16x16 sketches scaled to the target surface.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailRenderer {
    palette: Palette,
}

impl ThumbnailRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Decode `data` and paint it onto `surface`.
    ///
    /// The whole descriptor is decoded first; on error the surface is left
    /// untouched.
    pub fn render<S: Surface + ?Sized>(
        &self,
        data: &str,
        surface: &mut S,
    ) -> Result<(), DecodeError> {
        let descriptor = Descriptor::decode(data)?;
        self.paint(&descriptor, surface);
        Ok(())
    }

    /// Paint an already decoded sketch: one filled rect per cell.
    pub fn paint<S: Surface + ?Sized>(&self, descriptor: &Descriptor, surface: &mut S) {
        let cell_width = f64::from(surface.width()) / GRID_WIDTH as f64;
        let cell_height = f64::from(surface.height()) / GRID_HEIGHT as f64;

        for (&index, (column, row)) in descriptor
            .cells()
            .iter()
            .zip(scan_order(GRID_WIDTH, GRID_HEIGHT))
        {
            let rect = FillRect {
                x: cell_width * column as f64,
                y: cell_height * row as f64,
                width: cell_width,
                height: cell_height,
            };
            surface.fill_rect(rect, self.palette[index]);
        }
    }

    /// Render into the surface registered under `id`.
    pub fn render_into<S: Surface>(
        &self,
        registry: &mut SurfaceRegistry<S>,
        id: &str,
        data: &str,
    ) -> Result<(), RenderError> {
        let descriptor = Descriptor::decode(data)?;
        self.paint_into(registry, id, &descriptor)
    }

    /// Paint a decoded sketch into the surface registered under `id`.
    pub fn paint_into<S: Surface>(
        &self,
        registry: &mut SurfaceRegistry<S>,
        id: &str,
        descriptor: &Descriptor,
    ) -> Result<(), RenderError> {
        let surface = registry
            .get_mut(id)
            .ok_or_else(|| RenderError::UnknownSurface(id.to_string()))?;
        self.paint(descriptor, surface);
        Ok(())
    }
}
