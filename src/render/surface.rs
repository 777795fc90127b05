//! Drawable surfaces and the registry that names them.

use std::collections::HashMap;

use crate::palette::Rgb;

/// Axis-aligned rectangle in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2D target the thumbnail renderer can paint on.
///
/// Implementations report their own pixel size; the renderer scales the
/// sprite grid to it.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: FillRect, color: Rgb);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn fill_rect(&mut self, rect: FillRect, color: Rgb) {
        (**self).fill_rect(rect, color);
    }
}

/// Surfaces addressed by string id.
///
/// Callers register surfaces up front and pass the registry to the
/// renderer, which never looks surfaces up anywhere else.
#[derive(Debug)]
pub struct SurfaceRegistry<S> {
    surfaces: HashMap<String, S>,
}

impl<S> Default for SurfaceRegistry<S> {
    fn default() -> Self {
        Self {
            surfaces: HashMap::new(),
        }
    }
}

impl<S: Surface> SurfaceRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `surface` under `id`, returning any surface it replaces.
    pub fn insert(&mut self, id: impl Into<String>, surface: S) -> Option<S> {
        self.surfaces.insert(id.into(), surface)
    }

    pub fn get(&self, id: &str) -> Option<&S> {
        self.surfaces.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut S> {
        self.surfaces.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<S> {
        self.surfaces.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

/// Id of the canvas that shows the sketch named `display_name`.
pub fn canvas_id(display_name: &str) -> String {
    format!("canvas_{}", display_name)
}
