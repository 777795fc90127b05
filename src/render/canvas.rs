//! In-memory RGBA pixel canvas.

use super::surface::{FillRect, Surface};
use crate::palette::Rgb;

/// Default thumbnail edge length in pixels.
pub const THUMBNAIL_SIZE: u32 = 64;

/// Largest accepted thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 4096;

/// Fully opaque RGBA pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelCanvas {
    /// Create a canvas cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; width as usize * height as usize],
        }
    }

    pub fn thumbnail() -> Self {
        Self::new(THUMBNAIL_SIZE, THUMBNAIL_SIZE)
    }

    /// Color at `(x, y)`, or `None` if out of bounds or never painted.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels[self.offset(x, y)];
        (a != 0).then_some(Rgb(r, g, b))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw RGBA bytes, row-major.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// True if every pixel is painted with `color`.
    pub fn is_filled_with(&self, color: Rgb) -> bool {
        let [r, g, b] = [color.0, color.1, color.2];
        self.pixels.iter().all(|&p| p == [r, g, b, 0xFF])
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: FillRect, color: Rgb) {
        // Round both edges so adjacent rects tile without gaps.
        let x0 = clamp_edge(rect.x, self.width);
        let x1 = clamp_edge(rect.x + rect.width, self.width);
        let y0 = clamp_edge(rect.y, self.height);
        let y1 = clamp_edge(rect.y + rect.height, self.height);

        let value = [color.0, color.1, color.2, 0xFF];
        for y in y0..y1 {
            let row = self.offset(0, y);
            self.pixels[row + x0 as usize..row + x1 as usize].fill(value);
        }
    }
}

fn clamp_edge(value: f64, max: u32) -> u32 {
    value.round().clamp(0.0, f64::from(max)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> FillRect {
        FillRect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn new_canvas_is_unpainted() {
        let canvas = PixelCanvas::new(4, 4);
        assert_eq!(canvas.pixel(0, 0), None);
        assert_eq!(canvas.rgba_bytes().len(), 64);
    }

    #[test]
    fn fill_rect_paints_inside_only() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.fill_rect(rect(2.0, 2.0, 2.0, 2.0), Rgb(1, 2, 3));
        assert_eq!(canvas.pixel(2, 2), Some(Rgb(1, 2, 3)));
        assert_eq!(canvas.pixel(3, 3), Some(Rgb(1, 2, 3)));
        assert_eq!(canvas.pixel(4, 4), None);
        assert_eq!(canvas.pixel(1, 2), None);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_rect(rect(-2.0, 3.0, 10.0, 10.0), Rgb(9, 9, 9));
        assert_eq!(canvas.pixel(0, 3), Some(Rgb(9, 9, 9)));
        assert_eq!(canvas.pixel(3, 3), Some(Rgb(9, 9, 9)));
        assert_eq!(canvas.pixel(0, 2), None);
    }

    #[test]
    fn fractional_rects_tile_without_gaps() {
        let mut canvas = PixelCanvas::new(10, 1);
        let step = 10.0 / 3.0;
        for i in 0..3 {
            canvas.fill_rect(rect(step * f64::from(i), 0.0, step, 1.0), Rgb(5, 5, 5));
        }
        assert!(canvas.is_filled_with(Rgb(5, 5, 5)));
    }

    #[test]
    fn wide_canvas_indexes_by_row() {
        let mut canvas = PixelCanvas::new(70_000, 2);
        canvas.fill_rect(rect(69_999.0, 1.0, 1.0, 1.0), Rgb(7, 7, 7));
        assert_eq!(canvas.pixel(69_999, 1), Some(Rgb(7, 7, 7)));
        assert_eq!(canvas.pixel(69_999, 0), None);
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let canvas = PixelCanvas::thumbnail();
        assert_eq!(canvas.pixel(64, 0), None);
        assert_eq!(canvas.pixel(0, 64), None);
    }
}
