//! Thumbnail rendering
//!
//! - `surface`: the `Surface` trait and the id-keyed `SurfaceRegistry`
//! - `renderer`: `ThumbnailRenderer`, which scales the 16x16 sprite onto a surface
//! - `canvas`: RGBA pixel buffer surface
//! - `halfblock`: canvas to terminal cells (ratatui lines or ANSI text)
//! - `png`: canvas to PNG file

mod canvas;
pub mod halfblock;
pub mod png;
mod renderer;
mod surface;

pub use canvas::{PixelCanvas, MAX_THUMBNAIL_SIZE, THUMBNAIL_SIZE};
pub use renderer::{RenderError, ThumbnailRenderer};
pub use surface::{canvas_id, FillRect, Surface, SurfaceRegistry};
