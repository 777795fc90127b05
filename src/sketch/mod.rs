//! Sketch descriptors
//!
//! A sketch is a 16x16 sprite stored as 256 characters. Each character is a
//! palette index offset by `'A'`, listed in serpentine scan order (see
//! [`scan`]).

mod descriptor;
mod error;
pub mod scan;

pub use descriptor::Descriptor;
pub use error::DecodeError;
pub use scan::{scan_index, scan_order, ScanOrder};

/// Sprite width in cells.
pub const GRID_WIDTH: usize = 16;
/// Sprite height in cells.
pub const GRID_HEIGHT: usize = 16;
/// Cells per descriptor.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;
/// Character that encodes palette index 0.
pub const PALETTE_BASE: u8 = b'A';
