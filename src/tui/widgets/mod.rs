//! TUI widgets for the sketch gallery.

pub mod thumbnail_grid;

pub use thumbnail_grid::{card_title, grid_columns, grid_rows, render_grid, PREVIEW_SIZE};
