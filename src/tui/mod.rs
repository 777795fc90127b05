//! Terminal gallery browser
//!
//! Built on ratatui/crossterm. `App` owns the terminal, `GalleryApp` is the
//! interactive sketch browser on top of it.

pub mod app;
pub mod gallery_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, TuiApp};
pub use gallery_app::{GalleryApp, GalleryState};
