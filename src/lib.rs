//! sketchlist - browse and manage the sketches stored on a pixel-art device
//!
//! The device lists its 16x16 sketches as `name,descriptor|...` and deletes
//! them via `delete.html?sketchlist=a,b,`. This crate decodes descriptors,
//! renders thumbnails onto drawable surfaces, and drives the listing and
//! deletion requests from a CLI and an interactive terminal gallery.

pub mod cli;
pub mod config;
pub mod deletion;
pub mod export;
pub mod files;
pub mod gallery;
pub mod listing;
pub mod logging;
pub mod palette;
pub mod render;
pub mod service;
pub mod sketch;
pub mod tui;

pub use config::Config;
pub use deletion::DeletionRequest;
pub use gallery::{Gallery, Thumbnail};
pub use listing::{parse_listing, Listing, ListingEntry, MalformedEntry, NameRules};
pub use palette::{Palette, Rgb};
pub use render::{PixelCanvas, RenderError, Surface, SurfaceRegistry, ThumbnailRenderer};
pub use service::{HttpService, SketchService, TransportError};
pub use sketch::{DecodeError, Descriptor};
pub use tui::theme;
