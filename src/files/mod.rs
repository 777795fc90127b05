//! File naming helpers.

pub mod sanitize;

pub use sanitize::{sanitize, unique_file_name};
