//! Integration tests for sketchlist
//!
//! All integration tests are compiled into a single binary.

mod helpers;

mod cli_test;
mod http_test;
mod listing_test;
mod render_test;
