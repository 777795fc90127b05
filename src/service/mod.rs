//! Sketch server services
//!
//! The device exposes two endpoints: one returns the sketch listing, the
//! other deletes a batch of sketches. `SketchService` abstracts both so the
//! gallery and commands can run against the HTTP client or a test double.

mod error;
mod http;
pub mod worker;

pub use error::TransportError;
pub use http::{HttpService, ServerConfig};
pub use worker::{Request, RequestWorker, Response};

use crate::deletion::DeletionRequest;

/// Listing and deletion endpoints of a sketch server.
pub trait SketchService: Send + Sync {
    /// Fetch the raw listing body (`name,descriptor|...`).
    fn fetch_listing(&self) -> Result<String, TransportError>;

    /// Ask the server to delete every sketch named in `request`.
    ///
    /// The response body carries no status and is discarded.
    fn delete(&self, request: &DeletionRequest) -> Result<(), TransportError>;
}

impl<T: SketchService + ?Sized> SketchService for std::sync::Arc<T> {
    fn fetch_listing(&self) -> Result<String, TransportError> {
        (**self).fetch_listing()
    }

    fn delete(&self, request: &DeletionRequest) -> Result<(), TransportError> {
        (**self).delete(request)
    }
}
