//! Transport errors for the listing and deletion services.

/// Errors talking to the sketch server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("server returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read response from {url}: {message}")]
    Body { url: String, message: String },

    #[error("request worker has stopped")]
    WorkerGone,
}
