//! Descriptor decoding errors.

/// Errors that can occur while decoding a sketch descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("descriptor too short: expected {expected} cells, found {found}")]
    TooShort { expected: usize, found: usize },

    #[error("invalid cell {found:?} at position {position} (expected 'A'..='P')")]
    InvalidCell { position: usize, found: char },
}
