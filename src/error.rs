//! Unified error types for hostwire.
//!
//! This module provides a single error type over the wire crate's decode and
//! encode errors so callers can propagate both with `?`.

use hostwire_wire::{DecodeError, EncodeError};
use thiserror::Error;

/// All hostwire errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Incoming document could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Value could not be encoded
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Result type for hostwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is an encode error.
    pub fn is_encode(&self) -> bool {
        matches!(self, Error::Encode(_))
    }

    /// Canonical kind name of the underlying error.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Decode(e) => e.kind(),
            Error::Encode(EncodeError::OutOfRange { .. }) => "OutOfRange",
            Error::Encode(EncodeError::Serialization(_)) => "Serialization",
        }
    }

    /// Malformed input is never transient; no error here is retryable.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
