//! Configured codec entry point.
//!
//! This module provides the `Codec` struct, which carries decode limits and
//! exposes typed encode/decode over the wire crate.

use crate::error::Result;
use hostwire_wire::{FromWire, ToWire, DEFAULT_MAX_INPUT_LEN};
use tracing::debug;

/// Codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Decode inputs longer than this many bytes are rejected before parsing
    pub max_input_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// The hostwire codec.
///
/// Stateless apart from its configuration; share one instance freely across
/// threads.
///
/// # Example
///
/// ```
/// use hostwire::prelude::*;
///
/// let codec = Codec::builder().max_input_len(4096).build();
///
/// let json = codec.encode(&RawRangeResponse::default())?;
/// assert_eq!(json, r#"{"data":[],"next_key":null}"#);
///
/// let query: Option<WasmQuery> = codec.decode(r#"{"code_info":{"code_id":70}}"#)?;
/// assert_eq!(query, Some(WasmQuery::CodeInfo { code_id: 70 }));
/// # Ok::<(), hostwire::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for codec configuration.
    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    /// Get the active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a value to JSON text.
    pub fn encode<T: ToWire + ?Sized>(&self, value: &T) -> Result<String> {
        hostwire_wire::encode_json(value).map_err(Into::into)
    }

    /// Decode JSON text into a value.
    pub fn decode<T: FromWire>(&self, json: &str) -> Result<T> {
        hostwire_wire::decode_json_with_limit(json, self.config.max_input_len).map_err(Into::into)
    }

    /// Decode JSON bytes as received across the call boundary.
    ///
    /// Bytes that are not UTF-8 are reported as invalid JSON.
    pub fn decode_slice<T: FromWire>(&self, bytes: &[u8]) -> Result<T> {
        let json = std::str::from_utf8(bytes).map_err(|e| {
            debug!(error = %e, "wire document is not UTF-8");
            hostwire_wire::DecodeError::InvalidJson(e.to_string())
        })?;
        self.decode(json)
    }
}

/// Builder for codec configuration.
///
/// # Example
///
/// ```
/// use hostwire::Codec;
///
/// let codec = Codec::builder().max_input_len(1 << 20).build();
/// assert_eq!(codec.config().max_input_len, 1 << 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
}

impl CodecBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted decode input size in bytes.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.config.max_input_len = len;
        self
    }

    /// Build the codec.
    pub fn build(self) -> Codec {
        Codec {
            config: self.config,
        }
    }
}
