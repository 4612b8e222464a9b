//! JSON wire encoding for hostwire values
//!
//! Every contract type implements [`ToWire`] and [`FromWire`], which map it to
//! and from a `serde_json::Value` tree. The text entry points
//! [`encode_json`] and [`decode_json`] wrap those with printing and parsing.
//!
//! - binary payloads are standard base64 strings
//! - collections are always arrays, never `null`
//! - tagged unions are objects with exactly one snake_case key
//! - absent optional fields are omitted; `null` is reserved for fields the
//!   contract declares nullable (e.g. `next_key`)

mod binary;
mod decode;
mod dispatch;
mod encode;
mod error;
mod range;
mod record;
mod result;

use serde_json::Value;
use tracing::{debug, trace};

pub use binary::{decode_binary, encode_binary};
pub use decode::{kind_of, Fields, Presence};
pub use error::{DecodeError, EncodeError};

/// Default cap on decode input size (16 MiB)
pub const DEFAULT_MAX_INPUT_LEN: usize = 16 * 1024 * 1024;

/// Map a value to its JSON tree
pub trait ToWire {
    /// Build the JSON representation
    fn to_wire(&self) -> Result<Value, EncodeError>;
}

/// Build a value from its JSON tree
pub trait FromWire: Sized {
    /// Decode from a parsed JSON value
    ///
    /// Error paths are relative to `value`.
    fn from_wire(value: &Value) -> Result<Self, DecodeError>;
}

/// Encode a value to JSON text
///
/// Keys are emitted in contract order with no insignificant whitespace.
pub fn encode_json<T: ToWire + ?Sized>(value: &T) -> Result<String, EncodeError> {
    let tree = value.to_wire()?;
    serde_json::to_string(&tree).map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Decode JSON text using the default size limit
pub fn decode_json<T: FromWire>(json: &str) -> Result<T, DecodeError> {
    decode_json_with_limit(json, DEFAULT_MAX_INPUT_LEN)
}

/// Decode JSON text, rejecting inputs longer than `max_len` bytes
pub fn decode_json_with_limit<T: FromWire>(json: &str, max_len: usize) -> Result<T, DecodeError> {
    trace!(len = json.len(), max_len, "decoding wire document");

    if json.len() > max_len {
        let err = DecodeError::InputTooLarge {
            len: json.len(),
            limit: max_len,
        };
        debug!(error = %err, "rejecting wire document");
        return Err(err);
    }

    let tree: Value = serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "wire document is not valid JSON");
        DecodeError::InvalidJson(e.to_string())
    })?;

    T::from_wire(&tree).map_err(|err| {
        debug!(kind = err.kind(), error = %err, "wire document failed to decode");
        err
    })
}
