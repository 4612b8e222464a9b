//! `QueryResult` wire encoding
//!
//! `{"ok": "<base64>"}` or `{"error": "<message>"}`. An empty error message
//! does not count as a failure.

use super::decode::{Fields, Presence};
use super::encode::tagged;
use super::error::{DecodeError, EncodeError};
use super::{FromWire, ToWire};
use hostwire_core::{Binary, QueryResult};
use serde_json::Value;

impl ToWire for QueryResult {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        match self {
            QueryResult::Err(msg) if !msg.is_empty() => Ok(tagged("error", msg.to_wire()?)),
            QueryResult::Err(_) => Ok(tagged("ok", Binary::empty().to_wire()?)),
            QueryResult::Ok(payload) => Ok(tagged("ok", payload.to_wire()?)),
        }
    }
}

impl FromWire for QueryResult {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let fields = Fields::of(value)?;
        let absent = |key| fields.presence(key) == Presence::Absent;
        if absent("error") && absent("ok") {
            return Err(DecodeError::UnrecognizedVariant {
                field: String::new(),
                expected: "ok | error",
            });
        }
        let err = fields.optional::<String>("error")?;
        if let Some(msg) = err.filter(|msg| !msg.is_empty()) {
            return Ok(QueryResult::Err(msg));
        }
        // A present key holding `null` is the "no data" success state
        let payload = fields.optional::<Binary>("ok")?;
        Ok(QueryResult::from_parts(payload, None))
    }
}
