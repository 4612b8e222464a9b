//! Structural decoding helpers
//!
//! Decoding is strict about kinds: a string field never accepts a number, a
//! boolean never accepts `"true"`, an integer never accepts `1.0`.

use super::error::DecodeError;
use super::FromWire;
use hostwire_core::Array;
use serde_json::{Map, Value};

/// JSON kind name used in error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// State of a key in an object
///
/// Omitted, `null` and a present value are three different things on the
/// wire and are kept apart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    /// Key not in the object
    Absent,
    /// Key present with `null`
    Null,
    /// Key present with a non-null value
    Present(T),
}

/// Read-only view over a JSON object with typed field accessors
///
/// Unknown keys are never an error.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// View `value` as an object
    pub fn of(value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Fields { map }),
            other => Err(DecodeError::TypeMismatch {
                field: String::new(),
                expected: "object",
                found: kind_of(other),
            }),
        }
    }

    /// Keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    /// Raw lookup; `null` counts as present
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Three-state lookup
    pub fn presence(&self, key: &str) -> Presence<&'a Value> {
        match self.map.get(key) {
            None => Presence::Absent,
            Some(Value::Null) => Presence::Null,
            Some(v) => Presence::Present(v),
        }
    }

    /// Decode a required, non-null field
    pub fn required<T: FromWire>(&self, key: &str) -> Result<T, DecodeError> {
        match self.map.get(key) {
            None => Err(DecodeError::MissingField {
                field: key.to_string(),
            }),
            Some(v) => T::from_wire(v).map_err(|e| e.within(key)),
        }
    }

    /// Decode an optional field; omitted and `null` are both `None`
    pub fn optional<T: FromWire>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.presence(key) {
            Presence::Absent | Presence::Null => Ok(None),
            Presence::Present(v) => T::from_wire(v).map(Some).map_err(|e| e.within(key)),
        }
    }

    /// Decode a field that must be present but may be `null`
    pub fn nullable<T: FromWire>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.presence(key) {
            Presence::Absent => Err(DecodeError::MissingField {
                field: key.to_string(),
            }),
            Presence::Null => Ok(None),
            Presence::Present(v) => T::from_wire(v).map(Some).map_err(|e| e.within(key)),
        }
    }
}

impl FromWire for String {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch("string", other)),
        }
    }
}

impl FromWire for bool {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }
}

impl FromWire for u64 {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n.as_u64().ok_or_else(|| out_of_range(n, "u64")),
            other => Err(mismatch("number", other)),
        }
    }
}

impl FromWire for u32 {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| out_of_range(n, "u32")),
            other => Err(mismatch("number", other)),
        }
    }
}

/// `[]` decodes to a present, empty collection. The first failing element
/// fails the whole decode.
impl<T: FromWire> FromWire for Array<T> {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_wire(item).map_err(|e| e.within(&format!("[{}]", i))))
                .collect(),
            other => Err(mismatch("array", other)),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        field: String::new(),
        expected,
        found: kind_of(found),
    }
}

fn out_of_range(n: &serde_json::Number, target: &'static str) -> DecodeError {
    DecodeError::OutOfRange {
        field: String::new(),
        value: n.to_string(),
        target,
    }
}
