//! Structural encoding helpers

use super::error::EncodeError;
use super::ToWire;
use hostwire_core::Array;
use serde_json::{Map, Value};

/// Builder for a JSON object with keys in insertion order
#[derive(Debug, Default)]
pub(crate) struct ObjectWriter {
    map: Map<String, Value>,
}

impl ObjectWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Always emitted
    pub(crate) fn field<T: ToWire + ?Sized>(
        mut self,
        key: &str,
        value: &T,
    ) -> Result<Self, EncodeError> {
        self.map.insert(key.to_string(), value.to_wire()?);
        Ok(self)
    }

    /// Omitted when `None`
    pub(crate) fn optional<T: ToWire>(
        self,
        key: &str,
        value: Option<&T>,
    ) -> Result<Self, EncodeError> {
        match value {
            Some(v) => self.field(key, v),
            None => Ok(self),
        }
    }

    /// Emitted as `null` when `None`
    pub(crate) fn nullable<T: ToWire>(
        mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<Self, EncodeError> {
        let encoded = match value {
            Some(v) => v.to_wire()?,
            None => Value::Null,
        };
        self.map.insert(key.to_string(), encoded);
        Ok(self)
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.map)
    }
}

/// Wrap `inner` as `{key: inner}`
pub(crate) fn tagged(key: &str, inner: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), inner);
    Value::Object(map)
}

impl ToWire for str {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToWire for String {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        self.as_str().to_wire()
    }
}

impl ToWire for bool {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::Bool(*self))
    }
}

impl ToWire for u64 {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::from(*self))
    }
}

impl ToWire for u32 {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::from(*self))
    }
}

impl<T: ToWire> ToWire for Array<T> {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        self.iter()
            .map(|item| item.to_wire())
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

/// An absent collection encodes exactly like an empty one.
impl<T: ToWire> ToWire for Option<Array<T>> {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        match self {
            Some(arr) => arr.to_wire(),
            None => Ok(Value::Array(Vec::new())),
        }
    }
}
