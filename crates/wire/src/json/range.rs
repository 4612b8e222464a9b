//! Paginated raw range scans
//!
//! Request:
//! `{"contract_addr":"..","start":"<b64>","end":"<b64>","limit":N,"order":"ascending"}`
//! with `start`/`end` omitted when unbounded.
//!
//! Response: `{"data":[["<b64 key>","<b64 value>"],...],"next_key":"<b64>"|null}`.
//! `next_key` is always emitted; `null` means there is no further page.

use super::decode::{kind_of, Fields};
use super::encode::ObjectWriter;
use super::error::{DecodeError, EncodeError};
use super::{FromWire, ToWire};
use hostwire_core::{Binary, Order, RawRangeEntry, RawRangeQuery, RawRangeResponse};
use serde_json::Value;

impl ToWire for Order {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        serde_json::to_value(self).map_err(|e| EncodeError::Serialization(e.to_string()))
    }
}

impl FromWire for Order {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(token) => {
                serde_json::from_value(value.clone()).map_err(|_| DecodeError::InvalidOrder {
                    field: String::new(),
                    token: token.clone(),
                })
            }
            other => Err(DecodeError::TypeMismatch {
                field: String::new(),
                expected: "string",
                found: kind_of(other),
            }),
        }
    }
}

impl ToWire for RawRangeQuery {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        if self.limit == 0 {
            return Err(EncodeError::OutOfRange {
                field: "limit",
                reason: "limit must be positive".to_string(),
            });
        }
        Ok(ObjectWriter::new()
            .field("contract_addr", &self.contract_addr)?
            .optional("start", self.start.as_ref())?
            .optional("end", self.end.as_ref())?
            .field("limit", &self.limit)?
            .field("order", &self.order)?
            .finish())
    }
}

impl FromWire for RawRangeQuery {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let fields = Fields::of(value)?;
        let limit: u32 = fields.required("limit")?;
        if limit == 0 {
            return Err(DecodeError::OutOfRange {
                field: "limit".to_string(),
                value: limit.to_string(),
                target: "positive u32",
            });
        }
        Ok(RawRangeQuery {
            contract_addr: fields.required("contract_addr")?,
            start: fields.optional::<Binary>("start")?,
            end: fields.optional::<Binary>("end")?,
            limit,
            order: fields.required("order")?,
        })
    }
}

impl ToWire for RawRangeEntry {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::Array(vec![self.key.to_wire()?, self.value.to_wire()?]))
    }
}

impl FromWire for RawRangeEntry {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Array(pair) if pair.len() == 2 => Ok(RawRangeEntry {
                key: Binary::from_wire(&pair[0]).map_err(|e| e.within("[0]"))?,
                value: Binary::from_wire(&pair[1]).map_err(|e| e.within("[1]"))?,
            }),
            other => Err(DecodeError::TypeMismatch {
                field: String::new(),
                expected: "[key, value] pair",
                found: kind_of(other),
            }),
        }
    }
}

impl ToWire for RawRangeResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("data", &self.data)?
            .nullable("next_key", self.next_key.as_ref())?
            .finish())
    }
}

impl FromWire for RawRangeResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let fields = Fields::of(value)?;
        Ok(RawRangeResponse {
            data: fields.required("data")?,
            next_key: fields.nullable("next_key")?,
        })
    }
}
