//! Wire encoding for hostwire
//!
//! This crate implements the JSON contract for query requests and responses
//! exchanged with a sandboxed contract module.
//!
//! ## Wire Encoding Rules
//!
//! | Value | JSON Encoding |
//! |-------|---------------|
//! | `Binary` | base64 string |
//! | `Checksum` | lowercase hex string |
//! | `Array<T>` | `[...]`, never `null` |
//! | `QueryResult` | `{"ok": "<base64>"}` or `{"error": "<msg>"}` |
//! | query enums | `{"<variant>": {...}}` |
//! | optional field | omitted when absent |
//! | nullable field | `null` when absent |
//!
//! ## Examples
//!
//! ```
//! use hostwire_wire::{decode_json, encode_json};
//! use hostwire_core::{Binary, QueryResult, WasmQuery};
//!
//! let json = encode_json(&QueryResult::Ok(Binary::from("foo"))).unwrap();
//! assert_eq!(json, r#"{"ok":"Zm9v"}"#);
//!
//! let query: Option<WasmQuery> = decode_json(r#"{"code_info":{"code_id":70}}"#).unwrap();
//! assert_eq!(query, Some(WasmQuery::CodeInfo { code_id: 70 }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_binary, decode_json, decode_json_with_limit, encode_binary, encode_json, kind_of,
    DecodeError, EncodeError, Fields, FromWire, Presence, ToWire, DEFAULT_MAX_INPUT_LEN,
};
