//! # hostwire
//!
//! Host-side JSON contract for queries exchanged with a sandboxed contract
//! module.
//!
//! hostwire maps the peer's tagged-union query model onto Rust enums and
//! keeps the peer's exact JSON shapes: base64 binaries, never-null arrays,
//! `{"ok"}`/`{"error"}` results and single-key variant objects.
//!
//! ## Quick Start
//!
//! ```
//! use hostwire::prelude::*;
//!
//! let codec = Codec::new();
//!
//! // Decode an incoming query
//! let request: Option<QueryRequest> =
//!     codec.decode(r#"{"wasm":{"contract_info":{"contract_addr":"aabbccdd456"}}}"#)?;
//! assert!(matches!(request, Some(QueryRequest::Wasm(WasmQuery::ContractInfo { .. }))));
//!
//! // Encode the outcome
//! let result = QueryResult::Err("try again later".to_string());
//! assert_eq!(codec.encode(&result)?, r#"{"error":"try again later"}"#);
//! # Ok::<(), hostwire::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `hostwire-core` - value types
//! - `hostwire-wire` - JSON codec

#![warn(missing_docs)]

mod codec;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use codec::{Codec, CodecBuilder, CodecConfig};
pub use error::{Error, Result};

// Re-export wire layer
pub use hostwire_wire::{
    decode_binary, decode_json, encode_binary, encode_json, DecodeError, EncodeError, FromWire,
    ToWire,
};

// Re-export types
pub use types::*;
