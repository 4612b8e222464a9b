//! Convenient imports for hostwire.
//!
//! ```
//! use hostwire::prelude::*;
//!
//! let codec = Codec::new();
//! let json = codec.encode(&QueryResult::Ok(Binary::from("foo")))?;
//! assert_eq!(json, r#"{"ok":"Zm9v"}"#);
//! # Ok::<(), hostwire::Error>(())
//! ```

// Main entry point
pub use crate::codec::{Codec, CodecBuilder, CodecConfig};

// Error handling
pub use crate::error::{Error, Result};

// Codec traits
pub use hostwire_wire::{FromWire, ToWire};

// Core types
pub use crate::types::{Array, Binary, Checksum, Order, QueryResult};

// Queries
pub use crate::types::{
    BankQuery, DistributionQuery, QueryRequest, RawRangeQuery, StakingQuery, WasmQuery,
};

// Responses
pub use crate::types::{
    CodeInfoResponse, ContractInfoResponse, DelegatorWithdrawAddressResponse, RawRangeEntry,
    RawRangeResponse,
};
