//! Core types for the hostwire query contract
//!
//! This crate defines the value types exchanged between a host runtime and a
//! sandboxed contract module:
//! - [`Binary`]: opaque byte payloads (carried as base64 on the wire)
//! - [`Checksum`]: 32-byte code checksums (carried as hex on the wire)
//! - [`Array`]: a collection that is never absent
//! - [`QueryResult`]: success-or-failure outcome of a query
//! - [`QueryRequest`] and its variant families
//! - Response records for every query
//!
//! Nothing in here knows about JSON. Encoding lives in `hostwire-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod binary;
pub mod checksum;
pub mod query;
pub mod response;
pub mod result;

pub use array::Array;
pub use binary::Binary;
pub use checksum::{Checksum, ChecksumError};
pub use query::{
    BankQuery, DistributionQuery, Order, QueryRequest, RawRangeQuery, StakingQuery, WasmQuery,
};
pub use response::{
    AllBalancesResponse, AllDelegationsResponse, AllValidatorsResponse, BalanceResponse,
    BondedDenomResponse, CodeInfoResponse, Coin, ContractInfoResponse, Delegation,
    DelegatorValidatorsResponse, DelegatorWithdrawAddressResponse, RawQueryResponse,
    RawRangeEntry, RawRangeResponse, SmartQueryResponse, SupplyResponse, Validator,
    ValidatorResponse,
};
pub use result::QueryResult;
