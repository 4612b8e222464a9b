//! Public types for the hostwire API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Payload types
pub use hostwire_core::{Array, Binary, Checksum, ChecksumError};

// Outcome
pub use hostwire_core::QueryResult;

// Queries
pub use hostwire_core::{
    BankQuery, DistributionQuery, Order, QueryRequest, RawRangeQuery, StakingQuery, WasmQuery,
};

// Shared records
pub use hostwire_core::{Coin, Delegation, Validator};

// Responses
pub use hostwire_core::{
    AllBalancesResponse, AllDelegationsResponse, AllValidatorsResponse, BalanceResponse,
    BondedDenomResponse, CodeInfoResponse, ContractInfoResponse, DelegatorValidatorsResponse,
    DelegatorWithdrawAddressResponse, RawQueryResponse, RawRangeEntry, RawRangeResponse,
    SmartQueryResponse, SupplyResponse, ValidatorResponse,
};
