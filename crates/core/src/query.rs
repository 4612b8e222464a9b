//! Query requests
//!
//! Each query family is a closed set of variants. On the wire a variant is an
//! object with a single snake_case key; here it is an enum case.

use crate::binary::Binary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level query issued by a contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    /// Bank module queries
    Bank(BankQuery),
    /// Staking module queries
    Staking(StakingQuery),
    /// Distribution module queries
    Distribution(DistributionQuery),
    /// Queries against other contracts
    Wasm(WasmQuery),
    /// Raw gRPC query routed to a chain service
    Grpc {
        /// Fully-qualified method path, e.g. `/cosmos.bank.v1beta1.Query/Balance`
        path: String,
        /// Protobuf-encoded request
        data: Binary,
    },
}

/// Bank module queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankQuery {
    /// Total supply of a denomination
    Supply {
        /// Denomination
        denom: String,
    },
    /// Balance of one denomination for an address
    Balance {
        /// Account address
        address: String,
        /// Denomination
        denom: String,
    },
    /// All balances of an address
    AllBalances {
        /// Account address
        address: String,
    },
}

/// Staking module queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakingQuery {
    /// The denomination used for bonding
    BondedDenom,
    /// All delegations of a delegator
    AllDelegations {
        /// Delegator address
        delegator: String,
    },
    /// A single delegation
    Delegation {
        /// Delegator address
        delegator: String,
        /// Validator address
        validator: String,
    },
    /// All active validators
    AllValidators,
    /// A single validator
    Validator {
        /// Validator operator address
        address: String,
    },
}

/// Distribution module queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionQuery {
    /// Address that receives a delegator's rewards
    DelegatorWithdrawAddress {
        /// Delegator address
        delegator_address: String,
    },
    /// Rewards accrued by one delegation
    DelegationRewards {
        /// Delegator address
        delegator_address: String,
        /// Validator address
        validator_address: String,
    },
    /// Rewards accrued across all of a delegator's delegations
    DelegationTotalRewards {
        /// Delegator address
        delegator_address: String,
    },
    /// Validators a delegator is bonded to
    DelegatorValidators {
        /// Delegator address
        delegator_address: String,
    },
}

/// Queries against other contracts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmQuery {
    /// Contract-defined query; `msg` is the JSON message the contract receives
    Smart {
        /// Target contract
        contract_addr: String,
        /// Encoded query message
        msg: Binary,
    },
    /// Single raw storage lookup
    Raw {
        /// Target contract
        contract_addr: String,
        /// Storage key
        key: Binary,
    },
    /// Metadata about a contract instance
    ContractInfo {
        /// Target contract
        contract_addr: String,
    },
    /// Metadata about stored code
    CodeInfo {
        /// Code identifier
        code_id: u64,
    },
    /// Paginated raw storage scan
    RawRange(RawRangeQuery),
}

/// Paginated scan over a contract's raw storage
///
/// `None` bounds are unbounded. `Some(Binary::empty())` is a bound at the
/// zero-length key, which is a different query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRangeQuery {
    /// Target contract
    pub contract_addr: String,
    /// Inclusive lower bound
    pub start: Option<Binary>,
    /// Exclusive upper bound
    pub end: Option<Binary>,
    /// Maximum number of entries per page; must be positive
    pub limit: u32,
    /// Iteration direction
    pub order: Order,
}

/// Iteration direction for range scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Smallest key first
    Ascending,
    /// Largest key first
    Descending,
}

impl Order {
    /// Wire token for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryRequest {
    /// Wire key of the active variant
    pub fn variant_name(&self) -> &'static str {
        match self {
            QueryRequest::Bank(_) => "bank",
            QueryRequest::Staking(_) => "staking",
            QueryRequest::Distribution(_) => "distribution",
            QueryRequest::Wasm(_) => "wasm",
            QueryRequest::Grpc { .. } => "grpc",
        }
    }
}

impl BankQuery {
    /// Wire key of the active variant
    pub fn variant_name(&self) -> &'static str {
        match self {
            BankQuery::Supply { .. } => "supply",
            BankQuery::Balance { .. } => "balance",
            BankQuery::AllBalances { .. } => "all_balances",
        }
    }
}

impl StakingQuery {
    /// Wire key of the active variant
    pub fn variant_name(&self) -> &'static str {
        match self {
            StakingQuery::BondedDenom => "bonded_denom",
            StakingQuery::AllDelegations { .. } => "all_delegations",
            StakingQuery::Delegation { .. } => "delegation",
            StakingQuery::AllValidators => "all_validators",
            StakingQuery::Validator { .. } => "validator",
        }
    }
}

impl DistributionQuery {
    /// Wire key of the active variant
    pub fn variant_name(&self) -> &'static str {
        match self {
            DistributionQuery::DelegatorWithdrawAddress { .. } => "delegator_withdraw_address",
            DistributionQuery::DelegationRewards { .. } => "delegation_rewards",
            DistributionQuery::DelegationTotalRewards { .. } => "delegation_total_rewards",
            DistributionQuery::DelegatorValidators { .. } => "delegator_validators",
        }
    }
}

impl WasmQuery {
    /// Wire key of the active variant
    pub fn variant_name(&self) -> &'static str {
        match self {
            WasmQuery::Smart { .. } => "smart",
            WasmQuery::Raw { .. } => "raw",
            WasmQuery::ContractInfo { .. } => "contract_info",
            WasmQuery::CodeInfo { .. } => "code_info",
            WasmQuery::RawRange(_) => "raw_range",
        }
    }
}
