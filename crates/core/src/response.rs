//! Query responses and shared records

use crate::array::Array;
use crate::binary::Binary;
use crate::checksum::Checksum;

/// An amount of a single denomination
///
/// `amount` is a decimal string so that values wider than 64 bits survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    /// Denomination, e.g. `ustake`
    pub denom: String,
    /// Decimal amount
    pub amount: String,
}

impl Coin {
    /// Create a coin from an integer amount
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Coin {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}

/// A bonded delegation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    /// Delegator address
    pub delegator: String,
    /// Validator address
    pub validator: String,
    /// Delegated amount
    pub amount: Coin,
}

/// A validator and its commission parameters
///
/// Rates are decimal strings, e.g. `"0.05"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    /// Operator address
    pub address: String,
    /// Current commission rate
    pub commission: String,
    /// Maximum commission rate
    pub max_commission: String,
    /// Maximum daily change of the commission rate
    pub max_change_rate: String,
}

/// Response to `BankQuery::Supply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyResponse {
    /// Total supply
    pub amount: Coin,
}

/// Response to `BankQuery::Balance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResponse {
    /// Balance, zero amount when the account holds none
    pub amount: Coin,
}

/// Response to `BankQuery::AllBalances`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllBalancesResponse {
    /// Non-zero balances
    pub amount: Array<Coin>,
}

/// Response to `StakingQuery::BondedDenom`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondedDenomResponse {
    /// Bonding denomination
    pub denom: String,
}

/// Response to `StakingQuery::AllDelegations`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllDelegationsResponse {
    /// Delegations of the requested delegator
    pub delegations: Array<Delegation>,
}

/// Response to `StakingQuery::AllValidators`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllValidatorsResponse {
    /// Active validators
    pub validators: Array<Validator>,
}

/// Response to `StakingQuery::Validator`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatorResponse {
    /// `None` when the address is not a validator; encoded as `null`
    pub validator: Option<Validator>,
}

/// Response to `DistributionQuery::DelegatorWithdrawAddress`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatorWithdrawAddressResponse {
    /// Reward withdraw address
    pub withdraw_address: String,
}

/// Response to `DistributionQuery::DelegatorValidators`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DelegatorValidatorsResponse {
    /// Validator addresses
    pub validators: Array<String>,
}

/// Response to `WasmQuery::Smart`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmartQueryResponse {
    /// Contract-defined response bytes
    pub data: Binary,
}

/// Response to `WasmQuery::Raw`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawQueryResponse {
    /// Stored value; empty when the key does not exist
    pub data: Binary,
}

/// Response to `WasmQuery::ContractInfo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInfoResponse {
    /// Code the contract was instantiated from
    pub code_id: u64,
    /// Address that instantiated the contract
    pub creator: String,
    /// Migration admin, if any
    pub admin: Option<String>,
    /// Whether the code is pinned in the module cache
    pub pinned: bool,
    /// IBC port, set when the contract is IBC-enabled
    pub ibc_port: Option<String>,
    /// IBC v2 port, set when the contract is IBC v2-enabled
    pub ibc2_port: Option<String>,
}

/// Response to `WasmQuery::CodeInfo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInfoResponse {
    /// Code identifier
    pub code_id: u64,
    /// Address that stored the code
    pub creator: String,
    /// SHA-256 of the code blob
    pub checksum: Checksum,
}

/// One key/value pair returned by a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRangeEntry {
    /// Storage key
    pub key: Binary,
    /// Stored value
    pub value: Binary,
}

impl RawRangeEntry {
    /// Create an entry
    pub fn new(key: impl Into<Binary>, value: impl Into<Binary>) -> Self {
        RawRangeEntry {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response to `WasmQuery::RawRange`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRangeResponse {
    /// Entries in the requested order
    pub data: Array<RawRangeEntry>,
    /// Key to resume from; `None` when this is the last page
    pub next_key: Option<Binary>,
}
