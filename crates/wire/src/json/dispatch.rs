//! Variant dispatch for query families
//!
//! A query is an object with exactly one known key naming the variant:
//! `{"code_info":{"code_id":70}}`. Decoding picks the variant by key.
//!
//! - unknown keys are ignored so newer peers can add variants
//! - no known key at all decodes to `None`, which callers must check
//! - two or more known keys are ambiguous and rejected
//!
//! A nested family (`{"wasm":{...}}`) whose inner object has no known key
//! also decodes to `None`.

use super::decode::Fields;
use super::encode::{tagged, ObjectWriter};
use super::error::{DecodeError, EncodeError};
use super::{FromWire, ToWire};
use hostwire_core::{
    BankQuery, DistributionQuery, QueryRequest, RawRangeQuery, StakingQuery, WasmQuery,
};
use serde_json::Value;
use tracing::debug;

/// Known keys of one query family
struct Family {
    name: &'static str,
    keys: &'static [&'static str],
    expected: &'static str,
}

const REQUEST: Family = Family {
    name: "QueryRequest",
    keys: &["bank", "staking", "distribution", "wasm", "grpc"],
    expected: "bank | staking | distribution | wasm | grpc",
};

const BANK: Family = Family {
    name: "BankQuery",
    keys: &["supply", "balance", "all_balances"],
    expected: "supply | balance | all_balances",
};

const STAKING: Family = Family {
    name: "StakingQuery",
    keys: &[
        "bonded_denom",
        "all_delegations",
        "delegation",
        "all_validators",
        "validator",
    ],
    expected: "bonded_denom | all_delegations | delegation | all_validators | validator",
};

const DISTRIBUTION: Family = Family {
    name: "DistributionQuery",
    keys: &[
        "delegator_withdraw_address",
        "delegation_rewards",
        "delegation_total_rewards",
        "delegator_validators",
    ],
    expected: "delegator_withdraw_address | delegation_rewards | delegation_total_rewards \
               | delegator_validators",
};

const WASM: Family = Family {
    name: "WasmQuery",
    keys: &["smart", "raw", "contract_info", "code_info", "raw_range"],
    expected: "smart | raw | contract_info | code_info | raw_range",
};

impl Family {
    /// Find the single known key of a dispatch object
    fn select<'a>(&self, value: &'a Value) -> Result<Option<(&'static str, &'a Value)>, DecodeError> {
        let fields = Fields::of(value)?;
        let mut selected = None;

        for key in fields.keys() {
            let Some(known) = self.keys.iter().copied().find(|k| *k == key) else {
                debug!(family = self.name, key, "ignoring unrecognized variant key");
                continue;
            };
            if selected.is_some() {
                return Err(DecodeError::UnrecognizedVariant {
                    field: String::new(),
                    expected: self.expected,
                });
            }
            selected = fields.get(known).map(|inner| (known, inner));
        }

        if selected.is_none() {
            debug!(family = self.name, "no recognized variant key");
        }
        Ok(selected)
    }
}

/// Decode one variant body, prefixing errors with its key
fn body<T>(
    key: &str,
    inner: &Value,
    decode: impl FnOnce(&Fields<'_>) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    Fields::of(inner)
        .and_then(|fields| decode(&fields))
        .map_err(|e| e.within(key))
}

// =============================================================================
// QueryRequest
// =============================================================================

impl ToWire for QueryRequest {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        let inner = match self {
            QueryRequest::Bank(q) => q.to_wire()?,
            QueryRequest::Staking(q) => q.to_wire()?,
            QueryRequest::Distribution(q) => q.to_wire()?,
            QueryRequest::Wasm(q) => q.to_wire()?,
            QueryRequest::Grpc { path, data } => ObjectWriter::new()
                .field("path", path)?
                .field("data", data)?
                .finish(),
        };
        Ok(tagged(self.variant_name(), inner))
    }
}

impl FromWire for Option<QueryRequest> {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let Some((key, inner)) = REQUEST.select(value)? else {
            return Ok(None);
        };

        let request = match key {
            "bank" => nested::<BankQuery>(key, inner)?.map(QueryRequest::Bank),
            "staking" => nested::<StakingQuery>(key, inner)?.map(QueryRequest::Staking),
            "distribution" => {
                nested::<DistributionQuery>(key, inner)?.map(QueryRequest::Distribution)
            }
            "wasm" => nested::<WasmQuery>(key, inner)?.map(QueryRequest::Wasm),
            _ => Some(body(key, inner, |f| {
                Ok(QueryRequest::Grpc {
                    path: f.required("path")?,
                    data: f.required("data")?,
                })
            })?),
        };
        Ok(request)
    }
}

/// Decode a nested family; `None` propagates outward
fn nested<T>(key: &str, inner: &Value) -> Result<Option<T>, DecodeError>
where
    Option<T>: FromWire,
{
    let decoded = Option::<T>::from_wire(inner).map_err(|e| e.within(key))?;
    if decoded.is_none() {
        debug!(family = key, "nested query has no recognized variant");
    }
    Ok(decoded)
}

// =============================================================================
// BankQuery
// =============================================================================

impl ToWire for BankQuery {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        let inner = match self {
            BankQuery::Supply { denom } => ObjectWriter::new().field("denom", denom)?,
            BankQuery::Balance { address, denom } => ObjectWriter::new()
                .field("address", address)?
                .field("denom", denom)?,
            BankQuery::AllBalances { address } => {
                ObjectWriter::new().field("address", address)?
            }
        };
        Ok(tagged(self.variant_name(), inner.finish()))
    }
}

impl FromWire for Option<BankQuery> {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let Some((key, inner)) = BANK.select(value)? else {
            return Ok(None);
        };
        body(key, inner, |f| match key {
            "supply" => Ok(BankQuery::Supply {
                denom: f.required("denom")?,
            }),
            "balance" => Ok(BankQuery::Balance {
                address: f.required("address")?,
                denom: f.required("denom")?,
            }),
            _ => Ok(BankQuery::AllBalances {
                address: f.required("address")?,
            }),
        })
        .map(Some)
    }
}

// =============================================================================
// StakingQuery
// =============================================================================

impl ToWire for StakingQuery {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        let inner = match self {
            StakingQuery::BondedDenom | StakingQuery::AllValidators => ObjectWriter::new(),
            StakingQuery::AllDelegations { delegator } => {
                ObjectWriter::new().field("delegator", delegator)?
            }
            StakingQuery::Delegation {
                delegator,
                validator,
            } => ObjectWriter::new()
                .field("delegator", delegator)?
                .field("validator", validator)?,
            StakingQuery::Validator { address } => {
                ObjectWriter::new().field("address", address)?
            }
        };
        Ok(tagged(self.variant_name(), inner.finish()))
    }
}

impl FromWire for Option<StakingQuery> {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let Some((key, inner)) = STAKING.select(value)? else {
            return Ok(None);
        };
        body(key, inner, |f| match key {
            "bonded_denom" => Ok(StakingQuery::BondedDenom),
            "all_validators" => Ok(StakingQuery::AllValidators),
            "all_delegations" => Ok(StakingQuery::AllDelegations {
                delegator: f.required("delegator")?,
            }),
            "delegation" => Ok(StakingQuery::Delegation {
                delegator: f.required("delegator")?,
                validator: f.required("validator")?,
            }),
            _ => Ok(StakingQuery::Validator {
                address: f.required("address")?,
            }),
        })
        .map(Some)
    }
}

// =============================================================================
// DistributionQuery
// =============================================================================

impl ToWire for DistributionQuery {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        let inner = match self {
            DistributionQuery::DelegatorWithdrawAddress { delegator_address }
            | DistributionQuery::DelegationTotalRewards { delegator_address }
            | DistributionQuery::DelegatorValidators { delegator_address } => {
                ObjectWriter::new().field("delegator_address", delegator_address)?
            }
            DistributionQuery::DelegationRewards {
                delegator_address,
                validator_address,
            } => ObjectWriter::new()
                .field("delegator_address", delegator_address)?
                .field("validator_address", validator_address)?,
        };
        Ok(tagged(self.variant_name(), inner.finish()))
    }
}

impl FromWire for Option<DistributionQuery> {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let Some((key, inner)) = DISTRIBUTION.select(value)? else {
            return Ok(None);
        };
        body(key, inner, |f| match key {
            "delegator_withdraw_address" => Ok(DistributionQuery::DelegatorWithdrawAddress {
                delegator_address: f.required("delegator_address")?,
            }),
            "delegation_rewards" => Ok(DistributionQuery::DelegationRewards {
                delegator_address: f.required("delegator_address")?,
                validator_address: f.required("validator_address")?,
            }),
            "delegation_total_rewards" => Ok(DistributionQuery::DelegationTotalRewards {
                delegator_address: f.required("delegator_address")?,
            }),
            _ => Ok(DistributionQuery::DelegatorValidators {
                delegator_address: f.required("delegator_address")?,
            }),
        })
        .map(Some)
    }
}

// =============================================================================
// WasmQuery
// =============================================================================

impl ToWire for WasmQuery {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        let inner = match self {
            WasmQuery::Smart { contract_addr, msg } => ObjectWriter::new()
                .field("contract_addr", contract_addr)?
                .field("msg", msg)?
                .finish(),
            WasmQuery::Raw { contract_addr, key } => ObjectWriter::new()
                .field("contract_addr", contract_addr)?
                .field("key", key)?
                .finish(),
            WasmQuery::ContractInfo { contract_addr } => ObjectWriter::new()
                .field("contract_addr", contract_addr)?
                .finish(),
            WasmQuery::CodeInfo { code_id } => {
                ObjectWriter::new().field("code_id", code_id)?.finish()
            }
            WasmQuery::RawRange(range) => range.to_wire()?,
        };
        Ok(tagged(self.variant_name(), inner))
    }
}

impl FromWire for Option<WasmQuery> {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let Some((key, inner)) = WASM.select(value)? else {
            return Ok(None);
        };
        if key == "raw_range" {
            return RawRangeQuery::from_wire(inner)
                .map(|range| Some(WasmQuery::RawRange(range)))
                .map_err(|e| e.within(key));
        }
        body(key, inner, |f| match key {
            "smart" => Ok(WasmQuery::Smart {
                contract_addr: f.required("contract_addr")?,
                msg: f.required("msg")?,
            }),
            "raw" => Ok(WasmQuery::Raw {
                contract_addr: f.required("contract_addr")?,
                key: f.required("key")?,
            }),
            "contract_info" => Ok(WasmQuery::ContractInfo {
                contract_addr: f.required("contract_addr")?,
            }),
            _ => Ok(WasmQuery::CodeInfo {
                code_id: f.required("code_id")?,
            }),
        })
        .map(Some)
    }
}
