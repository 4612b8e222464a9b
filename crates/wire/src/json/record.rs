//! Fixed-shape records
//!
//! Shared records (`Coin`, `Delegation`, `Validator`) and the response to
//! every query. Keys are emitted in the order listed on each impl.

use super::decode::Fields;
use super::encode::ObjectWriter;
use super::error::{DecodeError, EncodeError};
use super::{FromWire, ToWire};
use hostwire_core::{
    AllBalancesResponse, AllDelegationsResponse, AllValidatorsResponse, BalanceResponse,
    BondedDenomResponse, CodeInfoResponse, Coin, ContractInfoResponse, Delegation,
    DelegatorValidatorsResponse, DelegatorWithdrawAddressResponse, RawQueryResponse,
    SmartQueryResponse, SupplyResponse, Validator, ValidatorResponse,
};
use serde_json::Value;

// =============================================================================
// Shared records
// =============================================================================

impl ToWire for Coin {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("denom", &self.denom)?
            .field("amount", &self.amount)?
            .finish())
    }
}

impl FromWire for Coin {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(value)?;
        Ok(Coin {
            denom: f.required("denom")?,
            amount: f.required("amount")?,
        })
    }
}

impl ToWire for Delegation {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("delegator", &self.delegator)?
            .field("validator", &self.validator)?
            .field("amount", &self.amount)?
            .finish())
    }
}

impl FromWire for Delegation {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(value)?;
        Ok(Delegation {
            delegator: f.required("delegator")?,
            validator: f.required("validator")?,
            amount: f.required("amount")?,
        })
    }
}

impl ToWire for Validator {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("address", &self.address)?
            .field("commission", &self.commission)?
            .field("max_commission", &self.max_commission)?
            .field("max_change_rate", &self.max_change_rate)?
            .finish())
    }
}

impl FromWire for Validator {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(value)?;
        Ok(Validator {
            address: f.required("address")?,
            commission: f.required("commission")?,
            max_commission: f.required("max_commission")?,
            max_change_rate: f.required("max_change_rate")?,
        })
    }
}

// =============================================================================
// Wasm responses
// =============================================================================

/// `admin`, `ibc_port` and `ibc2_port` are omitted when unset.
impl ToWire for ContractInfoResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("code_id", &self.code_id)?
            .field("creator", &self.creator)?
            .optional("admin", self.admin.as_ref())?
            .field("pinned", &self.pinned)?
            .optional("ibc_port", self.ibc_port.as_ref())?
            .optional("ibc2_port", self.ibc2_port.as_ref())?
            .finish())
    }
}

impl FromWire for ContractInfoResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(value)?;
        Ok(ContractInfoResponse {
            code_id: f.required("code_id")?,
            creator: f.required("creator")?,
            admin: f.optional("admin")?,
            pinned: f.required("pinned")?,
            ibc_port: f.optional("ibc_port")?,
            ibc2_port: f.optional("ibc2_port")?,
        })
    }
}

impl ToWire for CodeInfoResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("code_id", &self.code_id)?
            .field("creator", &self.creator)?
            .field("checksum", &self.checksum)?
            .finish())
    }
}

impl FromWire for CodeInfoResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(value)?;
        Ok(CodeInfoResponse {
            code_id: f.required("code_id")?,
            creator: f.required("creator")?,
            checksum: f.required("checksum")?,
        })
    }
}

impl ToWire for SmartQueryResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new().field("data", &self.data)?.finish())
    }
}

impl FromWire for SmartQueryResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(SmartQueryResponse {
            data: Fields::of(value)?.required("data")?,
        })
    }
}

impl ToWire for RawQueryResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new().field("data", &self.data)?.finish())
    }
}

impl FromWire for RawQueryResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(RawQueryResponse {
            data: Fields::of(value)?.required("data")?,
        })
    }
}

// =============================================================================
// Bank responses
// =============================================================================

impl ToWire for SupplyResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new().field("amount", &self.amount)?.finish())
    }
}

impl FromWire for SupplyResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(SupplyResponse {
            amount: Fields::of(value)?.required("amount")?,
        })
    }
}

impl ToWire for BalanceResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new().field("amount", &self.amount)?.finish())
    }
}

impl FromWire for BalanceResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(BalanceResponse {
            amount: Fields::of(value)?.required("amount")?,
        })
    }
}

impl ToWire for AllBalancesResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new().field("amount", &self.amount)?.finish())
    }
}

impl FromWire for AllBalancesResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(AllBalancesResponse {
            amount: Fields::of(value)?.required("amount")?,
        })
    }
}

// =============================================================================
// Staking responses
// =============================================================================

impl ToWire for BondedDenomResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new().field("denom", &self.denom)?.finish())
    }
}

impl FromWire for BondedDenomResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(BondedDenomResponse {
            denom: Fields::of(value)?.required("denom")?,
        })
    }
}

impl ToWire for AllDelegationsResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("delegations", &self.delegations)?
            .finish())
    }
}

impl FromWire for AllDelegationsResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(AllDelegationsResponse {
            delegations: Fields::of(value)?.required("delegations")?,
        })
    }
}

impl ToWire for AllValidatorsResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("validators", &self.validators)?
            .finish())
    }
}

impl FromWire for AllValidatorsResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(AllValidatorsResponse {
            validators: Fields::of(value)?.required("validators")?,
        })
    }
}

/// `validator` is `null` when the address is not a validator.
impl ToWire for ValidatorResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .nullable("validator", self.validator.as_ref())?
            .finish())
    }
}

impl FromWire for ValidatorResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(ValidatorResponse {
            validator: Fields::of(value)?.nullable("validator")?,
        })
    }
}

// =============================================================================
// Distribution responses
// =============================================================================

impl ToWire for DelegatorWithdrawAddressResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("withdraw_address", &self.withdraw_address)?
            .finish())
    }
}

impl FromWire for DelegatorWithdrawAddressResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(DelegatorWithdrawAddressResponse {
            withdraw_address: Fields::of(value)?.required("withdraw_address")?,
        })
    }
}

impl ToWire for DelegatorValidatorsResponse {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(ObjectWriter::new()
            .field("validators", &self.validators)?
            .finish())
    }
}

impl FromWire for DelegatorValidatorsResponse {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        Ok(DelegatorValidatorsResponse {
            validators: Fields::of(value)?.required("validators")?,
        })
    }
}
