//! Fixed-shape response tests

use crate::*;
use hostwire::{BalanceResponse, Checksum};

#[test]
fn test_contract_info_response_serialization() {
    let document = r#"{"code_id":67,"creator":"jane","admin":"king","pinned":true,"ibc_port":"wasm.123", "ibc2_port":"wasm.123"}"#;
    let res: ContractInfoResponse = codec().decode(document).unwrap();

    assert_eq!(
        res,
        ContractInfoResponse {
            code_id: 67,
            creator: "jane".into(),
            admin: Some("king".into()),
            pinned: true,
            ibc_port: Some("wasm.123".into()),
            ibc2_port: Some("wasm.123".into()),
        }
    );
}

#[test]
fn test_withdraw_address_response_serialization() {
    let res = DelegatorWithdrawAddressResponse {
        withdraw_address: "jane".into(),
    };
    let json = codec().encode(&res).unwrap();
    assert_json_eq(&json, r#"{"withdraw_address":"jane"}"#);
}

#[test]
fn test_code_info_response_serialization() {
    let codec = codec();

    // Deserialization
    let document = r#"{"code_id":67,"creator":"jane","checksum":"f7bb7b18fb01bbf425cf4ed2cd4b7fb26a019a7fc75a4dc87e8a0b768c501f00"}"#;
    let res: CodeInfoResponse = codec.decode(document).unwrap();
    assert_eq!(
        res,
        CodeInfoResponse {
            code_id: 67,
            creator: "jane".into(),
            checksum: Checksum::from_hex(
                "f7bb7b18fb01bbf425cf4ed2cd4b7fb26a019a7fc75a4dc87e8a0b768c501f00"
            )
            .unwrap(),
        }
    );

    // Serialization
    let my_res = CodeInfoResponse {
        code_id: 0,
        creator: "sam".into(),
        checksum: Checksum::from_hex(
            "ea4140c2d8ff498997f074cbe4f5236e52bc3176c61d1af6938aeb2f2e7b0e6d",
        )
        .unwrap(),
    };
    let json = codec.encode(&my_res).unwrap();
    assert_json_eq(
        &json,
        r#"{"code_id":0,"creator":"sam","checksum":"ea4140c2d8ff498997f074cbe4f5236e52bc3176c61d1af6938aeb2f2e7b0e6d"}"#,
    );
}

#[test]
fn test_code_id_out_of_range() {
    let err = codec()
        .decode::<CodeInfoResponse>(r#"{"code_id":18446744073709551616,"creator":"x","checksum":""}"#)
        .unwrap_err();
    assert_eq!(err.kind(), "OutOfRange");
}

#[test]
fn test_balance_response() {
    let res: BalanceResponse = codec()
        .decode(r#"{"amount":{"denom":"stake","amount":"340282366920938463463374607431768211455"}}"#)
        .unwrap();
    assert_eq!(res.amount, Coin::new(u128::MAX, "stake"));
}
