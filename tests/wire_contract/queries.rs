//! Variant dispatch tests

use crate::*;

#[test]
fn test_wasm_query_serialization() {
    let codec = codec();

    // ContractInfo
    let query: Option<WasmQuery> = codec
        .decode(r#"{"contract_info":{"contract_addr":"aabbccdd456"}}"#)
        .unwrap();
    match query {
        Some(WasmQuery::ContractInfo { contract_addr }) => {
            assert_eq!(contract_addr, "aabbccdd456")
        }
        other => panic!("Expected ContractInfo, got {:?}", other),
    }

    // CodeInfo
    let query: Option<WasmQuery> = codec.decode(r#"{"code_info":{"code_id":70}}"#).unwrap();
    match query {
        Some(WasmQuery::CodeInfo { code_id }) => assert_eq!(code_id, 70),
        other => panic!("Expected CodeInfo, got {:?}", other),
    }
}

#[test]
fn test_distribution_query_serialization() {
    let query: Option<DistributionQuery> = codec()
        .decode(r#"{"delegator_withdraw_address":{"delegator_address":"jane"}}"#)
        .unwrap();
    assert_eq!(
        query,
        Some(DistributionQuery::DelegatorWithdrawAddress {
            delegator_address: "jane".into(),
        })
    );
}

#[test]
fn test_unrecognized_variant_leaves_nothing_set() {
    let query: Option<WasmQuery> = codec()
        .decode(r#"{"contract_history":{"contract_addr":"x"}}"#)
        .unwrap();
    assert!(query.is_none());
}

#[test]
fn test_request_roundtrip_all_families() {
    let codec = codec();

    let requests = vec![
        QueryRequest::Bank(BankQuery::AllBalances {
            address: "addr".into(),
        }),
        QueryRequest::Staking(StakingQuery::Delegation {
            delegator: "d".into(),
            validator: "v".into(),
        }),
        QueryRequest::Distribution(DistributionQuery::DelegatorValidators {
            delegator_address: "d".into(),
        }),
        QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: "c".into(),
            msg: Binary::from(r#"{"ping":{}}"#),
        }),
        QueryRequest::Grpc {
            path: "/x.y.Query/Z".into(),
            data: Binary::empty(),
        },
    ];

    for request in requests {
        let json = codec.encode(&request).unwrap();
        assert!(
            json.starts_with(&format!(r#"{{"{}":"#, request.variant_name())),
            "unexpected shape: {}",
            json
        );
        let decoded: Option<QueryRequest> = codec.decode(&json).unwrap();
        assert_eq!(decoded, Some(request));
    }
}
