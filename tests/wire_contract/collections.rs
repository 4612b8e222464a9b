//! Normalized collection tests

use crate::*;

#[test]
fn test_delegation_with_empty_array() {
    let codec = codec();

    let del: Option<Array<Delegation>> = None;
    let json = codec.encode(&del).unwrap();
    assert_eq!(json, "[]");

    let redel: Array<Delegation> = codec.decode(&json).unwrap();
    assert_eq!(redel, Array::new());
}

#[test]
fn test_delegation_with_data() {
    let codec = codec();

    let del = Array::from(vec![Delegation {
        validator: "foo".into(),
        delegator: "bar".into(),
        amount: Coin::new(123, "stake"),
    }]);
    let json = codec.encode(&del).unwrap();

    let redel: Array<Delegation> = codec.decode(&json).unwrap();
    assert_eq!(redel, del);
}

#[test]
fn test_validator_with_empty_array() {
    let codec = codec();

    let val: Option<Array<Validator>> = None;
    let json = codec.encode(&val).unwrap();
    assert_eq!(json, "[]");

    let reval: Array<Validator> = codec.decode(&json).unwrap();
    assert!(reval.is_empty());
}

#[test]
fn test_validator_with_data() {
    let codec = codec();

    let val = Array::from(vec![Validator {
        address: "1234567890".into(),
        commission: "0.05".into(),
        max_commission: "0.1".into(),
        max_change_rate: "0.02".into(),
    }]);
    let json = codec.encode(&val).unwrap();
    assert_eq!(
        json,
        r#"[{"address":"1234567890","commission":"0.05","max_commission":"0.1","max_change_rate":"0.02"}]"#
    );

    let reval: Array<Validator> = codec.decode(&json).unwrap();
    assert_eq!(reval, val);
}

#[test]
fn test_null_is_not_an_empty_collection() {
    let err = codec().decode::<Array<Coin>>("null").unwrap_err();
    assert_eq!(err.kind(), "TypeMismatch");
}

#[test]
fn test_element_failure_yields_no_partial_result() {
    let err = codec()
        .decode::<Array<Coin>>(r#"[{"denom":"a","amount":"1"},{"denom":"b"}]"#)
        .unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::MissingField {
            field: "[1].amount".into()
        })
    );
}
