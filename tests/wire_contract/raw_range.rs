//! Paginated range query tests

use crate::*;

#[test]
fn test_raw_range_query_serialization() {
    let codec = codec();

    // Serialization
    let query = RawRangeQuery {
        contract_addr: "contract".into(),
        start: Some(Binary::from("start")),
        end: Some(Binary::from("end")),
        limit: 100,
        order: Order::Ascending,
    };
    let json = codec.encode(&query).unwrap();
    assert_eq!(
        json,
        r#"{"contract_addr":"contract","start":"c3RhcnQ=","end":"ZW5k","limit":100,"order":"ascending"}"#
    );

    // Deserialization
    let decoded: RawRangeQuery = codec.decode(&json).unwrap();
    assert_eq!(decoded, query);
}

#[test]
fn test_raw_range_response_serialization() {
    let codec = codec();

    // Deserialization
    let document = r#"{"data":[["a2V5","dmFsdWU="],["Zm9v","YmFy"]],"next_key":null}"#;
    let res: RawRangeResponse = codec.decode(document).unwrap();
    assert_eq!(
        res,
        RawRangeResponse {
            data: Array::from(vec![
                RawRangeEntry::new("key", "value"),
                RawRangeEntry::new("foo", "bar"),
            ]),
            next_key: None,
        }
    );

    let json = codec.encode(&res).unwrap();
    assert_eq!(json, document);

    // Empty
    let my_res = RawRangeResponse {
        data: Array::new(),
        next_key: None,
    };
    assert_eq!(codec.encode(&my_res).unwrap(), r#"{"data":[],"next_key":null}"#);

    // Non-empty with cursor
    let my_res = RawRangeResponse {
        data: Array::from(vec![
            RawRangeEntry::new("key", "value"),
            RawRangeEntry::new("foo", "bar"),
        ]),
        next_key: Some(Binary::from("next")),
    };
    assert_json_eq(
        &codec.encode(&my_res).unwrap(),
        r#"{"data":[["a2V5","dmFsdWU="],["Zm9v","YmFy"]],"next_key":"bmV4dA=="}"#,
    );
}

#[test]
fn test_omitted_null_and_empty_bounds_differ() {
    let codec = codec();

    let omitted: RawRangeQuery = codec
        .decode(r#"{"contract_addr":"c","limit":5,"order":"descending"}"#)
        .unwrap();
    let empty: RawRangeQuery = codec
        .decode(r#"{"contract_addr":"c","start":"","limit":5,"order":"descending"}"#)
        .unwrap();

    assert_eq!(omitted.start, None);
    assert_eq!(empty.start, Some(Binary::empty()));
    assert_ne!(omitted, empty);
}

#[test]
fn test_invalid_order() {
    let err = codec()
        .decode::<RawRangeQuery>(r#"{"contract_addr":"c","limit":5,"order":"asc"}"#)
        .unwrap_err();
    assert_eq!(err.kind(), "InvalidOrder");
}
