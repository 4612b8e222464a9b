//! QueryResult tests

use crate::*;

#[test]
fn test_query_result_cases() {
    let codec = codec();

    // (name, value, expected json, round-trips)
    let cases = vec![
        ("ok with data", QueryResult::Ok(Binary::from("foo")), r#"{"ok":"Zm9v"}"#, true),
        (
            "error",
            QueryResult::Err("try again later".into()),
            r#"{"error":"try again later"}"#,
            true,
        ),
        ("ok with empty payload", QueryResult::Ok(Binary::empty()), r#"{"ok":""}"#, true),
        // No payload and no message collapses into the empty-payload case
        ("nil data", QueryResult::from_parts(None, None), r#"{"ok":""}"#, true),
    ];

    for (name, value, expected, roundtrip) in cases {
        let json = codec.encode(&value).unwrap();
        assert_eq!(json, expected, "Failed for case: {}", name);

        if roundtrip {
            let parsed: QueryResult = codec.decode(&json).unwrap();
            assert_eq!(parsed, value, "Failed roundtrip for case: {}", name);
        }
    }
}

#[test]
fn test_absent_and_empty_payload_indistinguishable() {
    let codec = codec();

    let absent = codec.encode(&QueryResult::from_parts(None, None)).unwrap();
    let empty = codec
        .encode(&QueryResult::from_parts(Some(Binary::empty()), None))
        .unwrap();
    assert_eq!(absent, empty);

    let decoded: QueryResult = codec.decode(&absent).unwrap();
    match decoded {
        QueryResult::Ok(payload) => assert!(payload.is_empty()),
        other => panic!("Expected Ok, got {:?}", other),
    }
}

#[test]
fn test_neither_key_is_error() {
    let err = codec().decode::<QueryResult>(r#"{"result":"x"}"#).unwrap_err();
    assert_eq!(err.kind(), "UnrecognizedVariant");
}
