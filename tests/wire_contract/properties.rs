//! Property tests for round-trip invariants

use crate::*;
use proptest::prelude::*;

fn arb_binary() -> impl Strategy<Value = Binary> {
    proptest::collection::vec(any::<u8>(), 0..64).prop_map(Binary::from)
}

fn arb_entry() -> impl Strategy<Value = RawRangeEntry> {
    (arb_binary(), arb_binary()).prop_map(|(k, v)| RawRangeEntry::new(k, v))
}

proptest! {
    #[test]
    fn prop_collection_roundtrip(items in proptest::collection::vec(arb_binary(), 0..16)) {
        let codec = Codec::new();
        let arr = Array::from(items);
        let json = codec.encode(&arr).unwrap();
        let decoded: Array<Binary> = codec.decode(&json).unwrap();
        prop_assert_eq!(decoded, arr);
    }

    #[test]
    fn prop_optional_collection_normalizes(
        items in proptest::option::of(proptest::collection::vec(arb_binary(), 0..8)),
    ) {
        let codec = Codec::new();
        let expected: Array<Binary> = Array::from(items.clone());
        let input: Option<Array<Binary>> = items.map(Array::from);
        let decoded: Array<Binary> = codec.decode(&codec.encode(&input).unwrap()).unwrap();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_range_response_roundtrip(
        entries in proptest::collection::vec(arb_entry(), 0..8),
        next_key in proptest::option::of(arb_binary()),
    ) {
        let codec = Codec::new();
        let res = RawRangeResponse { data: Array::from(entries), next_key };
        let json = codec.encode(&res).unwrap();
        let decoded: RawRangeResponse = codec.decode(&json).unwrap();
        prop_assert_eq!(decoded, res);
    }

    #[test]
    fn prop_error_message_roundtrip(msg in ".+") {
        let codec = Codec::new();
        let result = QueryResult::Err(msg);
        let decoded: QueryResult = codec.decode(&codec.encode(&result).unwrap()).unwrap();
        prop_assert_eq!(decoded, result);
    }
}
