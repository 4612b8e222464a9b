//! Binary-safe text encoding
//!
//! Raw bytes travel as standard base64 (padded, no line breaks). Checksums
//! are the one exception and travel as hex.

use super::decode::kind_of;
use super::error::{DecodeError, EncodeError};
use super::{FromWire, ToWire};
use base64::Engine;
use hostwire_core::{Binary, Checksum};
use serde_json::Value;

/// Encode bytes as standard base64
pub fn encode_binary(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64 into bytes
///
/// The empty string decodes to an empty, present buffer.
pub fn decode_binary(text: &str) -> Result<Vec<u8>, DecodeError> {
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| DecodeError::MalformedEncoding {
            field: String::new(),
            reason: e.to_string(),
        })
}

impl ToWire for Binary {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(encode_binary(self)))
    }
}

impl FromWire for Binary {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => decode_binary(s).map(Binary::from),
            other => Err(DecodeError::TypeMismatch {
                field: String::new(),
                expected: "base64 string",
                found: kind_of(other),
            }),
        }
    }
}

impl ToWire for Checksum {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.to_hex()))
    }
}

impl FromWire for Checksum {
    fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => {
                Checksum::from_hex(s).map_err(|e| DecodeError::MalformedEncoding {
                    field: String::new(),
                    reason: e.to_string(),
                })
            }
            other => Err(DecodeError::TypeMismatch {
                field: String::new(),
                expected: "hex string",
                found: kind_of(other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode_binary(b"foo"), "Zm9v");
        assert_eq!(encode_binary(b"start"), "c3RhcnQ=");
        assert_eq!(encode_binary(b"value"), "dmFsdWU=");
        assert_eq!(encode_binary(b"A"), "QQ==");
    }

    #[test]
    fn test_empty_roundtrip() {
        assert_eq!(encode_binary(&[]), "");
        assert_eq!(decode_binary("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_no_line_breaks_for_long_input() {
        let encoded = encode_binary(&[0xab; 1024]);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = decode_binary("!!invalid!!");
        assert!(matches!(result, Err(DecodeError::MalformedEncoding { .. })));
    }

    #[test]
    fn test_decode_rejects_url_safe_alphabet() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet
        assert_eq!(decode_binary("+/8=").unwrap(), vec![0xfb, 0xff]);
        assert!(decode_binary("-_8=").is_err());
    }

    #[test]
    fn test_binary_from_wire_requires_string() {
        let result = Binary::from_wire(&json!(123));
        assert_eq!(
            result,
            Err(DecodeError::TypeMismatch {
                field: String::new(),
                expected: "base64 string",
                found: "number",
            })
        );
    }

    #[test]
    fn test_binary_from_wire_null_is_type_mismatch() {
        let result = Binary::from_wire(&Value::Null);
        assert!(matches!(result, Err(DecodeError::TypeMismatch { found: "null", .. })));
    }

    #[test]
    fn test_checksum_wire_is_hex() {
        let hex = "ea4140c2d8ff498997f074cbe4f5236e52bc3176c61d1af6938aeb2f2e7b0e6d";
        let checksum = Checksum::from_hex(hex).unwrap();
        assert_eq!(checksum.to_wire().unwrap(), json!(hex));
        assert_eq!(Checksum::from_wire(&json!(hex)).unwrap(), checksum);
    }

    #[test]
    fn test_checksum_wrong_length_is_malformed() {
        let result = Checksum::from_wire(&json!("aabbcc"));
        assert!(matches!(result, Err(DecodeError::MalformedEncoding { .. })));
    }

    proptest! {
        #[test]
        fn prop_base64_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let encoded = encode_binary(&bytes);
            prop_assert_eq!(decode_binary(&encoded).unwrap(), bytes);
        }
    }
}
