//! Wire Contract Test Suite
//!
//! Verifies the exact JSON shapes exchanged with the contract peer. Every
//! document here is byte-for-byte what the peer emits or expects.
//!
//! ## Key Verification Points
//!
//! 1. Absent and empty collections both encode as `[]`
//! 2. `QueryResult` uses exactly one of `ok` / `error`
//! 3. Variant dispatch ignores unknown keys
//! 4. Omitted, `null` and `""` binary fields stay distinct
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test wire_contract
//! ```

use hostwire::prelude::*;
use hostwire::{Coin, DecodeError, Delegation, Validator};

// Test modules
pub mod collections;
pub mod properties;
pub mod queries;
pub mod query_result;
pub mod raw_range;
pub mod responses;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Codec with default settings and test logging enabled
pub fn codec() -> Codec {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    Codec::new()
}

/// Compare two JSON documents structurally
pub fn assert_json_eq(actual: &str, expected: &str) {
    let actual: serde_json::Value = serde_json::from_str(actual).expect("actual is JSON");
    let expected: serde_json::Value = serde_json::from_str(expected).expect("expected is JSON");
    assert_eq!(actual, expected);
}
