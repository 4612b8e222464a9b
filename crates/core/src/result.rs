//! Query outcome
//!
//! A query either succeeds with an opaque payload or fails with a message.

use crate::binary::Binary;

/// Outcome of a query executed on behalf of a contract
///
/// ## Normalization
///
/// A result with no payload and no message is a success with an empty
/// payload; there is no third state. `Err` with an empty message is treated
/// the same way when encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Query succeeded; payload is usually the JSON-encoded response
    Ok(Binary),
    /// Query failed with a human-readable message
    Err(String),
}

impl QueryResult {
    /// Build a result from loose parts
    ///
    /// A non-empty `err` wins. Otherwise the result is `Ok` with the payload,
    /// or an empty payload when none was given.
    pub fn from_parts(ok: Option<Binary>, err: Option<String>) -> Self {
        match err {
            Some(msg) if !msg.is_empty() => QueryResult::Err(msg),
            _ => QueryResult::Ok(ok.unwrap_or_default()),
        }
    }

    /// Check if this is a success
    pub fn is_ok(&self) -> bool {
        matches!(self, QueryResult::Ok(_))
    }

    /// Check if this is a failure
    pub fn is_err(&self) -> bool {
        matches!(self, QueryResult::Err(_))
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<Binary, String> {
        match self {
            QueryResult::Ok(payload) => Ok(payload),
            QueryResult::Err(msg) => Err(msg),
        }
    }
}

impl Default for QueryResult {
    fn default() -> Self {
        QueryResult::Ok(Binary::empty())
    }
}

impl From<Result<Binary, String>> for QueryResult {
    fn from(result: Result<Binary, String>) -> Self {
        match result {
            Ok(payload) => QueryResult::Ok(payload),
            Err(msg) => QueryResult::Err(msg),
        }
    }
}
