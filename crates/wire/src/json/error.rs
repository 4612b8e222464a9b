//! Codec error types
//!
//! Every decode error that concerns a particular value carries the path of
//! that value inside the document, e.g. `wasm.code_info.code_id` or
//! `data[1][0]`. Paths are built bottom-up with [`DecodeError::within`].

use thiserror::Error;

/// Decode error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not JSON at all
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Input exceeds the configured size limit
    #[error("Input too large: {len} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Input length in bytes
        len: usize,
        /// Configured limit
        limit: usize,
    },

    /// Invalid base64 or hex in a binary field
    #[error("Malformed encoding at {loc}: {reason}", loc = location(.field))]
    MalformedEncoding {
        /// Path of the offending value
        field: String,
        /// Underlying decoder message
        reason: String,
    },

    /// JSON value has the wrong kind
    #[error("Type mismatch at {loc}: expected {expected}, found {found}", loc = location(.field))]
    TypeMismatch {
        /// Path of the offending value
        field: String,
        /// Expected JSON kind
        expected: &'static str,
        /// Actual JSON kind
        found: &'static str,
    },

    /// Required key absent
    #[error("Missing field: {loc}", loc = location(.field))]
    MissingField {
        /// Path of the missing key
        field: String,
    },

    /// Number does not fit the target integer width
    #[error("Out of range at {loc}: {value} is not a valid {target}", loc = location(.field))]
    OutOfRange {
        /// Path of the offending value
        field: String,
        /// The number as written in the document
        value: String,
        /// Target type, e.g. `u64`
        target: &'static str,
    },

    /// None of the mutually exclusive keys is present
    #[error("Unrecognized variant at {loc}: expected one of {expected}", loc = location(.field))]
    UnrecognizedVariant {
        /// Path of the object
        field: String,
        /// Accepted keys, `|`-separated
        expected: &'static str,
    },

    /// Ordering token is not `ascending` or `descending`
    #[error("Invalid order at {loc}: {token:?}", loc = location(.field))]
    InvalidOrder {
        /// Path of the offending value
        field: String,
        /// Token found in the document
        token: String,
    },
}

impl DecodeError {
    /// Prefix the error's field path with `parent`
    ///
    /// Index segments (`[0]`) attach without a dot.
    pub fn within(mut self, parent: &str) -> Self {
        if let Some(field) = self.field_mut() {
            *field = if field.is_empty() {
                parent.to_string()
            } else if field.starts_with('[') {
                format!("{}{}", parent, field)
            } else {
                format!("{}.{}", parent, field)
            };
        }
        self
    }

    /// Path of the offending value, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::InvalidJson(_) | DecodeError::InputTooLarge { .. } => None,
            DecodeError::MalformedEncoding { field, .. }
            | DecodeError::TypeMismatch { field, .. }
            | DecodeError::MissingField { field }
            | DecodeError::OutOfRange { field, .. }
            | DecodeError::UnrecognizedVariant { field, .. }
            | DecodeError::InvalidOrder { field, .. } => Some(field),
        }
    }

    /// Canonical kind name, stable across releases
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidJson(_) => "InvalidJson",
            DecodeError::InputTooLarge { .. } => "InputTooLarge",
            DecodeError::MalformedEncoding { .. } => "MalformedEncoding",
            DecodeError::TypeMismatch { .. } => "TypeMismatch",
            DecodeError::MissingField { .. } => "MissingField",
            DecodeError::OutOfRange { .. } => "OutOfRange",
            DecodeError::UnrecognizedVariant { .. } => "UnrecognizedVariant",
            DecodeError::InvalidOrder { .. } => "InvalidOrder",
        }
    }

    fn field_mut(&mut self) -> Option<&mut String> {
        match self {
            DecodeError::InvalidJson(_) | DecodeError::InputTooLarge { .. } => None,
            DecodeError::MalformedEncoding { field, .. }
            | DecodeError::TypeMismatch { field, .. }
            | DecodeError::MissingField { field }
            | DecodeError::OutOfRange { field, .. }
            | DecodeError::UnrecognizedVariant { field, .. }
            | DecodeError::InvalidOrder { field, .. } => Some(field),
        }
    }
}

/// Encode error types
///
/// Values are well-formed by construction, so these only fire for values
/// the contract cannot carry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Value outside what the contract allows for the field
    #[error("Out of range at {field}: {reason}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// What was wrong
        reason: String,
    },

    /// JSON printer failure
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

fn location(field: &str) -> &str {
    if field.is_empty() {
        "document root"
    } else {
        field
    }
}
