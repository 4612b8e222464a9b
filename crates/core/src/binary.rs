//! Opaque binary payloads
//!
//! `Binary` is a plain byte buffer. It exists as a distinct type so the wire
//! layer can tell "bytes" apart from "string" and route the former through
//! base64.

use std::fmt;
use std::ops::Deref;

/// Arbitrary binary data
///
/// Zero-length is a valid, present value. There is no "absent" binary; use
/// `Option<Binary>` where a field may be missing.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary(Vec<u8>);

impl Binary {
    /// Create a new binary from raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Binary(bytes)
    }

    /// Create an empty binary
    pub fn empty() -> Self {
        Binary(Vec::new())
    }

    /// Borrow the underlying bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Take ownership of the underlying bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Binary {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Binary(bytes)
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Binary(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Binary {
    fn from(bytes: [u8; N]) -> Self {
        Binary(bytes.to_vec())
    }
}

impl From<&str> for Binary {
    fn from(s: &str) -> Self {
        Binary(s.as_bytes().to_vec())
    }
}

impl From<Binary> for Vec<u8> {
    fn from(binary: Binary) -> Self {
        binary.0
    }
}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binary(0x{})", hex::encode(&self.0))
    }
}
