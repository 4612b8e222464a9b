//! Code checksums
//!
//! A checksum is the SHA-256 digest of a stored code blob. It is always
//! exactly 32 bytes and is carried on the wire as lowercase hex.

use std::fmt;
use thiserror::Error;

/// Length of a checksum in bytes
pub const CHECKSUM_LEN: usize = 32;

/// Errors constructing a [`Checksum`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    /// Wrong number of bytes
    #[error("invalid checksum length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    /// Input is not valid hex
    #[error("invalid checksum hex: {0}")]
    InvalidHex(String),
}

/// 32-byte code checksum
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum([u8; CHECKSUM_LEN]);

impl Checksum {
    /// Parse a checksum from a 64-character hex string
    ///
    /// Upper-case digits are accepted.
    pub fn from_hex(input: &str) -> Result<Self, ChecksumError> {
        let bytes = hex::decode(input).map_err(|e| ChecksumError::InvalidHex(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }

    /// Lowercase hex representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Borrow the raw digest
    pub fn as_bytes(&self) -> &[u8; CHECKSUM_LEN] {
        &self.0
    }
}

impl From<[u8; CHECKSUM_LEN]> for Checksum {
    fn from(bytes: [u8; CHECKSUM_LEN]) -> Self {
        Checksum(bytes)
    }
}

impl TryFrom<&[u8]> for Checksum {
    type Error = ChecksumError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let digest: [u8; CHECKSUM_LEN] = bytes
            .try_into()
            .map_err(|_| ChecksumError::InvalidLength(bytes.len()))?;
        Ok(Checksum(digest))
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({})", self.to_hex())
    }
}
