//! Fixed-width account addresses.
//!
//! Claimants and owners are identified by a 20-byte address. When an address
//! crosses into the 32-byte destination-chain format it is left-padded with
//! zeros, matching the encoding used by the off-chain tree builder and the
//! destination-side consumer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte on-chain account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Parse a 0x-prefixed (or bare) hex string into an address.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);

        if hex_str.len() != 40 {
            return Err(AddressError::InvalidLength { got: hex_str.len() });
        }

        let bytes = hex::decode(hex_str).map_err(|_| AddressError::InvalidHex)?;

        let mut result = [0u8; 20];
        result.copy_from_slice(&bytes);
        Ok(Address(result))
    }

    /// Raw 20-byte form.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Normalize to the 32-byte destination-chain format (left-padded).
    pub fn to_bytes32(&self) -> [u8; 32] {
        let mut result = [0u8; 32];
        result[12..32].copy_from_slice(&self.0);
        result
    }

    /// Whether this is the all-zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

/// Address parsing failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Invalid address length: expected 40 hex chars, got {got}")]
    InvalidLength { got: usize },

    #[error("Invalid hex character in address")]
    InvalidHex,
}
