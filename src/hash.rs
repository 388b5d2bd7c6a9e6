//! Hash computation for claim leaves.
//!
//! The leaf encoding must produce identical output to the off-chain tree
//! builder, or every proof fails.
//!
//! # Byte Layout (64 bytes total)
//! - Bytes 0-31:  claimant address (left-padded to 32 bytes)
//! - Bytes 32-63: amount (uint256, big-endian, left-padded)
//!
//! The leaf is the double keccak256 of that encoding. Hashing twice keeps a
//! crafted 64-byte leaf preimage from colliding with an interior node of the
//! tree (second-preimage mitigation).

use crate::address::Address;
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the claim leaf for a (claimant, amount) pair.
///
/// `keccak256(keccak256(claimant-as-32 || amount-as-32))` over the canonical
/// 64-byte encoding described in the module docs. Pure; recomputed per
/// verification call and never persisted.
pub fn claim_leaf(claimant: &Address, amount: u128) -> [u8; 32] {
    // Pre-allocate exact size: 2 * 32 = 64 bytes
    let mut data = [0u8; 64];

    data[0..32].copy_from_slice(&claimant.to_bytes32());

    // uint256 amount - left-padded to 32 bytes, big-endian
    // u128 (16 bytes) goes into bytes 16-31 of the slot
    let amount_bytes = amount.to_be_bytes();
    data[32 + 16..64].copy_from_slice(&amount_bytes);

    keccak256(&keccak256(&data))
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to 32-byte array
pub fn hex_to_bytes32(s: &str) -> Result<[u8; 32], &'static str> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }

    let bytes = hex::decode(s).map_err(|_| "Invalid hex character")?;

    let mut result = [0u8; 32];
    result.copy_from_slice(&bytes);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// keccak256("hello") = 0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8
    #[test]
    fn test_keccak256_basic() {
        let result = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    /// Known vector for the full leaf computation.
    #[test]
    fn test_claim_leaf_vector() {
        let claimant = Address::from_hex("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();
        let leaf = claim_leaf(&claimant, 1_000_000);

        assert_eq!(
            bytes32_to_hex(&leaf),
            "0xfc537de115c359ef1881fc5aed311e2c1e9af83913b640c8044a2bd2f7c5ad03"
        );
    }

    /// The leaf is the double hash, not the single hash of the encoding.
    #[test]
    fn test_claim_leaf_is_double_hashed() {
        let claimant = Address::from_hex("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();

        let mut data = [0u8; 64];
        data[0..32].copy_from_slice(&claimant.to_bytes32());
        data[48..64].copy_from_slice(&1_000_000u128.to_be_bytes());

        let inner = keccak256(&data);
        assert_eq!(
            bytes32_to_hex(&inner),
            "0x02e41629b7ff74a03df2799a9baaa099415e65e1f22deb54b97a6359cc6100ee"
        );
        assert_eq!(claim_leaf(&claimant, 1_000_000), keccak256(&inner));
        assert_ne!(claim_leaf(&claimant, 1_000_000), inner);
    }

    /// Distinct claimants or amounts never share a leaf.
    #[test]
    fn test_claim_leaf_sensitivity() {
        let a = Address::from_hex("0x1111111111111111111111111111111111111111").unwrap();
        let b = Address::from_hex("0x2222222222222222222222222222222222222222").unwrap();

        assert_ne!(claim_leaf(&a, 10_000), claim_leaf(&b, 10_000));
        assert_ne!(claim_leaf(&a, 10_000), claim_leaf(&a, 10_001));
        assert_eq!(claim_leaf(&a, 10_000), claim_leaf(&a, 10_000));
    }

    #[test]
    fn test_hex_roundtrip() {
        let original = keccak256(b"roundtrip");
        let hex = bytes32_to_hex(&original);
        let parsed = hex_to_bytes32(&hex).unwrap();
        assert_eq!(parsed, original);

        // Also test without 0x prefix
        let parsed_no_prefix = hex_to_bytes32(&hex[2..]).unwrap();
        assert_eq!(parsed_no_prefix, original);
    }

    #[test]
    fn test_hex_to_bytes32_rejects_bad_input() {
        assert!(hex_to_bytes32("0x1234").is_err());
        assert!(hex_to_bytes32(&"zz".repeat(32)).is_err());
    }
}
