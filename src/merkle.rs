//! Merkle inclusion-proof verification.
//!
//! The off-chain tree is built with commutative pair hashing: at every level
//! the two children are keccak-hashed smaller-first (unsigned big-endian byte
//! order), so the tree carries no left/right position information and the
//! verifier mirrors the same rule. A proof is just the ordered list of sibling
//! hashes from the leaf up to the root.

use crate::hash::keccak256;

/// Hash a node pair in sorted order (smaller operand first).
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    // Exact size: 2 * 32 = 64 bytes
    let mut data = [0u8; 64];

    if a <= b {
        data[0..32].copy_from_slice(a);
        data[32..64].copy_from_slice(b);
    } else {
        data[0..32].copy_from_slice(b);
        data[32..64].copy_from_slice(a);
    }

    keccak256(&data)
}

/// Verify an inclusion proof for `leaf` against `root`.
///
/// Folds the sibling path into a running hash and compares the result with
/// the root. An empty proof is valid only for a single-leaf tree, where the
/// leaf is the root. Pure; no side effects.
pub fn verify_proof(leaf: &[u8; 32], proof: &[[u8; 32]], root: &[u8; 32]) -> bool {
    let mut computed = *leaf;
    for sibling in proof {
        computed = hash_pair(&computed, sibling);
    }
    computed == *root
}
