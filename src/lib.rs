//! Claim Bridge Core - Merkle-Verified Cross-Chain Claim Requests
//!
//! A party proves entitlement to a token amount with a Merkle inclusion proof
//! against a root fixed at construction; the bridge records the claim exactly
//! once and hands a deterministically encoded message to the external
//! cross-chain messaging gateway for consumption on the destination network.
//!
//! # Claim Flow
//! 1. Claimant calls [`ClaimBridge::initiate_claim`] with a proof for
//!    `(claimant, amount)` and the gateway fee
//! 2. The bridge verifies the proof, marks the claimant initiated, and
//!    publishes the tight-packed claim payload to the gateway
//! 3. Off-chain observers pick up the emitted [`ClaimRequestInitiated`]
//!    record and relay the sequence-numbered message to the destination chain
//!
//! # Recovery Flow
//! Registry state commits before the publish, so a claimant whose publish
//! failed stays marked initiated. The owner retries the publish with
//! [`ClaimBridge::re_initiate_claim`]; the registry is not touched again.
//!
//! # Security
//! - Double-hashed leaves (second-preimage mitigation)
//! - Sorted-pair proof verification matching the off-chain tree builder
//! - At-most-one initiation per claimant
//! - Emergency pause gating all claim-affecting operations
//! - Two-step owner transfer

pub mod address;
pub mod bridge;
pub mod config;
pub mod error;
pub mod gateway;
pub mod hash;
pub mod merkle;
pub mod message;
pub mod registry;
pub mod testing;

pub use crate::address::Address;
pub use crate::bridge::{ClaimBridge, ClaimRequestInitiated};
pub use crate::config::GatewayConfig;
pub use crate::error::BridgeError;
pub use crate::gateway::{GatewayError, MessageGateway, CLAIM_BATCH_ID};
pub use crate::hash::{claim_leaf, keccak256};
pub use crate::merkle::{hash_pair, verify_proof};
pub use crate::message::{ClaimPayload, PAYLOAD_ID_CLAIM};
pub use crate::registry::ClaimRegistry;
