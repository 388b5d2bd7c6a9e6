//! Error types for the claim bridge core.
//!
//! Every failure is surfaced synchronously to the caller of the entry point;
//! nothing is swallowed and there is no internal retry. Recovery from a failed
//! gateway publish is the owner-mediated
//! [`re_initiate_claim`](crate::bridge::ClaimBridge::re_initiate_claim).

use crate::address::Address;
use crate::gateway::GatewayError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BridgeError {
    // ========================================================================
    // Construction Errors
    // ========================================================================

    #[error("Invalid root hash: must be non-zero")]
    InvalidRootHash,

    #[error("Invalid gateway address: must be non-zero")]
    InvalidGatewayAddress,

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u16 },

    #[error("Invalid finality: must be greater than zero")]
    InvalidFinality,

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Claim already initiated for {claimant}")]
    AlreadyInitiated { claimant: Address },

    #[error("Claim not initiated for {claimant}")]
    NotInitiated { claimant: Address },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid Merkle proof")]
    InvalidProof,

    // ========================================================================
    // Funds & Gateway Errors
    // ========================================================================

    #[error("Insufficient fee: expected {expected}, got {got}")]
    InsufficientFee { expected: u128, got: u128 },

    #[error("Gateway publish failed: {0}")]
    GatewayPublishFailed(#[from] GatewayError),
}
