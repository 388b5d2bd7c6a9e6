//! Immutable gateway configuration.
//!
//! Validated once at bridge construction and never mutated afterwards; the
//! bridge reads it, never re-reads it from anywhere mutable.

use crate::address::Address;
use crate::error::BridgeError;
use serde::{Deserialize, Serialize};

/// Configuration for the external messaging gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// On-chain address of the gateway contract.
    pub gateway_address: Address,
    /// Chain ID of the network this bridge emits from.
    pub origin_chain_id: u16,
    /// Confirmations the gateway waits before a message is final.
    pub finality_blocks: u8,
}

impl GatewayConfig {
    pub fn new(
        gateway_address: Address,
        origin_chain_id: u16,
        finality_blocks: u8,
    ) -> Result<Self, BridgeError> {
        let config = Self {
            gateway_address,
            origin_chain_id,
            finality_blocks,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the construction invariants: non-zero gateway address, chain ID
    /// and finality both greater than zero.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.gateway_address.is_zero() {
            return Err(BridgeError::InvalidGatewayAddress);
        }
        if self.origin_chain_id == 0 {
            return Err(BridgeError::InvalidChainId {
                chain_id: self.origin_chain_id,
            });
        }
        if self.finality_blocks == 0 {
            return Err(BridgeError::InvalidFinality);
        }
        Ok(())
    }
}
