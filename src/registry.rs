//! Per-claimant claim state.
//!
//! Two states per claimant: not initiated, initiated. The transition is
//! one-way within this core; redemption/completion happens off-system on the
//! destination chain, so there is no terminal `Claimed` state here. The
//! registry lives for the lifetime of the enclosing bridge and is mutated
//! only through the bridge entry points.

use crate::address::Address;
use crate::error::BridgeError;
use std::collections::HashMap;

/// Keyed store tracking which claimants have initiated a claim.
#[derive(Debug, Default)]
pub struct ClaimRegistry {
    initiated: HashMap<Address, bool>,
}

impl ClaimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `claimant` has initiated a claim. Pure read.
    pub fn is_initiated(&self, claimant: &Address) -> bool {
        self.initiated.get(claimant).copied().unwrap_or(false)
    }

    /// Transition `claimant` to initiated.
    ///
    /// Fails with [`BridgeError::AlreadyInitiated`] if the claimant has
    /// already initiated. Irreversible.
    pub fn mark_initiated(&mut self, claimant: &Address) -> Result<(), BridgeError> {
        if self.is_initiated(claimant) {
            return Err(BridgeError::AlreadyInitiated {
                claimant: *claimant,
            });
        }
        self.initiated.insert(*claimant, true);
        Ok(())
    }

    /// Fail with [`BridgeError::NotInitiated`] unless `claimant` has
    /// initiated. Does not change state; the re-initiation path retries the
    /// publish without a second transition.
    pub fn require_initiated(&self, claimant: &Address) -> Result<(), BridgeError> {
        if !self.is_initiated(claimant) {
            return Err(BridgeError::NotInitiated {
                claimant: *claimant,
            });
        }
        Ok(())
    }

    /// Number of claimants that have initiated.
    pub fn len(&self) -> usize {
        self.initiated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initiated.is_empty()
    }
}
