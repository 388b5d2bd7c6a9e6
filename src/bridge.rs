//! Bridge orchestration: the two claim entry points plus administration.
//!
//! `initiate_claim` commits registry state *before* attempting the gateway
//! publish and does not roll it back if a later call's publish fails; the
//! owner-only `re_initiate_claim` is the designated recovery path for a
//! claimant stuck in that position.

use tracing::{info, warn};

use crate::address::Address;
use crate::config::GatewayConfig;
use crate::error::BridgeError;
use crate::gateway::{MessageGateway, CLAIM_BATCH_ID};
use crate::hash::{bytes32_to_hex, claim_leaf};
use crate::merkle::verify_proof;
use crate::message::ClaimPayload;
use crate::registry::ClaimRegistry;
use serde::{Deserialize, Serialize};

/// Record emitted for every accepted claim request.
///
/// This is the canonical hand-off artifact for off-chain observers and
/// destination-chain relayers; the sequence number identifies the published
/// gateway message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequestInitiated {
    pub claimant: Address,
    pub sequence: u64,
    pub destination: [u8; 32],
    pub amount: u128,
}

/// Cross-chain claim bridge.
///
/// Holds the immutable Merkle root and gateway configuration, the per-claimant
/// registry, and the gateway handle. The host ledger serializes calls, so no
/// internal locking exists; every operation runs to completion before the
/// next.
pub struct ClaimBridge<G: MessageGateway> {
    owner: Address,
    pending_owner: Option<Address>,
    bridge_address: Address,
    merkle_root: [u8; 32],
    gateway_config: GatewayConfig,
    paused: bool,
    registry: ClaimRegistry,
    gateway: G,
}

impl<G: MessageGateway> ClaimBridge<G> {
    /// Construct the bridge, validating every immutable parameter.
    ///
    /// Fails with [`BridgeError::InvalidRootHash`] for a zero root, and with
    /// the matching construction error for each violated gateway invariant.
    pub fn new(
        owner: Address,
        bridge_address: Address,
        merkle_root: [u8; 32],
        gateway_config: GatewayConfig,
        gateway: G,
    ) -> Result<Self, BridgeError> {
        if merkle_root == [0u8; 32] {
            return Err(BridgeError::InvalidRootHash);
        }
        gateway_config.validate()?;

        Ok(Self {
            owner,
            pending_owner: None,
            bridge_address,
            merkle_root,
            gateway_config,
            paused: false,
            registry: ClaimRegistry::new(),
            gateway,
        })
    }

    // ========================================================================
    // Claim Entry Points
    // ========================================================================

    /// Initiate a claim for `caller`.
    ///
    /// Verifies the Merkle proof for `(caller, amount)` against the fixed
    /// root, marks the caller initiated, then publishes the claim payload to
    /// the gateway. Registry state is committed before the publish: if the
    /// publish fails the caller stays marked and recovery goes through
    /// [`re_initiate_claim`](Self::re_initiate_claim).
    pub fn initiate_claim(
        &mut self,
        caller: Address,
        destination: [u8; 32],
        amount: u128,
        proof: &[[u8; 32]],
        fee_paid: u128,
    ) -> Result<ClaimRequestInitiated, BridgeError> {
        if self.paused {
            return Err(BridgeError::BridgePaused);
        }

        if self.registry.is_initiated(&caller) {
            return Err(BridgeError::AlreadyInitiated { claimant: caller });
        }

        let leaf = claim_leaf(&caller, amount);
        if !verify_proof(&leaf, proof, &self.merkle_root) {
            return Err(BridgeError::InvalidProof);
        }

        // Committed before publish; not rolled back if a publish in a later
        // call fails.
        self.registry.mark_initiated(&caller)?;

        let sequence = self.publish(&destination, amount, fee_paid)?;

        let record = ClaimRequestInitiated {
            claimant: caller,
            sequence,
            destination,
            amount,
        };

        info!(
            claimant = %caller,
            sequence,
            amount,
            destination = %bytes32_to_hex(&destination),
            "claim request initiated"
        );

        Ok(record)
    }

    /// Re-publish the claim message for a claimant who already initiated.
    ///
    /// Owner-only. Re-verifies the proof for `(on_behalf_of, amount)` and
    /// publishes again without touching registry state. This is the recovery
    /// path for a claim whose initial publish failed after the registry
    /// commit.
    pub fn re_initiate_claim(
        &mut self,
        caller: Address,
        destination: [u8; 32],
        on_behalf_of: Address,
        amount: u128,
        proof: &[[u8; 32]],
        fee_paid: u128,
    ) -> Result<ClaimRequestInitiated, BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::Unauthorized);
        }

        if self.paused {
            return Err(BridgeError::BridgePaused);
        }

        self.registry.require_initiated(&on_behalf_of)?;

        let leaf = claim_leaf(&on_behalf_of, amount);
        if !verify_proof(&leaf, proof, &self.merkle_root) {
            return Err(BridgeError::InvalidProof);
        }

        let sequence = self.publish(&destination, amount, fee_paid)?;

        let record = ClaimRequestInitiated {
            claimant: on_behalf_of,
            sequence,
            destination,
            amount,
        };

        info!(
            claimant = %on_behalf_of,
            sequence,
            amount,
            destination = %bytes32_to_hex(&destination),
            "claim request re-initiated"
        );

        Ok(record)
    }

    /// Check the fee and forward the encoded payload to the gateway.
    ///
    /// The fee is queried fresh on every call. No local state changes on
    /// failure.
    fn publish(
        &mut self,
        destination: &[u8; 32],
        amount: u128,
        fee_paid: u128,
    ) -> Result<u64, BridgeError> {
        let expected = self.gateway.current_fee();
        if fee_paid < expected {
            return Err(BridgeError::InsufficientFee {
                expected,
                got: fee_paid,
            });
        }

        let payload = ClaimPayload::new(*destination, amount).to_bytes();
        let sequence = self.gateway.publish_message(
            CLAIM_BATCH_ID,
            &payload,
            self.gateway_config.finality_blocks,
        )?;

        Ok(sequence)
    }

    // ========================================================================
    // Pause / Unpause
    // ========================================================================

    /// Pause claim-affecting operations. Owner-only.
    pub fn pause(&mut self, caller: Address) -> Result<(), BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::Unauthorized);
        }
        self.paused = true;
        warn!(owner = %caller, "bridge paused");
        Ok(())
    }

    /// Resume claim-affecting operations. Owner-only.
    pub fn unpause(&mut self, caller: Address) -> Result<(), BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::Unauthorized);
        }
        self.paused = false;
        info!(owner = %caller, "bridge unpaused");
        Ok(())
    }

    // ========================================================================
    // Owner Transfer
    // ========================================================================

    /// Propose a new owner. A mistyped address can still be superseded or
    /// cancelled because nothing changes until the proposed owner accepts.
    pub fn propose_owner(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::Unauthorized);
        }
        self.pending_owner = Some(new_owner);
        info!(new_owner = %new_owner, "owner change proposed");
        Ok(())
    }

    /// Accept a pending owner proposal. Only the proposed owner may call.
    pub fn accept_owner(&mut self, caller: Address) -> Result<(), BridgeError> {
        let pending = self.pending_owner.ok_or(BridgeError::NoPendingOwner)?;

        if caller != pending {
            return Err(BridgeError::UnauthorizedPendingOwner);
        }

        self.owner = pending;
        self.pending_owner = None;
        info!(owner = %pending, "owner change accepted");
        Ok(())
    }

    /// Withdraw a pending owner proposal. Owner-only.
    pub fn cancel_owner_proposal(&mut self, caller: Address) -> Result<(), BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::Unauthorized);
        }
        self.pending_owner = None;
        Ok(())
    }

    // ========================================================================
    // Read Accessors
    // ========================================================================

    /// The fee the gateway currently requires, queried fresh.
    pub fn current_gateway_fee(&self) -> u128 {
        self.gateway.current_fee()
    }

    /// This bridge's own address normalized to the destination chain's
    /// 32-byte identity format.
    pub fn emitter_identity(&self) -> [u8; 32] {
        self.bridge_address.to_bytes32()
    }

    /// Whether `claimant` has initiated a claim. Not gated by pause.
    pub fn is_initiated(&self, claimant: &Address) -> bool {
        self.registry.is_initiated(claimant)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.merkle_root
    }

    pub fn gateway_config(&self) -> &GatewayConfig {
        &self.gateway_config
    }

    /// Borrow the gateway handle. Lets the host inspect or reconfigure its
    /// gateway client; the bridge itself only ever goes through
    /// [`MessageGateway`].
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }
}
