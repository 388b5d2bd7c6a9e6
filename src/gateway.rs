//! Messaging gateway seam.
//!
//! The bridge consumes the external cross-chain messaging layer through this
//! trait only: query the current fee, publish a payload, get back an opaque
//! sequence number. The gateway's internal consensus, guardian voting, and
//! finality tracking are not represented here.

use thiserror::Error;

/// Batch ID tag for messages emitted by this bridge.
pub const CLAIM_BATCH_ID: u32 = 1;

/// Narrow contract over the external messaging layer.
///
/// Implementations wrap a real gateway client;
/// [`MockGateway`](crate::testing::MockGateway) provides a deterministic
/// in-memory double for exercising the bridge's error paths.
pub trait MessageGateway {
    /// The fee currently required to publish one message.
    ///
    /// The fee can change between calls, so the bridge queries it fresh on
    /// every publish instead of caching it.
    fn current_fee(&self) -> u128;

    /// Publish an encoded payload and return the gateway-assigned sequence
    /// number.
    ///
    /// Sequence numbers are opaque to the bridge and monotonically increasing
    /// per gateway. `finality_blocks` is the number of confirmations the
    /// gateway should wait before treating the message as final.
    fn publish_message(
        &mut self,
        batch_id: u32,
        payload: &[u8],
        finality_blocks: u8,
    ) -> Result<u64, GatewayError>;
}

/// Failures reported by the messaging gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("gateway is disabled")]
    Disabled,

    #[error("gateway rejected message: {0}")]
    Rejected(String),
}
