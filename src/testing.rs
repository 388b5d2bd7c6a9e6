//! In-memory gateway double for deterministic testing.
//!
//! Lets tests dial the fee, force publish failures, and inspect exactly what
//! the bridge handed to the messaging layer, without a real cross-chain
//! network.

use crate::gateway::{GatewayError, MessageGateway};

/// A message recorded by [`MockGateway::publish_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub batch_id: u32,
    pub payload: Vec<u8>,
    pub finality_blocks: u8,
    pub sequence: u64,
}

/// Configurable in-memory [`MessageGateway`] implementation.
#[derive(Debug, Default)]
pub struct MockGateway {
    fee: u128,
    failure: Option<GatewayError>,
    next_sequence: u64,
    published: Vec<PublishedMessage>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fee(fee: u128) -> Self {
        Self {
            fee,
            ..Self::default()
        }
    }

    /// Change the fee reported by [`MessageGateway::current_fee`].
    pub fn set_fee(&mut self, fee: u128) {
        self.fee = fee;
    }

    /// Force every subsequent publish to fail with
    /// [`GatewayError::Disabled`].
    pub fn set_disabled(&mut self, disabled: bool) {
        self.failure = if disabled {
            Some(GatewayError::Disabled)
        } else {
            None
        };
    }

    /// Force every subsequent publish to fail with an arbitrary gateway
    /// error.
    pub fn set_failure(&mut self, failure: Option<GatewayError>) {
        self.failure = failure;
    }

    /// All messages accepted so far, in publish order.
    pub fn published(&self) -> &[PublishedMessage] {
        &self.published
    }
}

impl MessageGateway for MockGateway {
    fn current_fee(&self) -> u128 {
        self.fee
    }

    fn publish_message(
        &mut self,
        batch_id: u32,
        payload: &[u8],
        finality_blocks: u8,
    ) -> Result<u64, GatewayError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.published.push(PublishedMessage {
            batch_id,
            payload: payload.to_vec(),
            finality_blocks,
            sequence,
        });

        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_are_monotonic() {
        let mut gateway = MockGateway::new();

        assert_eq!(gateway.publish_message(1, b"first", 15), Ok(0));
        assert_eq!(gateway.publish_message(1, b"second", 15), Ok(1));
        assert_eq!(gateway.published().len(), 2);
        assert_eq!(gateway.published()[1].payload, b"second");
    }

    #[test]
    fn test_disabled_gateway_rejects_and_records_nothing() {
        let mut gateway = MockGateway::new();
        gateway.set_disabled(true);

        assert_eq!(
            gateway.publish_message(1, b"payload", 15),
            Err(GatewayError::Disabled)
        );
        assert!(gateway.published().is_empty());

        // Re-enabling resumes from the same sequence.
        gateway.set_disabled(false);
        assert_eq!(gateway.publish_message(1, b"payload", 15), Ok(0));
    }

    #[test]
    fn test_forced_rejection_carries_reason() {
        let mut gateway = MockGateway::new();
        gateway.set_failure(Some(GatewayError::Rejected("out of gas".to_string())));

        assert_eq!(
            gateway.publish_message(1, b"payload", 15),
            Err(GatewayError::Rejected("out of gas".to_string()))
        );

        gateway.set_failure(None);
        assert_eq!(gateway.publish_message(1, b"payload", 15), Ok(0));
    }

    #[test]
    fn test_fee_is_adjustable() {
        let mut gateway = MockGateway::with_fee(100);
        assert_eq!(gateway.current_fee(), 100);

        gateway.set_fee(250);
        assert_eq!(gateway.current_fee(), 250);
    }
}
