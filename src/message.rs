//! Cross-chain claim payload wire codec.
//!
//! The payload handed to the gateway is tightly packed with no padding
//! between fields, so the destination-chain consumer can slice it at fixed
//! offsets.
//!
//! # Byte Layout (65 bytes total)
//! - Byte 0:      payload ID (u8, value = 1)
//! - Bytes 1-32:  destination address (32 bytes)
//! - Bytes 33-64: amount (uint256, big-endian, left-padded)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload ID for a claim message. Encoded as the first wire byte.
pub const PAYLOAD_ID_CLAIM: u8 = 1;

/// Total encoded size: 1 + 32 + 32 bytes.
pub const CLAIM_PAYLOAD_LEN: usize = 65;

/// A claim recorded for consumption on the destination network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayload {
    /// Recipient account in the destination chain's 32-byte format.
    pub destination: [u8; 32],
    /// Claimed token amount.
    pub amount: u128,
}

impl ClaimPayload {
    pub fn new(destination: [u8; 32], amount: u128) -> Self {
        Self {
            destination,
            amount,
        }
    }

    /// Encode to the tight-packed wire format.
    pub fn to_bytes(&self) -> [u8; CLAIM_PAYLOAD_LEN] {
        let mut data = [0u8; CLAIM_PAYLOAD_LEN];

        data[0] = PAYLOAD_ID_CLAIM;
        data[1..33].copy_from_slice(&self.destination);

        // uint256 amount - left-padded, big-endian; u128 fills bytes 16-31
        // of the slot
        let amount_bytes = self.amount.to_be_bytes();
        data[33 + 16..65].copy_from_slice(&amount_bytes);

        data
    }

    /// Decode from wire bytes, rejecting wrong length, wrong payload ID, and
    /// amounts above the supported word size.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PayloadError> {
        if data.len() != CLAIM_PAYLOAD_LEN {
            return Err(PayloadError::InvalidLength { got: data.len() });
        }

        if data[0] != PAYLOAD_ID_CLAIM {
            return Err(PayloadError::InvalidPayloadId { got: data[0] });
        }

        let mut destination = [0u8; 32];
        destination.copy_from_slice(&data[1..33]);

        // The high 16 bytes of the amount slot must be zero for the value to
        // fit in u128.
        if data[33..49].iter().any(|&b| b != 0) {
            return Err(PayloadError::AmountOverflow);
        }

        let mut amount_bytes = [0u8; 16];
        amount_bytes.copy_from_slice(&data[49..65]);
        let amount = u128::from_be_bytes(amount_bytes);

        Ok(Self {
            destination,
            amount,
        })
    }
}

/// Wire decoding failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Invalid payload length: expected 65 bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("Invalid payload ID: expected 1, got {got}")]
    InvalidPayloadId { got: u8 },

    #[error("Amount exceeds 128 bits")]
    AmountOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let mut destination = [0u8; 32];
        destination[31] = 0xaa;
        let payload = ClaimPayload::new(destination, 10_000);

        let encoded = payload.to_bytes();
        assert_eq!(encoded.len(), CLAIM_PAYLOAD_LEN);

        // Payload ID
        assert_eq!(encoded[0], PAYLOAD_ID_CLAIM);
        // Destination, verbatim
        assert_eq!(&encoded[1..33], &destination);
        // Amount left-padding: 10_000 = 0x2710
        assert_eq!(&encoded[33..63], &[0u8; 30]);
        assert_eq!(&encoded[63..65], &[0x27, 0x10]);
    }

    #[test]
    fn test_roundtrip() {
        let payload = ClaimPayload::new([0x55u8; 32], u128::MAX);
        let decoded = ClaimPayload::from_bytes(&payload.to_bytes()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_decode_rejects_wrong_payload_id() {
        let mut encoded = ClaimPayload::new([0u8; 32], 1).to_bytes();
        encoded[0] = 2;

        assert_eq!(
            ClaimPayload::from_bytes(&encoded),
            Err(PayloadError::InvalidPayloadId { got: 2 })
        );
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let encoded = ClaimPayload::new([0u8; 32], 1).to_bytes();

        assert_eq!(
            ClaimPayload::from_bytes(&encoded[..64]),
            Err(PayloadError::InvalidLength { got: 64 })
        );

        let mut longer = encoded.to_vec();
        longer.push(0);
        assert_eq!(
            ClaimPayload::from_bytes(&longer),
            Err(PayloadError::InvalidLength { got: 66 })
        );
    }

    #[test]
    fn test_decode_rejects_oversized_amount() {
        let mut encoded = ClaimPayload::new([0u8; 32], 1).to_bytes();
        // Set a bit in the high half of the amount slot.
        encoded[33] = 0x01;

        assert_eq!(
            ClaimPayload::from_bytes(&encoded),
            Err(PayloadError::AmountOverflow)
        );
    }
}
