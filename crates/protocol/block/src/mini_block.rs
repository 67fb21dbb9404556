//! Miniblocks and the headers that reference them from a block.

use crate::ShardId;
use alloy_primitives::Bytes;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The content type of a [`MiniBlock`].
///
/// Encoded as a single `u8`. The values of the known types are part of the wire format and must
/// not change. Any other value decodes to [`MiniBlockType::Unknown`] and encodes back unchanged.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MiniBlockType {
    /// Ordinary transactions.
    #[default]
    TxBlock,
    /// State changes.
    StateBlock,
    /// Validator info records, one per entry.
    PeerBlock,
    /// Smart contract results.
    SmartContractResultBlock,
    /// Invalid transactions.
    InvalidBlock,
    /// Receipts.
    ReceiptBlock,
    /// Reward transactions.
    RewardsBlock,
    /// A type this crate does not know about.
    #[display("Unknown({_0})")]
    Unknown(u8),
}

impl From<u8> for MiniBlockType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::TxBlock,
            30 => Self::StateBlock,
            60 => Self::PeerBlock,
            90 => Self::SmartContractResultBlock,
            120 => Self::InvalidBlock,
            150 => Self::ReceiptBlock,
            255 => Self::RewardsBlock,
            other => Self::Unknown(other),
        }
    }
}

impl From<MiniBlockType> for u8 {
    fn from(value: MiniBlockType) -> Self {
        match value {
            MiniBlockType::TxBlock => 0,
            MiniBlockType::StateBlock => 30,
            MiniBlockType::PeerBlock => 60,
            MiniBlockType::SmartContractResultBlock => 90,
            MiniBlockType::InvalidBlock => 120,
            MiniBlockType::ReceiptBlock => 150,
            MiniBlockType::RewardsBlock => 255,
            MiniBlockType::Unknown(other) => other,
        }
    }
}

/// Reference to a [`MiniBlock`] carried inside a block header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniBlockHeader {
    /// Hash of the referenced miniblock.
    pub hash: Bytes,
    /// Shard the miniblock originates from.
    pub sender_shard_id: ShardId,
    /// Shard the miniblock is destined to.
    pub receiver_shard_id: ShardId,
    /// Number of entries in the miniblock.
    pub tx_count: u32,
    /// Content type of the miniblock.
    #[serde(rename = "type")]
    pub block_type: MiniBlockType,
}

/// A sub-block grouping entries of a single [`MiniBlockType`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniBlock {
    /// Ordered entries.
    ///
    /// For [`MiniBlockType::PeerBlock`] each entry is a serialized
    /// [`ShardValidatorInfo`](crate::ShardValidatorInfo) instead of a transaction hash. The
    /// field keeps its name so the encoded layout stays compatible.
    pub tx_hashes: Vec<Bytes>,
    /// Shard the miniblock is destined to.
    pub receiver_shard_id: ShardId,
    /// Shard the miniblock originates from.
    pub sender_shard_id: ShardId,
    /// Content type of the miniblock.
    #[serde(rename = "type")]
    pub block_type: MiniBlockType,
}

impl MiniBlock {
    /// Returns `true` if the entries of this miniblock are validator info records.
    pub fn is_peer_block(&self) -> bool {
        self.block_type == MiniBlockType::PeerBlock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MiniBlockType::TxBlock, "0")]
    #[case(MiniBlockType::PeerBlock, "60")]
    #[case(MiniBlockType::RewardsBlock, "255")]
    fn test_mini_block_type_wire_value(#[case] block_type: MiniBlockType, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&block_type).unwrap(), expected);
    }

    #[rstest]
    #[case(0, MiniBlockType::TxBlock)]
    #[case(60, MiniBlockType::PeerBlock)]
    #[case(61, MiniBlockType::Unknown(61))]
    #[case(100, MiniBlockType::Unknown(100))]
    fn test_mini_block_type_from_wire(#[case] raw: u8, #[case] expected: MiniBlockType) {
        let decoded: MiniBlockType = serde_json::from_str(&raw.to_string()).unwrap();
        assert_eq!(decoded, expected);
        assert_eq!(u8::from(decoded), raw);
    }

    #[test]
    fn test_unknown_mini_block_type_decodes_as_non_peer() {
        let raw = r#"{"txHashes":["0x01"],"receiverShardId":0,"senderShardId":0,"type":100}"#;
        let mini_block: MiniBlock = serde_json::from_str(raw).unwrap();

        assert_eq!(mini_block.block_type, MiniBlockType::Unknown(100));
        assert_eq!(mini_block.block_type.to_string(), "Unknown(100)");
        assert!(!mini_block.is_peer_block());
        assert_eq!(serde_json::to_value(&mini_block).unwrap()["type"], 100);
    }

    #[test]
    fn test_mini_block_type_out_of_range_is_rejected() {
        assert!(serde_json::from_str::<MiniBlockType>("256").is_err());
    }

    #[test]
    fn test_is_peer_block() {
        let mut mini_block = MiniBlock::default();
        assert!(!mini_block.is_peer_block());

        mini_block.block_type = MiniBlockType::PeerBlock;
        assert!(mini_block.is_peer_block());
    }

    #[test]
    fn test_mini_block_keeps_tx_hashes_field_name() {
        let mini_block = MiniBlock {
            tx_hashes: vec![Bytes::from_static(&[0xab])],
            block_type: MiniBlockType::PeerBlock,
            ..Default::default()
        };
        let json = serde_json::to_value(&mini_block).unwrap();

        assert_eq!(json["txHashes"][0], "0xab");
        assert_eq!(json["type"], 60);
    }
}
