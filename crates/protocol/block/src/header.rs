//! The shard-chain block header.

use crate::{MiniBlockHeader, ShardId};
use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// A decoded shard-chain block header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardHeader {
    /// Sequential index of the block within its shard.
    pub nonce: u64,
    /// The shard that produced the block.
    pub shard_id: ShardId,
    /// Epoch the block belongs to.
    pub epoch: u32,
    /// Consensus round the block was proposed in.
    pub round: u64,
    /// Block timestamp, in seconds.
    pub timestamp: u64,
    /// Hash of the previous block in the shard.
    pub prev_hash: Bytes,
    /// Randomness seed of the previous block.
    pub prev_rand_seed: Bytes,
    /// Randomness seed of this block.
    pub rand_seed: Bytes,
    /// Chain identifier.
    pub chain_id: Bytes,
    /// Hash of the metachain epoch-start block this header was built on, if any.
    pub epoch_start_meta_hash: Bytes,
    /// References to the miniblocks included in this block.
    pub mini_block_headers: Vec<MiniBlockHeader>,
}

impl ShardHeader {
    /// Returns `true` if the header is the first one of its epoch in the shard.
    pub fn is_start_of_epoch_block(&self) -> bool {
        !self.epoch_start_meta_hash.is_empty()
    }
}
