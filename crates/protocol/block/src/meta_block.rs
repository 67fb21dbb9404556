//! The metachain block and its epoch-start section.

use crate::{MiniBlockHeader, ShardId};
use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

/// A decoded metachain block.
///
/// Only epoch-start blocks carry a populated [`EpochStart`] section. For those blocks
/// [`Economics::prev_epoch_start_hash`] links back to the epoch-start block of the previous
/// epoch, which makes the epoch-start blocks a backward hash-linked list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaBlock {
    /// Sequential index of the block on the metachain.
    pub nonce: u64,
    /// Epoch the block belongs to.
    pub epoch: u32,
    /// Consensus round the block was proposed in.
    pub round: u64,
    /// Block timestamp, in seconds.
    pub timestamp: u64,
    /// Hash of the previous metachain block.
    pub prev_hash: Bytes,
    /// Randomness seed of the previous block.
    pub prev_rand_seed: Bytes,
    /// Randomness seed of this block.
    pub rand_seed: Bytes,
    /// Chain identifier.
    pub chain_id: Bytes,
    /// References to the miniblocks included in this block.
    pub mini_block_headers: Vec<MiniBlockHeader>,
    /// Epoch-start data; empty unless this is an epoch-start block.
    pub epoch_start: EpochStart,
}

impl MetaBlock {
    /// Returns `true` if the block opens a new epoch.
    pub fn is_start_of_epoch_block(&self) -> bool {
        !self.epoch_start.last_finalized_headers.is_empty()
    }

    /// Returns the hash of the epoch-start block of the previous epoch.
    pub fn prev_epoch_start_hash(&self) -> &Bytes {
        &self.epoch_start.economics.prev_epoch_start_hash
    }
}

/// Epoch-start section of a [`MetaBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochStart {
    /// Last finalized header of every shard at the epoch change.
    pub last_finalized_headers: Vec<EpochStartShardData>,
    /// Economics data computed at the epoch change.
    pub economics: Economics,
}

/// Per-shard data recorded in the epoch-start section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochStartShardData {
    /// The shard the data refers to.
    pub shard_id: ShardId,
    /// Epoch of the shard header.
    pub epoch: u32,
    /// Round of the shard header.
    pub round: u64,
    /// Nonce of the shard header.
    pub nonce: u64,
    /// Hash of the last finalized shard header.
    pub header_hash: Bytes,
    /// State root hash of the shard.
    pub root_hash: Bytes,
    /// First metablock the shard has not yet processed.
    pub first_pending_meta_block: Bytes,
    /// Last metablock the shard has fully processed.
    pub last_finished_meta_block: Bytes,
}

/// Economics data of an epoch-start block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economics {
    /// Total supply at the epoch change.
    pub total_supply: U256,
    /// Amount distributed as rewards for the closed epoch.
    pub total_to_distribute: U256,
    /// Amount minted during the closed epoch.
    pub total_newly_minted: U256,
    /// Reward per produced block.
    pub rewards_per_block: U256,
    /// Stake required to run a node.
    pub node_price: U256,
    /// Round of the previous epoch-start block.
    pub prev_epoch_start_round: u64,
    /// Hash of the previous epoch-start block.
    pub prev_epoch_start_hash: Bytes,
}
