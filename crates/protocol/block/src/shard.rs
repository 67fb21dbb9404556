//! Shard identifiers.

/// Identifier of a shard. The metachain uses [`METACHAIN_SHARD_ID`].
pub type ShardId = u32;

/// The shard identifier reserved for the metachain.
pub const METACHAIN_SHARD_ID: ShardId = u32::MAX;
