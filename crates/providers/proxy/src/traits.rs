//! The data-access boundary for raw block bytes.

use crate::ProxyError;
use alloy_primitives::Bytes;
use async_trait::async_trait;
use metachain_block::ShardId;
use std::sync::Arc;

/// Serves raw, still-encoded block data.
///
/// Hashes are passed as lowercase hex strings without a `0x` prefix, the format the gateway
/// routes expect.
#[async_trait]
pub trait Proxy: Send + Sync {
    /// Returns the raw block with the given hash in `shard`.
    ///
    /// `Ok(None)` means the block is not known to the data source. Callers decide whether that
    /// is an error.
    async fn raw_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Option<Bytes>, ProxyError>;

    /// Returns the raw block at `nonce` in `shard`.
    async fn raw_block_by_nonce(&self, shard: ShardId, nonce: u64) -> Result<Bytes, ProxyError>;

    /// Returns the raw miniblock with the given hash in `shard`.
    async fn raw_mini_block_by_hash(&self, shard: ShardId, hash: &str) -> Result<Bytes, ProxyError>;

    /// Returns the nonce of the most recent epoch-start block in `shard`.
    async fn nonce_at_epoch_start(&self, shard: ShardId) -> Result<u64, ProxyError>;
}

#[async_trait]
impl<P: Proxy + ?Sized> Proxy for Arc<P> {
    async fn raw_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Option<Bytes>, ProxyError> {
        (**self).raw_block_by_hash(shard, hash).await
    }

    async fn raw_block_by_nonce(&self, shard: ShardId, nonce: u64) -> Result<Bytes, ProxyError> {
        (**self).raw_block_by_nonce(shard, nonce).await
    }

    async fn raw_mini_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Bytes, ProxyError> {
        (**self).raw_mini_block_by_hash(shard, hash).await
    }

    async fn nonce_at_epoch_start(&self, shard: ShardId) -> Result<u64, ProxyError> {
        (**self).nonce_at_epoch_start(shard).await
    }
}

#[async_trait]
impl<P: Proxy + ?Sized> Proxy for &P {
    async fn raw_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Option<Bytes>, ProxyError> {
        (**self).raw_block_by_hash(shard, hash).await
    }

    async fn raw_block_by_nonce(&self, shard: ShardId, nonce: u64) -> Result<Bytes, ProxyError> {
        (**self).raw_block_by_nonce(shard, nonce).await
    }

    async fn raw_mini_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Bytes, ProxyError> {
        (**self).raw_mini_block_by_hash(shard, hash).await
    }

    async fn nonce_at_epoch_start(&self, shard: ShardId) -> Result<u64, ProxyError> {
        (**self).nonce_at_epoch_start(shard).await
    }
}
