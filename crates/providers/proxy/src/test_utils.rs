//! Test utilities for the proxy.

use crate::{Proxy, ProxyError};
use alloy_primitives::{Bytes, hex};
use async_trait::async_trait;
use metachain_block::ShardId;
use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, PoisonError},
};

/// A single request served by an [`InMemoryProxy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProxyCall {
    /// A block lookup by hash.
    BlockByHash(ShardId, String),
    /// A block lookup by nonce.
    BlockByNonce(ShardId, u64),
    /// A miniblock lookup by hash.
    MiniBlockByHash(ShardId, String),
    /// A query for the nonce of the last epoch-start block.
    NonceAtEpochStart(ShardId),
}

impl ProxyCall {
    /// Returns a [`ProxyCall::BlockByHash`] for the raw `hash`.
    pub fn block_by_hash(shard: ShardId, hash: impl AsRef<[u8]>) -> Self {
        Self::BlockByHash(shard, hex::encode(hash))
    }

    /// Returns a [`ProxyCall::MiniBlockByHash`] for the raw `hash`.
    pub fn mini_block_by_hash(shard: ShardId, hash: impl AsRef<[u8]>) -> Self {
        Self::MiniBlockByHash(shard, hex::encode(hash))
    }
}

/// An in-memory [`Proxy`] that records every call it serves.
///
/// Unknown blocks looked up by hash are reported as absent, every other unknown lookup fails
/// with [`ProxyError::NotFound`]. Calls registered with [`InMemoryProxy::with_failure`] fail
/// with [`ProxyError::Unavailable`].
#[derive(Debug, Default)]
pub struct InMemoryProxy {
    blocks: HashMap<(ShardId, String), Bytes>,
    blocks_by_nonce: HashMap<(ShardId, u64), Bytes>,
    mini_blocks: HashMap<(ShardId, String), Bytes>,
    epoch_start_nonces: HashMap<ShardId, u64>,
    failures: HashSet<ProxyCall>,
    calls: Mutex<Vec<ProxyCall>>,
}

impl InMemoryProxy {
    /// Creates an empty [`InMemoryProxy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a raw block under its hash and, if given, its nonce.
    pub fn with_block(
        mut self,
        shard: ShardId,
        hash: impl AsRef<[u8]>,
        nonce: Option<u64>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let bytes = bytes.into();
        if let Some(nonce) = nonce {
            self.blocks_by_nonce.insert((shard, nonce), bytes.clone());
        }
        self.blocks.insert((shard, hex::encode(hash)), bytes);
        self
    }

    /// Registers a raw miniblock under its hash.
    pub fn with_mini_block(
        mut self,
        shard: ShardId,
        hash: impl AsRef<[u8]>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        self.mini_blocks.insert((shard, hex::encode(hash)), bytes.into());
        self
    }

    /// Sets the nonce of the last epoch-start block of `shard`.
    pub fn with_epoch_start_nonce(mut self, shard: ShardId, nonce: u64) -> Self {
        self.epoch_start_nonces.insert(shard, nonce);
        self
    }

    /// Makes `call` fail.
    pub fn with_failure(mut self, call: ProxyCall) -> Self {
        self.failures.insert(call);
        self
    }

    /// Returns every call served so far, in order.
    pub fn calls(&self) -> Vec<ProxyCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns the number of block lookups by hash served so far.
    pub fn block_by_hash_calls(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, ProxyCall::BlockByHash(..))).count()
    }

    fn record(&self, call: ProxyCall) -> Result<(), ProxyError> {
        let failing = self.failures.contains(&call);
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call.clone());
        if failing {
            return Err(ProxyError::Unavailable(format!("{call:?}")));
        }
        Ok(())
    }
}

#[async_trait]
impl Proxy for InMemoryProxy {
    async fn raw_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Option<Bytes>, ProxyError> {
        self.record(ProxyCall::BlockByHash(shard, hash.to_string()))?;
        Ok(self.blocks.get(&(shard, hash.to_string())).cloned())
    }

    async fn raw_block_by_nonce(&self, shard: ShardId, nonce: u64) -> Result<Bytes, ProxyError> {
        self.record(ProxyCall::BlockByNonce(shard, nonce))?;
        self.blocks_by_nonce
            .get(&(shard, nonce))
            .cloned()
            .ok_or_else(|| ProxyError::NotFound(format!("block {nonce} in shard {shard}")))
    }

    async fn raw_mini_block_by_hash(
        &self,
        shard: ShardId,
        hash: &str,
    ) -> Result<Bytes, ProxyError> {
        self.record(ProxyCall::MiniBlockByHash(shard, hash.to_string()))?;
        self.mini_blocks
            .get(&(shard, hash.to_string()))
            .cloned()
            .ok_or_else(|| ProxyError::NotFound(format!("miniblock {hash} in shard {shard}")))
    }

    async fn nonce_at_epoch_start(&self, shard: ShardId) -> Result<u64, ProxyError> {
        self.record(ProxyCall::NonceAtEpochStart(shard))?;
        self.epoch_start_nonces
            .get(&shard)
            .copied()
            .ok_or_else(|| ProxyError::NotFound(format!("epoch start nonce of shard {shard}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metachain_block::METACHAIN_SHARD_ID;

    #[tokio::test]
    async fn test_in_memory_proxy_serves_and_records() {
        let proxy = InMemoryProxy::new()
            .with_block(METACHAIN_SHARD_ID, [0xaau8], Some(7), vec![1u8])
            .with_epoch_start_nonce(METACHAIN_SHARD_ID, 7);

        assert_eq!(proxy.nonce_at_epoch_start(METACHAIN_SHARD_ID).await.unwrap(), 7);
        assert_eq!(
            proxy.raw_block_by_nonce(METACHAIN_SHARD_ID, 7).await.unwrap(),
            Bytes::from(vec![1u8])
        );
        assert_eq!(
            proxy.raw_block_by_hash(METACHAIN_SHARD_ID, "aa").await.unwrap(),
            Some(Bytes::from(vec![1u8]))
        );
        assert_eq!(proxy.raw_block_by_hash(METACHAIN_SHARD_ID, "bb").await.unwrap(), None);
        assert_eq!(proxy.block_by_hash_calls(), 2);
        assert_eq!(proxy.calls()[0], ProxyCall::NonceAtEpochStart(METACHAIN_SHARD_ID));
    }

    #[tokio::test]
    async fn test_in_memory_proxy_injected_failure() {
        let proxy = InMemoryProxy::new()
            .with_mini_block(METACHAIN_SHARD_ID, [0x01u8], vec![0u8])
            .with_failure(ProxyCall::mini_block_by_hash(METACHAIN_SHARD_ID, [0x01u8]));

        let err = proxy.raw_mini_block_by_hash(METACHAIN_SHARD_ID, "01").await.unwrap_err();
        assert!(matches!(err, ProxyError::Unavailable(_)));
    }
}
