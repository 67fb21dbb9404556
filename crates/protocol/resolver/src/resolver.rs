//! Resolution of single raw blocks into typed headers.

use crate::{RawHeaderResolverBuilder, ResolverError};
use metachain_block::{METACHAIN_SHARD_ID, Marshaller, MetaBlock, ShardHeader, ShardId};
use metachain_proxy::{Proxy, ProxyError};
use tokio_util::sync::CancellationToken;

/// Resolves raw block data served by a [`Proxy`] into typed headers and validator snapshots.
///
/// The resolver holds no state besides its two collaborators, so a single instance can serve
/// concurrent requests. Every operation takes a [`CancellationToken`]; cancelling it aborts the
/// pending proxy request and fails the operation with [`ResolverError::Cancelled`].
#[derive(Debug, Clone)]
pub struct RawHeaderResolver<P, M> {
    /// The source of raw block bytes.
    pub(crate) proxy: P,
    /// The codec used to decode raw bytes.
    pub(crate) marshaller: M,
}

impl<P, M> RawHeaderResolver<P, M>
where
    P: Proxy,
    M: Marshaller,
{
    /// Creates a new [`RawHeaderResolver`].
    pub const fn new(proxy: P, marshaller: M) -> Self {
        Self { proxy, marshaller }
    }

    /// Returns an empty [`RawHeaderResolverBuilder`].
    pub const fn builder() -> RawHeaderResolverBuilder<P, M> {
        RawHeaderResolverBuilder::new()
    }

    /// Returns the proxy used by the resolver.
    pub const fn proxy(&self) -> &P {
        &self.proxy
    }

    /// Returns the marshaller used by the resolver.
    pub const fn marshaller(&self) -> &M {
        &self.marshaller
    }

    /// Fetches and decodes the metablock with the given hex encoded hash.
    ///
    /// Fails with [`ResolverError::BlockNotFound`] if the proxy does not know the block.
    pub async fn meta_block_by_hash(
        &self,
        cancel: &CancellationToken,
        hash: &str,
    ) -> Result<MetaBlock, ResolverError> {
        self.lookup_meta_block(cancel, hash).await?.ok_or_else(|| ResolverError::BlockNotFound {
            shard: METACHAIN_SHARD_ID,
            hash: hash.to_string(),
        })
    }

    /// Fetches and decodes the header with the given hex encoded hash from `shard`.
    pub async fn shard_block_by_hash(
        &self,
        cancel: &CancellationToken,
        shard: ShardId,
        hash: &str,
    ) -> Result<ShardHeader, ResolverError> {
        let bytes = cancellable(cancel, self.proxy.raw_block_by_hash(shard, hash))
            .await?
            .ok_or_else(|| ResolverError::BlockNotFound { shard, hash: hash.to_string() })?;

        let header: ShardHeader = self.marshaller.unmarshal(&bytes)?;
        trace!(
            target: "header_resolver",
            shard,
            hash,
            nonce = header.nonce,
            epoch = header.epoch,
            "Resolved shard header"
        );
        Ok(header)
    }

    /// Fetches and decodes the most recent epoch-start metablock.
    pub async fn last_epoch_start_meta_block(
        &self,
        cancel: &CancellationToken,
    ) -> Result<MetaBlock, ResolverError> {
        let nonce =
            cancellable(cancel, self.proxy.nonce_at_epoch_start(METACHAIN_SHARD_ID)).await?;
        let bytes =
            cancellable(cancel, self.proxy.raw_block_by_nonce(METACHAIN_SHARD_ID, nonce)).await?;

        let meta_block: MetaBlock = self.marshaller.unmarshal(&bytes)?;
        debug!(
            target: "header_resolver",
            nonce,
            epoch = meta_block.epoch,
            "Resolved last epoch-start metablock"
        );
        Ok(meta_block)
    }

    /// Fetches and decodes the metablock with the given hex encoded hash.
    ///
    /// Returns `Ok(None)` if the proxy reports the block as absent.
    pub(crate) async fn lookup_meta_block(
        &self,
        cancel: &CancellationToken,
        hash: &str,
    ) -> Result<Option<MetaBlock>, ResolverError> {
        let Some(bytes) =
            cancellable(cancel, self.proxy.raw_block_by_hash(METACHAIN_SHARD_ID, hash)).await?
        else {
            return Ok(None);
        };

        let meta_block: MetaBlock = self.marshaller.unmarshal(&bytes)?;
        trace!(
            target: "header_resolver",
            hash,
            nonce = meta_block.nonce,
            epoch = meta_block.epoch,
            "Resolved metablock"
        );
        Ok(Some(meta_block))
    }
}

/// Awaits a proxy request unless `cancel` fires first.
pub(crate) async fn cancellable<T, F>(
    cancel: &CancellationToken,
    request: F,
) -> Result<T, ResolverError>
where
    F: Future<Output = Result<T, ProxyError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ResolverError::Cancelled),
        res = request => Ok(res?),
    }
}
