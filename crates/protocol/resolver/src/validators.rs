//! Extraction of validator records from the peer miniblocks of a metablock.

use crate::{RawHeaderResolver, ResolverError, resolver::cancellable};
use alloy_primitives::hex;
use futures::future::try_join_all;
use metachain_block::{
    METACHAIN_SHARD_ID, Marshaller, MetaBlock, MiniBlock, MiniBlockHeader, ShardValidatorInfo,
};
use metachain_proxy::Proxy;
use tokio_util::sync::CancellationToken;

impl<P, M> RawHeaderResolver<P, M>
where
    P: Proxy,
    M: Marshaller,
{
    /// Returns the validator records carried by the peer miniblocks of `meta_block`.
    ///
    /// Every referenced miniblock is fetched from the metachain and decoded. Miniblocks of any
    /// other type are skipped. Records keep the order of the miniblock headers, then the order
    /// of the entries inside each miniblock. A block without peer miniblocks yields an empty
    /// list.
    ///
    /// Miniblocks are fetched concurrently. The first failure aborts the extraction.
    pub async fn validators_info(
        &self,
        cancel: &CancellationToken,
        meta_block: &MetaBlock,
    ) -> Result<Vec<ShardValidatorInfo>, ResolverError> {
        let per_mini_block = try_join_all(
            meta_block.mini_block_headers.iter().map(|header| self.peer_entries(cancel, header)),
        )
        .await?;

        let validators: Vec<_> = per_mini_block.into_iter().flatten().collect();
        debug!(
            target: "validator_extractor",
            epoch = meta_block.epoch,
            mini_blocks = meta_block.mini_block_headers.len(),
            validators = validators.len(),
            "Extracted validators"
        );
        Ok(validators)
    }

    /// Fetches the miniblock referenced by `header` and decodes its entries if it is a peer
    /// miniblock.
    async fn peer_entries(
        &self,
        cancel: &CancellationToken,
        header: &MiniBlockHeader,
    ) -> Result<Vec<ShardValidatorInfo>, ResolverError> {
        let hash = hex::encode(&header.hash);
        let bytes =
            cancellable(cancel, self.proxy.raw_mini_block_by_hash(METACHAIN_SHARD_ID, &hash))
                .await?;

        let mini_block: MiniBlock = self.marshaller.unmarshal(&bytes)?;
        if !mini_block.is_peer_block() {
            trace!(
                target: "validator_extractor",
                hash = %hash,
                block_type = %mini_block.block_type,
                "Skipping miniblock"
            );
            return Ok(Vec::new());
        }

        mini_block
            .tx_hashes
            .iter()
            .map(|entry| self.marshaller.unmarshal(entry).map_err(ResolverError::from))
            .collect()
    }
}
