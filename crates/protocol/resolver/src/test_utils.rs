//! Test utilities for the resolver.

use alloy_primitives::{B256, Bytes, keccak256};
use async_trait::async_trait;
use metachain_block::{
    EpochStart, EpochStartShardData, JsonMarshaller, METACHAIN_SHARD_ID, Marshaller, MetaBlock,
    MiniBlock, MiniBlockHeader, MiniBlockType, ShardId, ShardValidatorInfo,
};
use metachain_proxy::{Proxy, ProxyError, test_utils::InMemoryProxy};
use mockall::mock;
use serde::Serialize;
use std::collections::HashSet;

mock! {
    #[derive(Debug)]
    pub Gateway {}

    #[async_trait]
    impl Proxy for Gateway {
        async fn raw_block_by_hash(&self, shard: ShardId, hash: &str) -> Result<Option<Bytes>, ProxyError>;
        async fn raw_block_by_nonce(&self, shard: ShardId, nonce: u64) -> Result<Bytes, ProxyError>;
        async fn raw_mini_block_by_hash(&self, shard: ShardId, hash: &str) -> Result<Bytes, ProxyError>;
        async fn nonce_at_epoch_start(&self, shard: ShardId) -> Result<u64, ProxyError>;
    }
}

/// Returns the hash under which the epoch-start metablock of `epoch` is served.
pub(crate) fn meta_block_hash(epoch: u32) -> B256 {
    keccak256(format!("epoch-start-{epoch}"))
}

/// Returns the hash of the peer miniblock included in the epoch-start metablock of `epoch`.
pub(crate) fn peer_mini_block_hash(epoch: u32) -> B256 {
    keccak256(format!("peer-{epoch}"))
}

/// Returns the hash of the transaction miniblock included in the epoch-start metablock of
/// `epoch`.
pub(crate) fn tx_mini_block_hash(epoch: u32) -> B256 {
    keccak256(format!("tx-{epoch}"))
}

/// Encodes `value` with the [`JsonMarshaller`].
pub(crate) fn encode<T: Serialize>(value: &T) -> Bytes {
    JsonMarshaller.marshal(value).unwrap().into()
}

/// Returns a validator record unique to `epoch` and `index`.
pub(crate) fn validator(epoch: u32, index: u32) -> ShardValidatorInfo {
    ShardValidatorInfo {
        public_key: keccak256(format!("validator-{epoch}-{index}")).into(),
        shard_id: index % 3,
        list: "eligible".to_string(),
        index,
        temp_rating: 5_000 + epoch,
    }
}

/// Returns a metachain miniblock of `block_type` carrying `entries`.
pub(crate) fn mini_block(block_type: MiniBlockType, entries: Vec<Bytes>) -> MiniBlock {
    MiniBlock {
        tx_hashes: entries,
        sender_shard_id: METACHAIN_SHARD_ID,
        receiver_shard_id: METACHAIN_SHARD_ID,
        block_type,
    }
}

/// Returns a peer miniblock carrying the encoded `validators`.
pub(crate) fn peer_mini_block(validators: &[ShardValidatorInfo]) -> MiniBlock {
    mini_block(MiniBlockType::PeerBlock, validators.iter().map(encode).collect())
}

/// Returns a miniblock header referencing `hash`.
pub(crate) fn mini_block_header(
    hash: B256,
    block_type: MiniBlockType,
    tx_count: usize,
) -> MiniBlockHeader {
    MiniBlockHeader {
        hash: hash.into(),
        sender_shard_id: METACHAIN_SHARD_ID,
        receiver_shard_id: METACHAIN_SHARD_ID,
        tx_count: tx_count as u32,
        block_type,
    }
}

/// A chain of epoch-start metablocks from epoch `0` up to a latest epoch.
///
/// Every epoch-start block references one transaction miniblock followed by one peer miniblock
/// with two validators, and links back to the epoch-start block of the previous epoch.
#[derive(Debug, Clone)]
pub(crate) struct ChainFixture {
    latest: u32,
    missing: HashSet<u32>,
}

impl ChainFixture {
    /// Creates a complete chain ending at `latest`.
    pub(crate) fn intact(latest: u32) -> Self {
        Self { latest, missing: HashSet::new() }
    }

    /// Removes the epoch-start block of `epoch` from the served data.
    pub(crate) fn without_epoch(mut self, epoch: u32) -> Self {
        self.missing.insert(epoch);
        self
    }

    /// Returns the validators recorded in the epoch-start block of `epoch`.
    pub(crate) fn validators(&self, epoch: u32) -> Vec<ShardValidatorInfo> {
        vec![validator(epoch, 0), validator(epoch, 1)]
    }

    /// Returns the randomness seed carried by the epoch-start block of `epoch`.
    pub(crate) fn randomness(&self, epoch: u32) -> Bytes {
        keccak256(format!("rand-{epoch}")).into()
    }

    /// Returns the epoch-start metablock of `epoch`.
    pub(crate) fn meta_block(&self, epoch: u32) -> MetaBlock {
        let mut meta_block = MetaBlock {
            nonce: Self::nonce(epoch),
            epoch,
            round: Self::nonce(epoch) + 7,
            timestamp: 1_600_000_000 + u64::from(epoch) * 86_400,
            prev_rand_seed: self.randomness(epoch),
            rand_seed: keccak256(format!("rand-{}", epoch + 1)).into(),
            chain_id: Bytes::from_static(b"1"),
            mini_block_headers: vec![
                mini_block_header(tx_mini_block_hash(epoch), MiniBlockType::TxBlock, 1),
                mini_block_header(peer_mini_block_hash(epoch), MiniBlockType::PeerBlock, 2),
            ],
            epoch_start: EpochStart {
                last_finalized_headers: vec![EpochStartShardData {
                    shard_id: 0,
                    epoch,
                    nonce: Self::nonce(epoch),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        if epoch > 0 {
            meta_block.epoch_start.economics.prev_epoch_start_hash =
                meta_block_hash(epoch - 1).into();
        }
        meta_block
    }

    /// Returns an [`InMemoryProxy`] serving every epoch-start block of the chain that was not
    /// removed, along with the miniblocks they reference.
    pub(crate) fn proxy(&self) -> InMemoryProxy {
        let mut proxy = InMemoryProxy::new()
            .with_epoch_start_nonce(METACHAIN_SHARD_ID, Self::nonce(self.latest));

        for epoch in (0..=self.latest).filter(|epoch| !self.missing.contains(epoch)) {
            let tx_hash: Bytes = keccak256(epoch.to_be_bytes()).into();
            let tx = mini_block(MiniBlockType::TxBlock, vec![tx_hash]);
            proxy = proxy
                .with_block(
                    METACHAIN_SHARD_ID,
                    meta_block_hash(epoch),
                    Some(Self::nonce(epoch)),
                    encode(&self.meta_block(epoch)),
                )
                .with_mini_block(METACHAIN_SHARD_ID, tx_mini_block_hash(epoch), encode(&tx))
                .with_mini_block(
                    METACHAIN_SHARD_ID,
                    peer_mini_block_hash(epoch),
                    encode(&peer_mini_block(&self.validators(epoch))),
                );
        }
        proxy
    }

    const fn nonce(epoch: u32) -> u64 {
        epoch as u64 * 1_000
    }
}
