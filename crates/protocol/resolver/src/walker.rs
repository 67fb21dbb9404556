//! Backward walk over the epoch-start metablocks.

use crate::{RawHeaderResolver, ResolverError};
use alloy_primitives::{Bytes, hex};
use metachain_block::{Marshaller, ShardValidatorInfo};
use metachain_proxy::Proxy;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// The validator snapshot recorded at the start of an epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EpochValidators {
    /// Epoch of the epoch-start metablock the snapshot was read from.
    pub epoch: u32,
    /// Randomness seed of that metablock.
    pub randomness: Bytes,
    /// Validator records, in block order.
    pub validators: Vec<ShardValidatorInfo>,
}

impl<P, M> RawHeaderResolver<P, M>
where
    P: Proxy,
    M: Marshaller,
{
    /// Returns the validator snapshot recorded at the start of `epoch`.
    ///
    /// The walk starts at the most recent epoch-start metablock and follows the links to the
    /// epoch-start block of each previous epoch until it reaches `epoch`. It stops early, without
    /// error, at the first block whose predecessor is not known, and returns the snapshot of the
    /// last block it reached. The returned [`EpochValidators::epoch`] tells which block that was.
    ///
    /// An `epoch` of `0`, or one beyond the most recent epoch, yields the snapshot of the most
    /// recent epoch-start block.
    pub async fn validators_info_per_epoch(
        &self,
        cancel: &CancellationToken,
        epoch: u32,
    ) -> Result<EpochValidators, ResolverError> {
        let mut meta_block = self.last_epoch_start_meta_block(cancel).await?;
        let latest_epoch = meta_block.epoch;
        let mut hops = 0usize;

        while epoch <= meta_block.epoch {
            if epoch == 0 || epoch == meta_block.epoch {
                break;
            }

            let prev_hash = meta_block.prev_epoch_start_hash();
            if prev_hash.is_empty() {
                debug!(
                    target: "epoch_walker",
                    epoch = meta_block.epoch,
                    "Epoch-start block has no predecessor"
                );
                break;
            }

            let hash = hex::encode(prev_hash);
            let Some(predecessor) = self.lookup_meta_block(cancel, &hash).await? else {
                warn!(
                    target: "epoch_walker",
                    epoch = meta_block.epoch,
                    predecessor = %hash,
                    "Predecessor epoch-start block not found, stopping walk"
                );
                break;
            };

            // Epochs must strictly decrease along the links.
            if predecessor.epoch >= meta_block.epoch {
                return Err(ResolverError::MalformedChain {
                    epoch: meta_block.epoch,
                    predecessor_epoch: predecessor.epoch,
                });
            }

            trace!(
                target: "epoch_walker",
                from = meta_block.epoch,
                to = predecessor.epoch,
                "Stepped to previous epoch-start block"
            );
            meta_block = predecessor;
            hops += 1;
        }

        info!(
            target: "epoch_walker",
            requested = epoch,
            latest = latest_epoch,
            resolved = meta_block.epoch,
            hops,
            "Resolved epoch-start block"
        );

        let validators = self.validators_info(cancel, &meta_block).await?;
        Ok(EpochValidators {
            epoch: meta_block.epoch,
            randomness: meta_block.prev_rand_seed,
            validators,
        })
    }
}
