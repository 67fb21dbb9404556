//! Errors of the raw header resolver.

use metachain_block::{CodecError, ShardId};
use metachain_proxy::ProxyError;
use thiserror::Error;

/// Errors that can occur while resolving blocks or validator snapshots.
///
/// Any error aborts the request it was raised in. The resolver itself stays usable.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// A required collaborator was not provided at construction.
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),

    /// The proxy failed to serve raw data.
    #[error("fetch error: {0}")]
    Fetch(#[from] ProxyError),

    /// Raw data could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] CodecError),

    /// The requested block does not exist.
    #[error("block {hash} not found in shard {shard}")]
    BlockNotFound {
        /// The shard the block was requested from.
        shard: ShardId,
        /// The hex encoded hash of the block.
        hash: String,
    },

    /// An epoch-start block links to a block that is not from an earlier epoch.
    #[error("epoch-start block of epoch {epoch} links to a block of epoch {predecessor_epoch}")]
    MalformedChain {
        /// Epoch of the block holding the link.
        epoch: u32,
        /// Epoch of the linked block.
        predecessor_epoch: u32,
    },

    /// The request was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,
}
