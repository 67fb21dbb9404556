#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod shard;
pub use shard::{METACHAIN_SHARD_ID, ShardId};

mod mini_block;
pub use mini_block::{MiniBlock, MiniBlockHeader, MiniBlockType};

mod meta_block;
pub use meta_block::{Economics, EpochStart, EpochStartShardData, MetaBlock};

mod header;
pub use header::ShardHeader;

mod validator;
pub use validator::ShardValidatorInfo;

mod codec;
pub use codec::{CodecError, JsonMarshaller, Marshaller};
