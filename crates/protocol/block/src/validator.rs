//! Validator records carried by peer miniblocks.

use crate::ShardId;
use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// The status of one validator for a given epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardValidatorInfo {
    /// BLS public key of the validator.
    pub public_key: Bytes,
    /// Shard the validator is assigned to.
    pub shard_id: ShardId,
    /// Name of the list the validator is in (`eligible`, `waiting`, `leaving`, ...).
    pub list: String,
    /// Position of the validator inside its list.
    pub index: u32,
    /// Rating of the validator at the epoch change.
    pub temp_rating: u32,
}
