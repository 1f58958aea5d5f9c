//! Deneb external representation
//!
//! Same field set as capella with the blob-gas header shape.

use super::altair::BeaconStateAltair;
use crate::{
    state::{containers::HistoricalSummary, execution::ExecutionPayloadHeaderDeneb},
    utility::serde::{from_dec, to_str},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateDeneb {
    #[serde(flatten)]
    pub altair: BeaconStateAltair,

    pub latest_execution_payload_header: ExecutionPayloadHeaderDeneb,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub next_withdrawal_index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub next_withdrawal_validator_index: u64,

    pub historical_summaries: Vec<HistoricalSummary>,
}
