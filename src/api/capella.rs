//! Capella external representation
//!
//! First fork to override the payload header shape; the withdrawal cursor
//! fields and historical summaries arrive here too.

use super::altair::BeaconStateAltair;
use crate::{
    state::{containers::HistoricalSummary, execution::ExecutionPayloadHeaderCapella},
    utility::serde::{from_dec, to_str},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateCapella {
    #[serde(flatten)]
    pub altair: BeaconStateAltair,

    pub latest_execution_payload_header: ExecutionPayloadHeaderCapella,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub next_withdrawal_index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub next_withdrawal_validator_index: u64,

    pub historical_summaries: Vec<HistoricalSummary>,
}
