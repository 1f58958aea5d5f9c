//! Bellatrix external representation

use super::altair::BeaconStateAltair;
use crate::state::execution::ExecutionPayloadHeaderBellatrix;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateBellatrix {
    #[serde(flatten)]
    pub altair: BeaconStateAltair,

    pub latest_execution_payload_header: ExecutionPayloadHeaderBellatrix,
}
