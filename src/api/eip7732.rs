//! Eip7732 external representation
//!
//! Carries every electra field but a different payload header shape, so the
//! electra struct cannot be flattened in; the capella/electra additions are
//! restated alongside the new payload-status fields.

use super::altair::BeaconStateAltair;
use crate::{
    base::{Epoch, Root, Slot},
    state::{
        containers::{
            HistoricalSummary, PendingBalanceDeposit, PendingConsolidation,
            PendingPartialWithdrawal,
        },
        execution::ExecutionPayloadHeaderEip7732,
    },
    utility::serde::{from_dec, to_str},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateEip7732 {
    #[serde(flatten)]
    pub altair: BeaconStateAltair,

    pub latest_execution_payload_header: ExecutionPayloadHeaderEip7732,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub next_withdrawal_index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub next_withdrawal_validator_index: u64,

    pub historical_summaries: Vec<HistoricalSummary>,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub deposit_requests_start_index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub deposit_balance_to_consume: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub exit_balance_to_consume: u64,

    pub earliest_exit_epoch: Epoch,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub consolidation_balance_to_consume: u64,

    pub earliest_consolidation_epoch: Epoch,

    pub pending_balance_deposits: Vec<PendingBalanceDeposit>,
    pub pending_partial_withdrawals: Vec<PendingPartialWithdrawal>,
    pub pending_consolidations: Vec<PendingConsolidation>,

    pub latest_block_hash: Root,
    pub latest_full_slot: Slot,
    pub latest_withdrawals_root: Root,
}
