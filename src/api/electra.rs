//! Electra external representation

use super::deneb::BeaconStateDeneb;
use crate::{
    base::Epoch,
    state::containers::{PendingBalanceDeposit, PendingConsolidation, PendingPartialWithdrawal},
    utility::serde::{from_dec, to_str},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateElectra {
    #[serde(flatten)]
    pub deneb: BeaconStateDeneb,

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
}
