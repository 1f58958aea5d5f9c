//! State container types
//!
//! Shared between the canonical state and the external representations: the
//! scalar newtypes already carry their external string forms in their serde
//! impls, so a container serializes to its wire shape directly. Plain `u64`
//! fields go through the strict decimal helpers.

use crate::{
    base::{Bitlist, Epoch, Pubkey, Root, Slot, Version4},
    utility::serde::{from_dec, to_str},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fork {
    pub previous_version: Version4,
    pub current_version: Version4,
    pub epoch: Epoch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub slot: Slot,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub proposer_index: u64,

    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Root,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eth1Data {
    pub deposit_root: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub deposit_count: u64,

    pub block_hash: Root,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub pubkey: Pubkey,
    pub withdrawal_credentials: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub effective_balance: u64,

    pub slashed: bool,
    pub activation_eligibility_epoch: Epoch,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
    pub withdrawable_epoch: Epoch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationData {
    pub slot: Slot,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub index: u64,

    pub beacon_block_root: Root,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAttestation {
    pub aggregation_bits: Bitlist,
    pub data: AttestationData,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub inclusion_delay: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub proposer_index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCommittee {
    pub pubkeys: Vec<Pubkey>,
    pub aggregate_pubkey: Pubkey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalSummary {
    pub block_summary_root: Root,
    pub state_summary_root: Root,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingBalanceDeposit {
    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPartialWithdrawal {
    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub validator_index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub amount: u64,

    pub withdrawable_epoch: Epoch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingConsolidation {
    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub source_index: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub target_index: u64,
}
