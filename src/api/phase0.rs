//! Genesis external representation

use crate::{
    base::{Bitvector, Root, Slot},
    constants::JUSTIFICATION_BITS_LENGTH,
    state::containers::{BlockHeader, Checkpoint, Eth1Data, Fork, PendingAttestation, Validator},
    utility::serde::{from_dec, to_str, u64_list},
};
use serde::{Deserialize, Serialize};

/// Fields shared by every fork's representation. Flattened into each
/// per-fork struct so the wire form stays a single flat object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateBase {
    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub genesis_time: u64,

    pub genesis_validators_root: Root,
    pub slot: Slot,
    pub fork: Fork,
    pub latest_block_header: BlockHeader,
    pub block_roots: Vec<Root>,
    pub state_roots: Vec<Root>,
    pub historical_roots: Vec<Root>,
    pub eth1_data: Eth1Data,
    pub eth1_data_votes: Vec<Eth1Data>,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub eth1_deposit_index: u64,

    pub validators: Vec<Validator>,

    #[serde(with = "u64_list")]
    pub balances: Vec<u64>,

    pub randao_mixes: Vec<Root>,

    #[serde(with = "u64_list")]
    pub slashings: Vec<u64>,

    pub justification_bits: Bitvector<JUSTIFICATION_BITS_LENGTH>,
    pub previous_justified_checkpoint: Checkpoint,
    pub current_justified_checkpoint: Checkpoint,
    pub finalized_checkpoint: Checkpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStatePhase0 {
    #[serde(flatten)]
    pub base: BeaconStateBase,

    pub previous_epoch_attestations: Vec<PendingAttestation>,
    pub current_epoch_attestations: Vec<PendingAttestation>,
}
