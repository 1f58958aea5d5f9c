//! Altair external representation
//!
//! Drops the pending attestation lists and gains epoch participation flags,
//! sync committees and inactivity scores.

use super::phase0::BeaconStateBase;
use crate::{base::ByteList, state::containers::SyncCommittee, utility::serde::u64_list};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconStateAltair {
    #[serde(flatten)]
    pub base: BeaconStateBase,

    pub previous_epoch_participation: ByteList,
    pub current_epoch_participation: ByteList,

    #[serde(with = "u64_list")]
    pub inactivity_scores: Vec<u64>,

    pub current_sync_committee: SyncCommittee,
    pub next_sync_committee: SyncCommittee,
}
