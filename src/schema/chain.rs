//! The fork schema chain, genesis first
//!
//! Declarative patch list folded by [`super::resolve`]. Field order inside a
//! fork follows the protocol's container order.

use super::{Bound, ContainerKind, ElemKind, FieldDef, FieldKind, SchemaChange, SchemaPatch};
use crate::{constants::JUSTIFICATION_BITS_LENGTH, fork::ForkVersion};

const fn add(name: &'static str, kind: FieldKind) -> SchemaChange {
    SchemaChange::Add(FieldDef { name, kind })
}

const fn replace(name: &'static str, kind: FieldKind) -> SchemaChange {
    SchemaChange::Override(FieldDef { name, kind })
}

const PHASE0: &[SchemaChange] = &[
    add("genesis_time", FieldKind::Uint64),
    add("genesis_validators_root", FieldKind::Root),
    add("slot", FieldKind::Slot),
    add("fork", FieldKind::Container(ContainerKind::Fork)),
    add(
        "latest_block_header",
        FieldKind::Container(ContainerKind::BlockHeader),
    ),
    add(
        "block_roots",
        FieldKind::List(ElemKind::Root, Bound::SlotsPerHistoricalRoot),
    ),
    add(
        "state_roots",
        FieldKind::List(ElemKind::Root, Bound::SlotsPerHistoricalRoot),
    ),
    add(
        "historical_roots",
        FieldKind::List(ElemKind::Root, Bound::HistoricalRootsLimit),
    ),
    add("eth1_data", FieldKind::Container(ContainerKind::Eth1Data)),
    add(
        "eth1_data_votes",
        FieldKind::List(ElemKind::Eth1Data, Bound::Eth1DataVotesBound),
    ),
    add("eth1_deposit_index", FieldKind::Uint64),
    add(
        "validators",
        FieldKind::List(ElemKind::Validator, Bound::ValidatorRegistryLimit),
    ),
    add(
        "balances",
        FieldKind::List(ElemKind::Uint64, Bound::ValidatorRegistryLimit),
    ),
    add(
        "randao_mixes",
        FieldKind::List(ElemKind::Root, Bound::EpochsPerHistoricalVector),
    ),
    add(
        "slashings",
        FieldKind::List(ElemKind::Uint64, Bound::EpochsPerSlashingsVector),
    ),
    add(
        "previous_epoch_attestations",
        FieldKind::List(ElemKind::PendingAttestation, Bound::MaxPendingAttestations),
    ),
    add(
        "current_epoch_attestations",
        FieldKind::List(ElemKind::PendingAttestation, Bound::MaxPendingAttestations),
    ),
    add(
        "justification_bits",
        FieldKind::Bitvector(JUSTIFICATION_BITS_LENGTH),
    ),
    add(
        "previous_justified_checkpoint",
        FieldKind::Container(ContainerKind::Checkpoint),
    ),
    add(
        "current_justified_checkpoint",
        FieldKind::Container(ContainerKind::Checkpoint),
    ),
    add(
        "finalized_checkpoint",
        FieldKind::Container(ContainerKind::Checkpoint),
    ),
];

const ALTAIR: &[SchemaChange] = &[
    SchemaChange::Remove("previous_epoch_attestations"),
    SchemaChange::Remove("current_epoch_attestations"),
    add(
        "previous_epoch_participation",
        FieldKind::ByteList(Bound::ValidatorRegistryLimit),
    ),
    add(
        "current_epoch_participation",
        FieldKind::ByteList(Bound::ValidatorRegistryLimit),
    ),
    add(
        "inactivity_scores",
        FieldKind::List(ElemKind::Uint64, Bound::ValidatorRegistryLimit),
    ),
    add(
        "current_sync_committee",
        FieldKind::Container(ContainerKind::SyncCommittee),
    ),
    add(
        "next_sync_committee",
        FieldKind::Container(ContainerKind::SyncCommittee),
    ),
];

const BELLATRIX: &[SchemaChange] = &[add(
    "latest_execution_payload_header",
    FieldKind::Container(ContainerKind::ExecutionPayloadHeaderBellatrix),
)];

const CAPELLA: &[SchemaChange] = &[
    replace(
        "latest_execution_payload_header",
        FieldKind::Container(ContainerKind::ExecutionPayloadHeaderCapella),
    ),
    add("next_withdrawal_index", FieldKind::Uint64),
    add("next_withdrawal_validator_index", FieldKind::Uint64),
    add(
        "historical_summaries",
        FieldKind::List(ElemKind::HistoricalSummary, Bound::HistoricalRootsLimit),
    ),
];

// pure-override fork: the payload header gains blob gas accounting, nothing
// else moves
const DENEB: &[SchemaChange] = &[replace(
    "latest_execution_payload_header",
    FieldKind::Container(ContainerKind::ExecutionPayloadHeaderDeneb),
)];

const ELECTRA: &[SchemaChange] = &[
    add("deposit_requests_start_index", FieldKind::Uint64),
    add("deposit_balance_to_consume", FieldKind::Uint64),
    add("exit_balance_to_consume", FieldKind::Uint64),
    add("earliest_exit_epoch", FieldKind::Epoch),
    add("consolidation_balance_to_consume", FieldKind::Uint64),
    add("earliest_consolidation_epoch", FieldKind::Epoch),
    add(
        "pending_balance_deposits",
        FieldKind::List(
            ElemKind::PendingBalanceDeposit,
            Bound::PendingBalanceDepositsLimit,
        ),
    ),
    add(
        "pending_partial_withdrawals",
        FieldKind::List(
            ElemKind::PendingPartialWithdrawal,
            Bound::PendingPartialWithdrawalsLimit,
        ),
    ),
    add(
        "pending_consolidations",
        FieldKind::List(
            ElemKind::PendingConsolidation,
            Bound::PendingConsolidationsLimit,
        ),
    ),
];

const EIP7732: &[SchemaChange] = &[
    replace(
        "latest_execution_payload_header",
        FieldKind::Container(ContainerKind::ExecutionPayloadHeaderEip7732),
    ),
    add("latest_block_hash", FieldKind::Root),
    add("latest_full_slot", FieldKind::Slot),
    add("latest_withdrawals_root", FieldKind::Root),
];

pub const CHAIN: &[SchemaPatch] = &[
    SchemaPatch {
        version: ForkVersion::Phase0,
        changes: PHASE0,
    },
    SchemaPatch {
        version: ForkVersion::Altair,
        changes: ALTAIR,
    },
    SchemaPatch {
        version: ForkVersion::Bellatrix,
        changes: BELLATRIX,
    },
    SchemaPatch {
        version: ForkVersion::Capella,
        changes: CAPELLA,
    },
    SchemaPatch {
        version: ForkVersion::Deneb,
        changes: DENEB,
    },
    SchemaPatch {
        version: ForkVersion::Electra,
        changes: ELECTRA,
    },
    SchemaPatch {
        version: ForkVersion::Eip7732,
        changes: EIP7732,
    },
];
