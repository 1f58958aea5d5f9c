//! Canonical consensus state
//!
//! The internal, authoritative state shape. It is owned and mutated by the
//! state-transition collaborator; this crate only reads it during extraction
//! and writes into a [`CanonicalStateBuilder`] during reconstruction. The
//! field set is the union over the fork chain: fields introduced after
//! genesis are `Option` and gated by the version tag, the thrice-overridden
//! payload header is a variant per shape.

pub mod containers;
pub mod execution;

use crate::{
    base::{Bitvector, ByteList, Epoch, Root, Slot},
    constants::JUSTIFICATION_BITS_LENGTH,
    error::{Result, SchemaError},
    fork::ForkVersion,
    schema::{self, ContainerKind, FieldKind, ResolvedSchema},
};
use containers::*;
use execution::ExecutionPayloadHeader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalState {
    pub version: ForkVersion,

    // phase0 base
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
    pub eth1_deposit_index: u64,
    pub validators: Vec<Validator>,
    pub balances: Vec<u64>,
    pub randao_mixes: Vec<Root>,
    pub slashings: Vec<u64>,
    pub justification_bits: Bitvector<JUSTIFICATION_BITS_LENGTH>,
    pub previous_justified_checkpoint: Checkpoint,
    pub current_justified_checkpoint: Checkpoint,
    pub finalized_checkpoint: Checkpoint,

    // phase0 only, removed by altair
    pub previous_epoch_attestations: Option<Vec<PendingAttestation>>,
    pub current_epoch_attestations: Option<Vec<PendingAttestation>>,

    // altair
    pub previous_epoch_participation: Option<ByteList>,
    pub current_epoch_participation: Option<ByteList>,
    pub inactivity_scores: Option<Vec<u64>>,
    pub current_sync_committee: Option<SyncCommittee>,
    pub next_sync_committee: Option<SyncCommittee>,

    // bellatrix, shape overridden by capella, deneb and eip7732
    pub latest_execution_payload_header: Option<ExecutionPayloadHeader>,

    // capella
    pub next_withdrawal_index: Option<u64>,
    pub next_withdrawal_validator_index: Option<u64>,
    pub historical_summaries: Option<Vec<HistoricalSummary>>,

    // electra
    pub deposit_requests_start_index: Option<u64>,
    pub deposit_balance_to_consume: Option<u64>,
    pub exit_balance_to_consume: Option<u64>,
    pub earliest_exit_epoch: Option<Epoch>,
    pub consolidation_balance_to_consume: Option<u64>,
    pub earliest_consolidation_epoch: Option<Epoch>,
    pub pending_balance_deposits: Option<Vec<PendingBalanceDeposit>>,
    pub pending_partial_withdrawals: Option<Vec<PendingPartialWithdrawal>>,
    pub pending_consolidations: Option<Vec<PendingConsolidation>>,

    // eip7732
    pub latest_block_hash: Option<Root>,
    pub latest_full_slot: Option<Slot>,
    pub latest_withdrawals_root: Option<Root>,
}

/////////////
// builder //
/////////////

// Every writable field of the builder, all unset. Kept separate from the
// version so a builder without a version is not constructible.
#[derive(Debug, Clone, Default)]
struct FieldSet {
    genesis_time: Option<u64>,
    genesis_validators_root: Option<Root>,
    slot: Option<Slot>,
    fork: Option<Fork>,
    latest_block_header: Option<BlockHeader>,
    block_roots: Option<Vec<Root>>,
    state_roots: Option<Vec<Root>>,
    historical_roots: Option<Vec<Root>>,
    eth1_data: Option<Eth1Data>,
    eth1_data_votes: Option<Vec<Eth1Data>>,
    eth1_deposit_index: Option<u64>,
    validators: Option<Vec<Validator>>,
    balances: Option<Vec<u64>>,
    randao_mixes: Option<Vec<Root>>,
    slashings: Option<Vec<u64>>,
    justification_bits: Option<Bitvector<JUSTIFICATION_BITS_LENGTH>>,
    previous_justified_checkpoint: Option<Checkpoint>,
    current_justified_checkpoint: Option<Checkpoint>,
    finalized_checkpoint: Option<Checkpoint>,
    previous_epoch_attestations: Option<Vec<PendingAttestation>>,
    current_epoch_attestations: Option<Vec<PendingAttestation>>,
    previous_epoch_participation: Option<ByteList>,
    current_epoch_participation: Option<ByteList>,
    inactivity_scores: Option<Vec<u64>>,
    current_sync_committee: Option<SyncCommittee>,
    next_sync_committee: Option<SyncCommittee>,
    latest_execution_payload_header: Option<ExecutionPayloadHeader>,
    next_withdrawal_index: Option<u64>,
    next_withdrawal_validator_index: Option<u64>,
    historical_summaries: Option<Vec<HistoricalSummary>>,
    deposit_requests_start_index: Option<u64>,
    deposit_balance_to_consume: Option<u64>,
    exit_balance_to_consume: Option<u64>,
    earliest_exit_epoch: Option<Epoch>,
    consolidation_balance_to_consume: Option<u64>,
    earliest_consolidation_epoch: Option<Epoch>,
    pending_balance_deposits: Option<Vec<PendingBalanceDeposit>>,
    pending_partial_withdrawals: Option<Vec<PendingPartialWithdrawal>>,
    pending_consolidations: Option<Vec<PendingConsolidation>>,
    latest_block_hash: Option<Root>,
    latest_full_slot: Option<Slot>,
    latest_withdrawals_root: Option<Root>,
}

/// Write-side of reconstruction. Exclusively owned by one conversion call;
/// [`CanonicalStateBuilder::build`] checks completeness against the resolved
/// schema of the builder's fork, so a state with a missing required field is
/// never observable. The only constructor is [`CanonicalStateBuilder::new`],
/// so every builder carries a version.
#[derive(Debug, Clone)]
pub struct CanonicalStateBuilder {
    version: ForkVersion,
    fields: FieldSet,
}

fn required<T>(version: ForkVersion, field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(SchemaError::MissingRequiredField { version, field })
}

// A fork-gated field must be present exactly when the resolved schema lists
// it. A value written for a field outside the schema is a caller defect; it
// is dropped, loudly in debug builds.
fn gated<T>(
    schema: &ResolvedSchema,
    field: &'static str,
    value: Option<T>,
) -> Result<Option<T>> {
    if schema.field(field).is_some() {
        required(schema.version, field, value).map(Some)
    } else {
        debug_assert!(
            value.is_none(),
            "field `{field}` is not part of fork {}",
            schema.version
        );
        Ok(None)
    }
}

macro_rules! setter {
    ($name:ident: $ty:ty) => {
        pub fn $name(&mut self, value: $ty) -> &mut Self {
            self.fields.$name = Some(value);
            self
        }
    };
}

impl CanonicalStateBuilder {
    pub fn new(version: ForkVersion) -> Self {
        Self {
            version,
            fields: FieldSet::default(),
        }
    }

    pub fn version(&self) -> ForkVersion {
        self.version
    }

    setter!(genesis_time: u64);
    setter!(genesis_validators_root: Root);
    setter!(slot: Slot);
    setter!(fork: Fork);
    setter!(latest_block_header: BlockHeader);
    setter!(block_roots: Vec<Root>);
    setter!(state_roots: Vec<Root>);
    setter!(historical_roots: Vec<Root>);
    setter!(eth1_data: Eth1Data);
    setter!(eth1_data_votes: Vec<Eth1Data>);
    setter!(eth1_deposit_index: u64);
    setter!(validators: Vec<Validator>);
    setter!(balances: Vec<u64>);
    setter!(randao_mixes: Vec<Root>);
    setter!(slashings: Vec<u64>);
    setter!(justification_bits: Bitvector<JUSTIFICATION_BITS_LENGTH>);
    setter!(previous_justified_checkpoint: Checkpoint);
    setter!(current_justified_checkpoint: Checkpoint);
    setter!(finalized_checkpoint: Checkpoint);
    setter!(previous_epoch_attestations: Vec<PendingAttestation>);
    setter!(current_epoch_attestations: Vec<PendingAttestation>);
    setter!(previous_epoch_participation: ByteList);
    setter!(current_epoch_participation: ByteList);
    setter!(inactivity_scores: Vec<u64>);
    setter!(current_sync_committee: SyncCommittee);
    setter!(next_sync_committee: SyncCommittee);
    setter!(latest_execution_payload_header: ExecutionPayloadHeader);
    setter!(next_withdrawal_index: u64);
    setter!(next_withdrawal_validator_index: u64);
    setter!(historical_summaries: Vec<HistoricalSummary>);
    setter!(deposit_requests_start_index: u64);
    setter!(deposit_balance_to_consume: u64);
    setter!(exit_balance_to_consume: u64);
    setter!(earliest_exit_epoch: Epoch);
    setter!(consolidation_balance_to_consume: u64);
    setter!(earliest_consolidation_epoch: Epoch);
    setter!(pending_balance_deposits: Vec<PendingBalanceDeposit>);
    setter!(pending_partial_withdrawals: Vec<PendingPartialWithdrawal>);
    setter!(pending_consolidations: Vec<PendingConsolidation>);
    setter!(latest_block_hash: Root);
    setter!(latest_full_slot: Slot);
    setter!(latest_withdrawals_root: Root);

    pub fn build(self) -> Result<CanonicalState> {
        let version = self.version;
        let schema = schema::resolve(version);
        let fields = self.fields;

        let latest_execution_payload_header = gated(
            schema,
            "latest_execution_payload_header",
            fields.latest_execution_payload_header,
        )?;

        // the header written must be the shape this fork's schema expects
        if let Some(header) = &latest_execution_payload_header {
            let expected = match schema
                .field("latest_execution_payload_header")
                .map(|f| f.kind)
            {
                Some(FieldKind::Container(kind)) => kind,
                _ => unreachable!("header field is a container"),
            };

            let matches_shape = matches!(
                (expected, header),
                (
                    ContainerKind::ExecutionPayloadHeaderBellatrix,
                    ExecutionPayloadHeader::Bellatrix(_)
                ) | (
                    ContainerKind::ExecutionPayloadHeaderCapella,
                    ExecutionPayloadHeader::Capella(_)
                ) | (
                    ContainerKind::ExecutionPayloadHeaderDeneb,
                    ExecutionPayloadHeader::Deneb(_)
                ) | (
                    ContainerKind::ExecutionPayloadHeaderEip7732,
                    ExecutionPayloadHeader::Eip7732(_)
                )
            );

            if !matches_shape {
                return Err(SchemaError::SchemaVersionMismatch {
                    state: header.shape_fork(),
                    requested: version,
                });
            }
        }

        Ok(CanonicalState {
            version,
            genesis_time: required(version, "genesis_time", fields.genesis_time)?,
            genesis_validators_root: required(
                version,
                "genesis_validators_root",
                fields.genesis_validators_root,
            )?,
            slot: required(version, "slot", fields.slot)?,
            fork: required(version, "fork", fields.fork)?,
            latest_block_header: required(
                version,
                "latest_block_header",
                fields.latest_block_header,
            )?,
            block_roots: required(version, "block_roots", fields.block_roots)?,
            state_roots: required(version, "state_roots", fields.state_roots)?,
            historical_roots: required(version, "historical_roots", fields.historical_roots)?,
            eth1_data: required(version, "eth1_data", fields.eth1_data)?,
            eth1_data_votes: required(version, "eth1_data_votes", fields.eth1_data_votes)?,
            eth1_deposit_index: required(
                version,
                "eth1_deposit_index",
                fields.eth1_deposit_index,
            )?,
            validators: required(version, "validators", fields.validators)?,
            balances: required(version, "balances", fields.balances)?,
            randao_mixes: required(version, "randao_mixes", fields.randao_mixes)?,
            slashings: required(version, "slashings", fields.slashings)?,
            justification_bits: required(
                version,
                "justification_bits",
                fields.justification_bits,
            )?,
            previous_justified_checkpoint: required(
                version,
                "previous_justified_checkpoint",
                fields.previous_justified_checkpoint,
            )?,
            current_justified_checkpoint: required(
                version,
                "current_justified_checkpoint",
                fields.current_justified_checkpoint,
            )?,
            finalized_checkpoint: required(
                version,
                "finalized_checkpoint",
                fields.finalized_checkpoint,
            )?,
            previous_epoch_attestations: gated(
                schema,
                "previous_epoch_attestations",
                fields.previous_epoch_attestations,
            )?,
            current_epoch_attestations: gated(
                schema,
                "current_epoch_attestations",
                fields.current_epoch_attestations,
            )?,
            previous_epoch_participation: gated(
                schema,
                "previous_epoch_participation",
                fields.previous_epoch_participation,
            )?,
            current_epoch_participation: gated(
                schema,
                "current_epoch_participation",
                fields.current_epoch_participation,
            )?,
            inactivity_scores: gated(schema, "inactivity_scores", fields.inactivity_scores)?,
            current_sync_committee: gated(
                schema,
                "current_sync_committee",
                fields.current_sync_committee,
            )?,
            next_sync_committee: gated(schema, "next_sync_committee", fields.next_sync_committee)?,
            latest_execution_payload_header,
            next_withdrawal_index: gated(
                schema,
                "next_withdrawal_index",
                fields.next_withdrawal_index,
            )?,
            next_withdrawal_validator_index: gated(
                schema,
                "next_withdrawal_validator_index",
                fields.next_withdrawal_validator_index,
            )?,
            historical_summaries: gated(
                schema,
                "historical_summaries",
                fields.historical_summaries,
            )?,
            deposit_requests_start_index: gated(
                schema,
                "deposit_requests_start_index",
                fields.deposit_requests_start_index,
            )?,
            deposit_balance_to_consume: gated(
                schema,
                "deposit_balance_to_consume",
                fields.deposit_balance_to_consume,
            )?,
            exit_balance_to_consume: gated(
                schema,
                "exit_balance_to_consume",
                fields.exit_balance_to_consume,
            )?,
            earliest_exit_epoch: gated(schema, "earliest_exit_epoch", fields.earliest_exit_epoch)?,
            consolidation_balance_to_consume: gated(
                schema,
                "consolidation_balance_to_consume",
                fields.consolidation_balance_to_consume,
            )?,
            earliest_consolidation_epoch: gated(
                schema,
                "earliest_consolidation_epoch",
                fields.earliest_consolidation_epoch,
            )?,
            pending_balance_deposits: gated(
                schema,
                "pending_balance_deposits",
                fields.pending_balance_deposits,
            )?,
            pending_partial_withdrawals: gated(
                schema,
                "pending_partial_withdrawals",
                fields.pending_partial_withdrawals,
            )?,
            pending_consolidations: gated(
                schema,
                "pending_consolidations",
                fields.pending_consolidations,
            )?,
            latest_block_hash: gated(schema, "latest_block_hash", fields.latest_block_hash)?,
            latest_full_slot: gated(schema, "latest_full_slot", fields.latest_full_slot)?,
            latest_withdrawals_root: gated(
                schema,
                "latest_withdrawals_root",
                fields.latest_withdrawals_root,
            )?,
        })
    }
}
