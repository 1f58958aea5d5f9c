//! Conversion engine
//!
//! [`from_canonical`] extracts the external representation of a fork version
//! from a canonical state; [`to_canonical`] folds an external representation
//! into a caller-supplied builder. Both walk the fork's resolved field list,
//! enforce every parameter-set list bound on the way through, and fail fast:
//! no partially assembled representation and no partially usable builder
//! escapes on error.
//!
//! Version compatibility: a requested version newer than the state's is
//! rejected up front. An older request is honored exactly when every field
//! of the requested schema is still derivable from the state; a removed
//! field or a foreign payload-header shape makes it a version mismatch.

use crate::{
    api::{
        BeaconStateAltair, BeaconStateBase, BeaconStateBellatrix, BeaconStateCapella,
        BeaconStateDeneb, BeaconStateEip7732, BeaconStateElectra, BeaconStatePhase0,
        ExternalBeaconState,
    },
    error::{Result, SchemaError},
    fork::ForkVersion,
    params::ForkParams,
    schema::{self, ResolvedSchema},
    state::{
        containers::{
            HistoricalSummary, PendingAttestation, PendingBalanceDeposit, PendingConsolidation,
            PendingPartialWithdrawal, SyncCommittee,
        },
        execution::{
            ExecutionPayloadHeader, ExecutionPayloadHeaderBellatrix,
            ExecutionPayloadHeaderCapella, ExecutionPayloadHeaderDeneb,
            ExecutionPayloadHeaderEip7732,
        },
        CanonicalState, CanonicalStateBuilder,
    },
};
use log::trace;

/////////////
// helpers //
/////////////

fn mismatch(state: ForkVersion, requested: ForkVersion) -> SchemaError {
    SchemaError::SchemaVersionMismatch { state, requested }
}

/// Bound check for a top-level list field, against the resolved schema's
/// declared bound under the given parameter set
fn ensure_len(
    schema: &ResolvedSchema,
    params: &ForkParams,
    field: &'static str,
    len: usize,
) -> Result<()> {
    let max = schema
        .bound(field, params)
        .unwrap_or_else(|| panic!("`{field}` is a bounded list field"));

    if len as u64 > max {
        return Err(SchemaError::ListLengthExceeded { field, len, max });
    }
    Ok(())
}

/// A fork-gated canonical field, or a version mismatch when the state cannot
/// supply it for the requested version
fn require<'a, T>(
    value: &'a Option<T>,
    state: &CanonicalState,
    requested: ForkVersion,
) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| mismatch(state.version, requested))
}

fn checked_attestations(
    atts: &[PendingAttestation],
    field: &'static str,
    schema: &ResolvedSchema,
    params: &ForkParams,
) -> Result<Vec<PendingAttestation>> {
    ensure_len(schema, params, field, atts.len())?;

    for att in atts {
        let len = att.aggregation_bits.len();
        let max = params.max_validators_per_committee();
        if len as u64 > max {
            return Err(SchemaError::ListLengthExceeded {
                field: "aggregation_bits",
                len,
                max,
            });
        }
    }

    Ok(atts.to_vec())
}

fn checked_sync_committee(
    committee: &SyncCommittee,
    params: &ForkParams,
) -> Result<SyncCommittee> {
    let len = committee.pubkeys.len();
    let max = params.sync_committee_size();
    if len as u64 > max {
        return Err(SchemaError::ListLengthExceeded {
            field: "pubkeys",
            len,
            max,
        });
    }

    Ok(committee.clone())
}

fn check_extra_data(len: usize, params: &ForkParams) -> Result<()> {
    let max = params.max_extra_data_bytes();
    if len as u64 > max {
        return Err(SchemaError::ListLengthExceeded {
            field: "extra_data",
            len,
            max,
        });
    }
    Ok(())
}

fn checked_summaries(
    summaries: &[HistoricalSummary],
    schema: &ResolvedSchema,
    params: &ForkParams,
) -> Result<Vec<HistoricalSummary>> {
    ensure_len(schema, params, "historical_summaries", summaries.len())?;
    Ok(summaries.to_vec())
}

////////////////
// extraction //
////////////////

/// Extract the external representation of `version` from a canonical state.
/// Read-only with respect to the state; all list bounds are enforced on the
/// way out.
pub fn from_canonical(
    state: &CanonicalState,
    version: ForkVersion,
    params: &ForkParams,
) -> Result<ExternalBeaconState> {
    trace!(
        "extracting {version} representation from a {} state at slot {}",
        state.version,
        state.slot
    );

    if version > state.version {
        return Err(mismatch(state.version, version));
    }
    let schema = schema::resolve(version);

    Ok(match version {
        ForkVersion::Phase0 => {
            ExternalBeaconState::Phase0(phase0_from_canonical(state, schema, params)?)
        }
        ForkVersion::Altair => {
            ExternalBeaconState::Altair(altair_from_canonical(state, schema, params, version)?)
        }
        ForkVersion::Bellatrix => ExternalBeaconState::Bellatrix(BeaconStateBellatrix {
            altair: altair_from_canonical(state, schema, params, version)?,
            latest_execution_payload_header: bellatrix_header(state, version, params)?,
        }),
        ForkVersion::Capella => ExternalBeaconState::Capella(BeaconStateCapella {
            altair: altair_from_canonical(state, schema, params, version)?,
            latest_execution_payload_header: capella_header(state, version, params)?,
            next_withdrawal_index: *require(&state.next_withdrawal_index, state, version)?,
            next_withdrawal_validator_index: *require(
                &state.next_withdrawal_validator_index,
                state,
                version,
            )?,
            historical_summaries: checked_summaries(
                require(&state.historical_summaries, state, version)?,
                schema,
                params,
            )?,
        }),
        ForkVersion::Deneb => {
            ExternalBeaconState::Deneb(deneb_from_canonical(state, schema, params, version)?)
        }
        ForkVersion::Electra => ExternalBeaconState::Electra(BeaconStateElectra {
            deneb: deneb_from_canonical(state, schema, params, version)?,
            deposit_requests_start_index: *require(
                &state.deposit_requests_start_index,
                state,
                version,
            )?,
            deposit_balance_to_consume: *require(
                &state.deposit_balance_to_consume,
                state,
                version,
            )?,
            exit_balance_to_consume: *require(&state.exit_balance_to_consume, state, version)?,
            earliest_exit_epoch: *require(&state.earliest_exit_epoch, state, version)?,
            consolidation_balance_to_consume: *require(
                &state.consolidation_balance_to_consume,
                state,
                version,
            )?,
            earliest_consolidation_epoch: *require(
                &state.earliest_consolidation_epoch,
                state,
                version,
            )?,
            pending_balance_deposits: checked_deposits(state, schema, params, version)?,
            pending_partial_withdrawals: checked_withdrawals(state, schema, params, version)?,
            pending_consolidations: checked_consolidations(state, schema, params, version)?,
        }),
        ForkVersion::Eip7732 => ExternalBeaconState::Eip7732(BeaconStateEip7732 {
            altair: altair_from_canonical(state, schema, params, version)?,
            latest_execution_payload_header: eip7732_header(state, version)?,
            next_withdrawal_index: *require(&state.next_withdrawal_index, state, version)?,
            next_withdrawal_validator_index: *require(
                &state.next_withdrawal_validator_index,
                state,
                version,
            )?,
            historical_summaries: checked_summaries(
                require(&state.historical_summaries, state, version)?,
                schema,
                params,
            )?,
            deposit_requests_start_index: *require(
                &state.deposit_requests_start_index,
                state,
                version,
            )?,
            deposit_balance_to_consume: *require(
                &state.deposit_balance_to_consume,
                state,
                version,
            )?,
            exit_balance_to_consume: *require(&state.exit_balance_to_consume, state, version)?,
            earliest_exit_epoch: *require(&state.earliest_exit_epoch, state, version)?,
            consolidation_balance_to_consume: *require(
                &state.consolidation_balance_to_consume,
                state,
                version,
            )?,
            earliest_consolidation_epoch: *require(
                &state.earliest_consolidation_epoch,
                state,
                version,
            )?,
            pending_balance_deposits: checked_deposits(state, schema, params, version)?,
            pending_partial_withdrawals: checked_withdrawals(state, schema, params, version)?,
            pending_consolidations: checked_consolidations(state, schema, params, version)?,
            latest_block_hash: *require(&state.latest_block_hash, state, version)?,
            latest_full_slot: *require(&state.latest_full_slot, state, version)?,
            latest_withdrawals_root: *require(&state.latest_withdrawals_root, state, version)?,
        }),
    })
}

fn base_from_canonical(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
) -> Result<BeaconStateBase> {
    ensure_len(schema, params, "block_roots", state.block_roots.len())?;
    ensure_len(schema, params, "state_roots", state.state_roots.len())?;
    ensure_len(schema, params, "historical_roots", state.historical_roots.len())?;
    ensure_len(schema, params, "eth1_data_votes", state.eth1_data_votes.len())?;
    ensure_len(schema, params, "validators", state.validators.len())?;
    ensure_len(schema, params, "balances", state.balances.len())?;
    ensure_len(schema, params, "randao_mixes", state.randao_mixes.len())?;
    ensure_len(schema, params, "slashings", state.slashings.len())?;

    Ok(BeaconStateBase {
        genesis_time: state.genesis_time,
        genesis_validators_root: state.genesis_validators_root,
        slot: state.slot,
        fork: state.fork,
        latest_block_header: state.latest_block_header,
        block_roots: state.block_roots.clone(),
        state_roots: state.state_roots.clone(),
        historical_roots: state.historical_roots.clone(),
        eth1_data: state.eth1_data,
        eth1_data_votes: state.eth1_data_votes.clone(),
        eth1_deposit_index: state.eth1_deposit_index,
        validators: state.validators.clone(),
        balances: state.balances.clone(),
        randao_mixes: state.randao_mixes.clone(),
        slashings: state.slashings.clone(),
        justification_bits: state.justification_bits,
        previous_justified_checkpoint: state.previous_justified_checkpoint,
        current_justified_checkpoint: state.current_justified_checkpoint,
        finalized_checkpoint: state.finalized_checkpoint,
    })
}

fn phase0_from_canonical(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
) -> Result<BeaconStatePhase0> {
    let version = ForkVersion::Phase0;

    Ok(BeaconStatePhase0 {
        base: base_from_canonical(state, schema, params)?,
        previous_epoch_attestations: checked_attestations(
            require(&state.previous_epoch_attestations, state, version)?,
            "previous_epoch_attestations",
            schema,
            params,
        )?,
        current_epoch_attestations: checked_attestations(
            require(&state.current_epoch_attestations, state, version)?,
            "current_epoch_attestations",
            schema,
            params,
        )?,
    })
}

fn altair_from_canonical(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
    requested: ForkVersion,
) -> Result<BeaconStateAltair> {
    let previous_epoch_participation =
        require(&state.previous_epoch_participation, state, requested)?;
    let current_epoch_participation =
        require(&state.current_epoch_participation, state, requested)?;
    ensure_len(
        schema,
        params,
        "previous_epoch_participation",
        previous_epoch_participation.len(),
    )?;
    ensure_len(
        schema,
        params,
        "current_epoch_participation",
        current_epoch_participation.len(),
    )?;

    let inactivity_scores = require(&state.inactivity_scores, state, requested)?;
    ensure_len(schema, params, "inactivity_scores", inactivity_scores.len())?;

    Ok(BeaconStateAltair {
        base: base_from_canonical(state, schema, params)?,
        previous_epoch_participation: previous_epoch_participation.clone(),
        current_epoch_participation: current_epoch_participation.clone(),
        inactivity_scores: inactivity_scores.clone(),
        current_sync_committee: checked_sync_committee(
            require(&state.current_sync_committee, state, requested)?,
            params,
        )?,
        next_sync_committee: checked_sync_committee(
            require(&state.next_sync_committee, state, requested)?,
            params,
        )?,
    })
}

fn deneb_from_canonical(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
    requested: ForkVersion,
) -> Result<BeaconStateDeneb> {
    Ok(BeaconStateDeneb {
        altair: altair_from_canonical(state, schema, params, requested)?,
        latest_execution_payload_header: deneb_header(state, requested, params)?,
        next_withdrawal_index: *require(&state.next_withdrawal_index, state, requested)?,
        next_withdrawal_validator_index: *require(
            &state.next_withdrawal_validator_index,
            state,
            requested,
        )?,
        historical_summaries: checked_summaries(
            require(&state.historical_summaries, state, requested)?,
            schema,
            params,
        )?,
    })
}

fn checked_deposits(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
    requested: ForkVersion,
) -> Result<Vec<PendingBalanceDeposit>> {
    let deposits = require(&state.pending_balance_deposits, state, requested)?;
    ensure_len(schema, params, "pending_balance_deposits", deposits.len())?;
    Ok(deposits.clone())
}

fn checked_withdrawals(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
    requested: ForkVersion,
) -> Result<Vec<PendingPartialWithdrawal>> {
    let withdrawals = require(&state.pending_partial_withdrawals, state, requested)?;
    ensure_len(schema, params, "pending_partial_withdrawals", withdrawals.len())?;
    Ok(withdrawals.clone())
}

fn checked_consolidations(
    state: &CanonicalState,
    schema: &ResolvedSchema,
    params: &ForkParams,
    requested: ForkVersion,
) -> Result<Vec<PendingConsolidation>> {
    let consolidations = require(&state.pending_consolidations, state, requested)?;
    ensure_len(schema, params, "pending_consolidations", consolidations.len())?;
    Ok(consolidations.clone())
}

/////////////
// headers //
/////////////

fn bellatrix_header(
    state: &CanonicalState,
    requested: ForkVersion,
    params: &ForkParams,
) -> Result<ExecutionPayloadHeaderBellatrix> {
    match require(&state.latest_execution_payload_header, state, requested)? {
        ExecutionPayloadHeader::Bellatrix(header) => {
            check_extra_data(header.extra_data.len(), params)?;
            Ok(header.clone())
        }
        _ => Err(mismatch(state.version, requested)),
    }
}

fn capella_header(
    state: &CanonicalState,
    requested: ForkVersion,
    params: &ForkParams,
) -> Result<ExecutionPayloadHeaderCapella> {
    match require(&state.latest_execution_payload_header, state, requested)? {
        ExecutionPayloadHeader::Capella(header) => {
            check_extra_data(header.extra_data.len(), params)?;
            Ok(header.clone())
        }
        _ => Err(mismatch(state.version, requested)),
    }
}

fn deneb_header(
    state: &CanonicalState,
    requested: ForkVersion,
    params: &ForkParams,
) -> Result<ExecutionPayloadHeaderDeneb> {
    match require(&state.latest_execution_payload_header, state, requested)? {
        ExecutionPayloadHeader::Deneb(header) => {
            check_extra_data(header.extra_data.len(), params)?;
            Ok(header.clone())
        }
        _ => Err(mismatch(state.version, requested)),
    }
}

fn eip7732_header(
    state: &CanonicalState,
    requested: ForkVersion,
) -> Result<ExecutionPayloadHeaderEip7732> {
    match require(&state.latest_execution_payload_header, state, requested)? {
        ExecutionPayloadHeader::Eip7732(header) => Ok(*header),
        _ => Err(mismatch(state.version, requested)),
    }
}

////////////////////
// reconstruction //
////////////////////

/// Fold an external representation into the caller's builder. The builder
/// must be exclusively owned by this call; on error it must be discarded,
/// since `build()` is only meaningful after success.
pub fn to_canonical(
    repr: &ExternalBeaconState,
    version: ForkVersion,
    params: &ForkParams,
    builder: &mut CanonicalStateBuilder,
) -> Result<()> {
    trace!("reconstructing a {version} state");

    if repr.version() != version {
        return Err(mismatch(repr.version(), version));
    }
    if builder.version() != version {
        return Err(mismatch(builder.version(), version));
    }
    let schema = schema::resolve(version);

    match repr {
        ExternalBeaconState::Phase0(state) => {
            apply_base_fields(&state.base, schema, params, builder)?;
            builder.previous_epoch_attestations(checked_attestations(
                &state.previous_epoch_attestations,
                "previous_epoch_attestations",
                schema,
                params,
            )?);
            builder.current_epoch_attestations(checked_attestations(
                &state.current_epoch_attestations,
                "current_epoch_attestations",
                schema,
                params,
            )?);
        }
        ExternalBeaconState::Altair(state) => {
            apply_altair_fields(state, schema, params, builder)?;
        }
        ExternalBeaconState::Bellatrix(state) => {
            apply_altair_fields(&state.altair, schema, params, builder)?;
            check_extra_data(state.latest_execution_payload_header.extra_data.len(), params)?;
            builder.latest_execution_payload_header(ExecutionPayloadHeader::Bellatrix(
                state.latest_execution_payload_header.clone(),
            ));
        }
        ExternalBeaconState::Capella(state) => {
            apply_altair_fields(&state.altair, schema, params, builder)?;
            check_extra_data(state.latest_execution_payload_header.extra_data.len(), params)?;
            builder.latest_execution_payload_header(ExecutionPayloadHeader::Capella(
                state.latest_execution_payload_header.clone(),
            ));
            apply_withdrawal_fields(
                state.next_withdrawal_index,
                state.next_withdrawal_validator_index,
                &state.historical_summaries,
                schema,
                params,
                builder,
            )?;
        }
        ExternalBeaconState::Deneb(state) => {
            apply_deneb_fields(state, schema, params, builder)?;
        }
        ExternalBeaconState::Electra(state) => {
            apply_deneb_fields(&state.deneb, schema, params, builder)?;

            ensure_len(
                schema,
                params,
                "pending_balance_deposits",
                state.pending_balance_deposits.len(),
            )?;
            ensure_len(
                schema,
                params,
                "pending_partial_withdrawals",
                state.pending_partial_withdrawals.len(),
            )?;
            ensure_len(
                schema,
                params,
                "pending_consolidations",
                state.pending_consolidations.len(),
            )?;

            builder
                .deposit_requests_start_index(state.deposit_requests_start_index)
                .deposit_balance_to_consume(state.deposit_balance_to_consume)
                .exit_balance_to_consume(state.exit_balance_to_consume)
                .earliest_exit_epoch(state.earliest_exit_epoch)
                .consolidation_balance_to_consume(state.consolidation_balance_to_consume)
                .earliest_consolidation_epoch(state.earliest_consolidation_epoch)
                .pending_balance_deposits(state.pending_balance_deposits.clone())
                .pending_partial_withdrawals(state.pending_partial_withdrawals.clone())
                .pending_consolidations(state.pending_consolidations.clone());
        }
        ExternalBeaconState::Eip7732(state) => {
            apply_altair_fields(&state.altair, schema, params, builder)?;
            builder.latest_execution_payload_header(ExecutionPayloadHeader::Eip7732(
                state.latest_execution_payload_header,
            ));
            apply_withdrawal_fields(
                state.next_withdrawal_index,
                state.next_withdrawal_validator_index,
                &state.historical_summaries,
                schema,
                params,
                builder,
            )?;

            ensure_len(
                schema,
                params,
                "pending_balance_deposits",
                state.pending_balance_deposits.len(),
            )?;
            ensure_len(
                schema,
                params,
                "pending_partial_withdrawals",
                state.pending_partial_withdrawals.len(),
            )?;
            ensure_len(
                schema,
                params,
                "pending_consolidations",
                state.pending_consolidations.len(),
            )?;

            builder
                .deposit_requests_start_index(state.deposit_requests_start_index)
                .deposit_balance_to_consume(state.deposit_balance_to_consume)
                .exit_balance_to_consume(state.exit_balance_to_consume)
                .earliest_exit_epoch(state.earliest_exit_epoch)
                .consolidation_balance_to_consume(state.consolidation_balance_to_consume)
                .earliest_consolidation_epoch(state.earliest_consolidation_epoch)
                .pending_balance_deposits(state.pending_balance_deposits.clone())
                .pending_partial_withdrawals(state.pending_partial_withdrawals.clone())
                .pending_consolidations(state.pending_consolidations.clone())
                .latest_block_hash(state.latest_block_hash)
                .latest_full_slot(state.latest_full_slot)
                .latest_withdrawals_root(state.latest_withdrawals_root);
        }
    }

    Ok(())
}

fn apply_base_fields(
    base: &BeaconStateBase,
    schema: &ResolvedSchema,
    params: &ForkParams,
    builder: &mut CanonicalStateBuilder,
) -> Result<()> {
    ensure_len(schema, params, "block_roots", base.block_roots.len())?;
    ensure_len(schema, params, "state_roots", base.state_roots.len())?;
    ensure_len(schema, params, "historical_roots", base.historical_roots.len())?;
    ensure_len(schema, params, "eth1_data_votes", base.eth1_data_votes.len())?;
    ensure_len(schema, params, "validators", base.validators.len())?;
    ensure_len(schema, params, "balances", base.balances.len())?;
    ensure_len(schema, params, "randao_mixes", base.randao_mixes.len())?;
    ensure_len(schema, params, "slashings", base.slashings.len())?;

    builder
        .genesis_time(base.genesis_time)
        .genesis_validators_root(base.genesis_validators_root)
        .slot(base.slot)
        .fork(base.fork)
        .latest_block_header(base.latest_block_header)
        .block_roots(base.block_roots.clone())
        .state_roots(base.state_roots.clone())
        .historical_roots(base.historical_roots.clone())
        .eth1_data(base.eth1_data)
        .eth1_data_votes(base.eth1_data_votes.clone())
        .eth1_deposit_index(base.eth1_deposit_index)
        .validators(base.validators.clone())
        .balances(base.balances.clone())
        .randao_mixes(base.randao_mixes.clone())
        .slashings(base.slashings.clone())
        .justification_bits(base.justification_bits)
        .previous_justified_checkpoint(base.previous_justified_checkpoint)
        .current_justified_checkpoint(base.current_justified_checkpoint)
        .finalized_checkpoint(base.finalized_checkpoint);

    Ok(())
}

fn apply_altair_fields(
    state: &BeaconStateAltair,
    schema: &ResolvedSchema,
    params: &ForkParams,
    builder: &mut CanonicalStateBuilder,
) -> Result<()> {
    apply_base_fields(&state.base, schema, params, builder)?;
    ensure_len(
        schema,
        params,
        "previous_epoch_participation",
        state.previous_epoch_participation.len(),
    )?;
    ensure_len(
        schema,
        params,
        "current_epoch_participation",
        state.current_epoch_participation.len(),
    )?;
    ensure_len(schema, params, "inactivity_scores", state.inactivity_scores.len())?;

    builder
        .previous_epoch_participation(state.previous_epoch_participation.clone())
        .current_epoch_participation(state.current_epoch_participation.clone())
        .inactivity_scores(state.inactivity_scores.clone())
        .current_sync_committee(checked_sync_committee(&state.current_sync_committee, params)?)
        .next_sync_committee(checked_sync_committee(&state.next_sync_committee, params)?);

    Ok(())
}

fn apply_withdrawal_fields(
    next_withdrawal_index: u64,
    next_withdrawal_validator_index: u64,
    historical_summaries: &[HistoricalSummary],
    schema: &ResolvedSchema,
    params: &ForkParams,
    builder: &mut CanonicalStateBuilder,
) -> Result<()> {
    builder
        .next_withdrawal_index(next_withdrawal_index)
        .next_withdrawal_validator_index(next_withdrawal_validator_index)
        .historical_summaries(checked_summaries(historical_summaries, schema, params)?);

    Ok(())
}

fn apply_deneb_fields(
    state: &BeaconStateDeneb,
    schema: &ResolvedSchema,
    params: &ForkParams,
    builder: &mut CanonicalStateBuilder,
) -> Result<()> {
    apply_altair_fields(&state.altair, schema, params, builder)?;
    check_extra_data(state.latest_execution_payload_header.extra_data.len(), params)?;

    builder.latest_execution_payload_header(ExecutionPayloadHeader::Deneb(
        state.latest_execution_payload_header.clone(),
    ));

    apply_withdrawal_fields(
        state.next_withdrawal_index,
        state.next_withdrawal_validator_index,
        &state.historical_summaries,
        schema,
        params,
        builder,
    )
}
