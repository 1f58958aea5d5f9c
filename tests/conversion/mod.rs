//! Round trips and list bound enforcement

use crate::generators::*;
use beacon_schemas::{
    api::ExternalBeaconState,
    convert::{from_canonical, to_canonical},
    error::SchemaError,
    fork::ForkVersion,
    params::{ForkParams, NetworkingConfig, StateListMaxima},
    state::{execution::ExecutionPayloadHeader, CanonicalStateBuilder},
};
use pretty_assertions::assert_eq;

/// Maxima shrunk to exactly the generator sample sizes
fn tight_params(version: ForkVersion) -> ForkParams {
    let maxima = StateListMaxima {
        slots_per_historical_root: 2,
        historical_roots_limit: 1,
        eth1_data_votes_bound: 1,
        validator_registry_limit: 2,
        epochs_per_historical_vector: 2,
        epochs_per_slashings_vector: 2,
        max_pending_attestations: 1,
        max_validators_per_committee: 3,
        sync_committee_size: 3,
        pending_balance_deposits_limit: 1,
        pending_partial_withdrawals_limit: 1,
        pending_consolidations_limit: 1,
        max_extra_data_bytes: 2,
    };
    ForkParams::new(version, NetworkingConfig::default(), maxima).expect("tight maxima are valid")
}

#[test]
fn round_trip_every_fork() -> anyhow::Result<()> {
    for version in ForkVersion::ALL {
        let state = state_for(version);
        let params = mainnet(version);

        let repr = from_canonical(&state, version, &params)?;
        assert_eq!(repr.version(), version);

        let mut builder = CanonicalStateBuilder::new(version);
        to_canonical(&repr, version, &params, &mut builder)?;
        assert_eq!(builder.build()?, state, "{version}");
    }
    Ok(())
}

#[test]
fn wire_round_trip_every_fork() -> anyhow::Result<()> {
    for version in ForkVersion::ALL {
        let repr = from_canonical(&state_for(version), version, &mainnet(version))?;
        let json = repr.to_json()?;

        assert_eq!(ExternalBeaconState::parse(version, &json)?, repr, "{version}");
    }
    Ok(())
}

#[test]
fn lists_at_their_bound_pass_both_directions() -> anyhow::Result<()> {
    for version in ForkVersion::ALL {
        let state = state_for(version);
        let params = tight_params(version);

        let repr = from_canonical(&state, version, &params)?;
        let mut builder = CanonicalStateBuilder::new(version);
        to_canonical(&repr, version, &params, &mut builder)?;
        assert_eq!(builder.build()?, state, "{version}");
    }
    Ok(())
}

#[test]
fn one_past_the_bound_fails_extraction() {
    // a third block root exceeds a two-slot history
    let mut state = phase0_state();
    state.block_roots.push(root(0x77));

    assert_eq!(
        from_canonical(&state, ForkVersion::Phase0, &tight_params(ForkVersion::Phase0))
            .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "block_roots",
            len: 3,
            max: 2
        }
    );
}

#[test]
fn one_past_the_bound_fails_reconstruction() {
    let mut state = phase0_state();
    state.block_roots.push(root(0x77));
    let repr = from_canonical(&state, ForkVersion::Phase0, &mainnet(ForkVersion::Phase0))
        .expect("within mainnet bounds");

    let mut builder = CanonicalStateBuilder::new(ForkVersion::Phase0);
    assert_eq!(
        to_canonical(
            &repr,
            ForkVersion::Phase0,
            &tight_params(ForkVersion::Phase0),
            &mut builder
        )
        .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "block_roots",
            len: 3,
            max: 2
        }
    );
}

#[test]
fn aggregation_bits_bounded_by_committee_size() {
    let mut state = phase0_state();
    state
        .current_epoch_attestations
        .as_mut()
        .unwrap()
        .first_mut()
        .unwrap()
        .aggregation_bits
        .0
        .push(true);

    assert_eq!(
        from_canonical(&state, ForkVersion::Phase0, &tight_params(ForkVersion::Phase0))
            .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "aggregation_bits",
            len: 4,
            max: 3
        }
    );
}

#[test]
fn participation_flags_bounded_by_registry_limit() {
    // one flag byte per validator at most
    let mut state = altair_state();
    state
        .current_epoch_participation
        .as_mut()
        .unwrap()
        .0
        .push(0x01);

    assert_eq!(
        from_canonical(&state, ForkVersion::Altair, &tight_params(ForkVersion::Altair))
            .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "current_epoch_participation",
            len: 3,
            max: 2
        }
    );
}

#[test]
fn sync_committee_pubkeys_bounded() {
    let mut state = altair_state();
    let committee = state.current_sync_committee.as_mut().unwrap();
    committee.pubkeys.extend([pubkey(0xd0), pubkey(0xd1)]);

    assert_eq!(
        from_canonical(&state, ForkVersion::Altair, &tight_params(ForkVersion::Altair))
            .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "pubkeys",
            len: 4,
            max: 3
        }
    );
}

#[test]
fn extra_data_bounded() {
    let mut state = bellatrix_state();
    match state.latest_execution_payload_header.as_mut().unwrap() {
        ExecutionPayloadHeader::Bellatrix(header) => header.extra_data.0.push(0x00),
        _ => unreachable!(),
    }

    assert_eq!(
        from_canonical(
            &state,
            ForkVersion::Bellatrix,
            &tight_params(ForkVersion::Bellatrix)
        )
        .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "extra_data",
            len: 3,
            max: 2
        }
    );
}

#[test]
fn pending_lists_bounded() {
    let mut state = electra_state();
    state
        .pending_consolidations
        .as_mut()
        .unwrap()
        .push(Default::default());

    assert_eq!(
        from_canonical(
            &state,
            ForkVersion::Electra,
            &tight_params(ForkVersion::Electra)
        )
        .unwrap_err(),
        SchemaError::ListLengthExceeded {
            field: "pending_consolidations",
            len: 2,
            max: 1
        }
    );
}
