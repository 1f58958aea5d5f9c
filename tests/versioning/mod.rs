//! Cross-version extraction and reconstruction gates

use crate::generators::*;
use beacon_schemas::{
    convert::{from_canonical, to_canonical},
    error::SchemaError,
    fork::ForkVersion,
    state::CanonicalStateBuilder,
};
use pretty_assertions::assert_eq;

#[test]
fn newer_request_than_state_is_rejected() {
    assert_eq!(
        from_canonical(
            &altair_state(),
            ForkVersion::Bellatrix,
            &mainnet(ForkVersion::Bellatrix)
        )
        .unwrap_err(),
        SchemaError::SchemaVersionMismatch {
            state: ForkVersion::Altair,
            requested: ForkVersion::Bellatrix
        }
    );
}

#[test]
fn removed_field_blocks_older_extraction() {
    // the phase0 attestation lists are gone from an altair state
    assert_eq!(
        from_canonical(
            &altair_state(),
            ForkVersion::Phase0,
            &mainnet(ForkVersion::Phase0)
        )
        .unwrap_err(),
        SchemaError::SchemaVersionMismatch {
            state: ForkVersion::Altair,
            requested: ForkVersion::Phase0
        }
    );
}

#[test]
fn compatible_older_extraction_succeeds() -> anyhow::Result<()> {
    // every deneb field still lives, unchanged, in an electra state
    let from_electra = from_canonical(
        &electra_state(),
        ForkVersion::Deneb,
        &mainnet(ForkVersion::Deneb),
    )?;
    let from_deneb = from_canonical(
        &deneb_state(),
        ForkVersion::Deneb,
        &mainnet(ForkVersion::Deneb),
    )?;

    assert_eq!(from_electra, from_deneb);
    Ok(())
}

#[test]
fn altair_view_of_eip7732_state_succeeds() -> anyhow::Result<()> {
    let from_eip7732 = from_canonical(
        &eip7732_state(),
        ForkVersion::Altair,
        &mainnet(ForkVersion::Altair),
    )?;
    let from_altair = from_canonical(
        &altair_state(),
        ForkVersion::Altair,
        &mainnet(ForkVersion::Altair),
    )?;

    assert_eq!(from_eip7732, from_altair);
    Ok(())
}

#[test]
fn foreign_header_shape_blocks_older_extraction() {
    // capella's schema wants the capella header shape, a deneb state holds deneb's
    assert_eq!(
        from_canonical(
            &deneb_state(),
            ForkVersion::Capella,
            &mainnet(ForkVersion::Capella)
        )
        .unwrap_err(),
        SchemaError::SchemaVersionMismatch {
            state: ForkVersion::Deneb,
            requested: ForkVersion::Capella
        }
    );
}

#[test]
fn representation_version_must_match_request() -> anyhow::Result<()> {
    let repr = from_canonical(
        &altair_state(),
        ForkVersion::Altair,
        &mainnet(ForkVersion::Altair),
    )?;

    let mut builder = CanonicalStateBuilder::new(ForkVersion::Bellatrix);
    assert_eq!(
        to_canonical(
            &repr,
            ForkVersion::Bellatrix,
            &mainnet(ForkVersion::Bellatrix),
            &mut builder
        )
        .unwrap_err(),
        SchemaError::SchemaVersionMismatch {
            state: ForkVersion::Altair,
            requested: ForkVersion::Bellatrix
        }
    );
    Ok(())
}

#[test]
fn builder_version_must_match_request() -> anyhow::Result<()> {
    let repr = from_canonical(
        &altair_state(),
        ForkVersion::Altair,
        &mainnet(ForkVersion::Altair),
    )?;

    let mut builder = CanonicalStateBuilder::new(ForkVersion::Phase0);
    assert_eq!(
        to_canonical(
            &repr,
            ForkVersion::Altair,
            &mainnet(ForkVersion::Altair),
            &mut builder
        )
        .unwrap_err(),
        SchemaError::SchemaVersionMismatch {
            state: ForkVersion::Phase0,
            requested: ForkVersion::Altair
        }
    );
    Ok(())
}
