//! Wire shape against the resolved schemas

use crate::generators::*;
use beacon_schemas::{
    api::ExternalBeaconState,
    convert::from_canonical,
    error::SchemaError,
    fork::ForkVersion,
    schema,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn serialized_keys_match_the_resolved_schema() -> anyhow::Result<()> {
    for version in ForkVersion::ALL {
        let repr = from_canonical(&state_for(version), version, &mainnet(version))?;
        let json = repr.to_json()?;
        let object = json.as_object().expect("states serialize to objects");

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut fields: Vec<&str> = schema::resolve(version).field_names().collect();
        fields.sort_unstable();

        assert_eq!(keys, fields, "{version}");
    }
    Ok(())
}

#[test]
fn parse_reports_an_absent_field() -> anyhow::Result<()> {
    let version = ForkVersion::Phase0;
    let mut json = from_canonical(&phase0_state(), version, &mainnet(version))?.to_json()?;
    json.as_object_mut().unwrap().remove("validators");

    assert_eq!(
        ExternalBeaconState::parse(version, &json).unwrap_err(),
        SchemaError::MissingRequiredField {
            version,
            field: "validators"
        }
    );
    Ok(())
}

#[test]
fn parse_reports_a_null_field_as_missing() -> anyhow::Result<()> {
    let version = ForkVersion::Altair;
    let mut json = from_canonical(&altair_state(), version, &mainnet(version))?.to_json()?;
    json["inactivity_scores"] = json!(null);

    assert_eq!(
        ExternalBeaconState::parse(version, &json).unwrap_err(),
        SchemaError::MissingRequiredField {
            version,
            field: "inactivity_scores"
        }
    );
    Ok(())
}

#[test]
fn parse_rejects_a_malformed_scalar() -> anyhow::Result<()> {
    let version = ForkVersion::Phase0;
    let mut json = from_canonical(&phase0_state(), version, &mainnet(version))?.to_json()?;
    json["genesis_time"] = json!("0x10");

    assert!(matches!(
        ExternalBeaconState::parse(version, &json).unwrap_err(),
        SchemaError::Encoding(_)
    ));
    Ok(())
}

#[test]
fn parse_rejects_a_non_object() {
    assert!(matches!(
        ExternalBeaconState::parse(ForkVersion::Phase0, &json!([])).unwrap_err(),
        SchemaError::Encoding(_)
    ));
}

#[test]
fn mixed_case_hex_in_lowercase_out() -> anyhow::Result<()> {
    let version = ForkVersion::Phase0;
    let mut json = from_canonical(&phase0_state(), version, &mainnet(version))?.to_json()?;
    json["genesis_validators_root"] = json!("AbCd".repeat(16));

    let parsed = ExternalBeaconState::parse(version, &json)?;
    assert_eq!(
        parsed.to_json()?["genesis_validators_root"],
        json!("abcd".repeat(16))
    );
    Ok(())
}

#[test]
fn unknown_version_string() {
    assert_eq!(
        "fulu".parse::<ForkVersion>().unwrap_err(),
        SchemaError::UnknownVersion("fulu".into())
    );
}
