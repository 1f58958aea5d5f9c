//! External representations
//!
//! One immutable, transport-facing value object per fork version. Field
//! names are the wire contract and never change once a fork ships. A value
//! is produced either by extraction from a canonical state
//! ([`crate::convert::from_canonical`]) or by direct construction from
//! transport input ([`ExternalBeaconState::parse`]), which validates field
//! presence against the fork's resolved schema before deserializing.

pub mod altair;
pub mod bellatrix;
pub mod capella;
pub mod deneb;
pub mod eip7732;
pub mod electra;
pub mod phase0;

pub use altair::BeaconStateAltair;
pub use bellatrix::BeaconStateBellatrix;
pub use capella::BeaconStateCapella;
pub use deneb::BeaconStateDeneb;
pub use eip7732::BeaconStateEip7732;
pub use electra::BeaconStateElectra;
pub use phase0::{BeaconStateBase, BeaconStatePhase0};

use crate::{
    error::{Result, SchemaError},
    fork::ForkVersion,
    schema,
};
use serde_json::Value;

/// The external representation of a beacon state, tagged by fork version
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalBeaconState {
    Phase0(BeaconStatePhase0),
    Altair(BeaconStateAltair),
    Bellatrix(BeaconStateBellatrix),
    Capella(BeaconStateCapella),
    Deneb(BeaconStateDeneb),
    Electra(BeaconStateElectra),
    Eip7732(BeaconStateEip7732),
}

impl ExternalBeaconState {
    pub fn version(&self) -> ForkVersion {
        match self {
            Self::Phase0(_) => ForkVersion::Phase0,
            Self::Altair(_) => ForkVersion::Altair,
            Self::Bellatrix(_) => ForkVersion::Bellatrix,
            Self::Capella(_) => ForkVersion::Capella,
            Self::Deneb(_) => ForkVersion::Deneb,
            Self::Electra(_) => ForkVersion::Electra,
            Self::Eip7732(_) => ForkVersion::Eip7732,
        }
    }

    /// Wire-form JSON object of this representation
    pub fn to_json(&self) -> Result<Value> {
        let json = match self {
            Self::Phase0(state) => serde_json::to_value(state),
            Self::Altair(state) => serde_json::to_value(state),
            Self::Bellatrix(state) => serde_json::to_value(state),
            Self::Capella(state) => serde_json::to_value(state),
            Self::Deneb(state) => serde_json::to_value(state),
            Self::Electra(state) => serde_json::to_value(state),
            Self::Eip7732(state) => serde_json::to_value(state),
        };

        json.map_err(|e| SchemaError::encoding(e.to_string()))
    }

    /// Direct construction from transport input. Walks the fork's resolved
    /// field list first so an absent or null required field is reported as
    /// such, not as a generic deserialization failure; scalar malformations
    /// surface as encoding errors.
    pub fn parse(version: ForkVersion, json: &Value) -> Result<Self> {
        let schema = schema::resolve(version);
        let object = json.as_object().ok_or_else(|| {
            SchemaError::encoding(format!("{version} state: expected a JSON object"))
        })?;

        for field in &schema.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    return Err(SchemaError::MissingRequiredField {
                        version,
                        field: field.name,
                    })
                }
                Some(_) => (),
            }
        }

        let decode = |e: serde_json::Error| SchemaError::encoding(e.to_string());
        let json = json.clone();

        Ok(match version {
            ForkVersion::Phase0 => Self::Phase0(serde_json::from_value(json).map_err(decode)?),
            ForkVersion::Altair => Self::Altair(serde_json::from_value(json).map_err(decode)?),
            ForkVersion::Bellatrix => {
                Self::Bellatrix(serde_json::from_value(json).map_err(decode)?)
            }
            ForkVersion::Capella => Self::Capella(serde_json::from_value(json).map_err(decode)?),
            ForkVersion::Deneb => Self::Deneb(serde_json::from_value(json).map_err(decode)?),
            ForkVersion::Electra => Self::Electra(serde_json::from_value(json).map_err(decode)?),
            ForkVersion::Eip7732 => Self::Eip7732(serde_json::from_value(json).map_err(decode)?),
        })
    }
}
