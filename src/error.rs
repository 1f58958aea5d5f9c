//! Conversion and schema errors

use crate::fork::ForkVersion;
use thiserror::Error;

/// Everything that can go wrong between a canonical state and its external
/// representation. Conversions fail fast: on error no partial representation
/// or partially built state is ever handed back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Requested fork version is not part of the chain
    #[error("unknown fork version: {0}")]
    UnknownVersion(String),

    /// Canonical state version incompatible with the requested version
    #[error("state version {state} incompatible with requested version {requested}")]
    SchemaVersionMismatch {
        state: ForkVersion,
        requested: ForkVersion,
    },

    /// Non-optional field absent during reconstruction
    #[error("missing required field `{field}` for fork {version}")]
    MissingRequiredField {
        version: ForkVersion,
        field: &'static str,
    },

    /// A sequence field exceeds its parameter-set bound
    #[error("field `{field}`: length {len} exceeds maximum {max}")]
    ListLengthExceeded {
        field: &'static str,
        len: usize,
        max: u64,
    },

    /// Malformed scalar external form
    #[error("encoding: {0}")]
    Encoding(String),
}

impl SchemaError {
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

/// Schema conversion Result
pub type Result<T> = std::result::Result<T, SchemaError>;
