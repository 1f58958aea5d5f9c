//! 256-bit unsigned scalar
//!
//! Used for `base_fee_per_gas`. External form is a base-10 decimal string;
//! decoding rejects anything that does not fit in 256 bits.

use crate::error::SchemaError;
use num::BigUint;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint256(pub BigUint);

impl Uint256 {
    pub fn from_u64(value: u64) -> Self {
        Self(BigUint::from(value))
    }

    pub fn decode(s: &str) -> Result<Self, SchemaError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SchemaError::encoding(format!(
                "invalid decimal string \"{s}\""
            )));
        }

        let value: BigUint = s
            .parse()
            .map_err(|e| SchemaError::encoding(format!("invalid decimal string \"{s}\": {e}")))?;

        if value.bits() > 256 {
            return Err(SchemaError::encoding(format!(
                "decimal string \"{s}\" out of 256-bit range"
            )));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Uint256 {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

///////////
// serde //
///////////

impl Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::utility::serde::from_str(deserializer)
    }
}

///////////
// tests //
///////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() -> anyhow::Result<()> {
        let max = Uint256((BigUint::from(1u8) << 256u16) - 1u8);
        assert_eq!(Uint256::decode(&max.to_string())?, max);
        Ok(())
    }

    #[test]
    fn rejects_257_bits() {
        let too_big = (BigUint::from(1u8) << 256u16).to_string();
        assert!(Uint256::decode(&too_big).is_err());
    }

    #[test]
    fn rejects_sign_and_hex() {
        for s in ["", "-7", "+7", "0xff"] {
            assert!(Uint256::decode(s).is_err(), "accepted {s:?}");
        }
    }
}
