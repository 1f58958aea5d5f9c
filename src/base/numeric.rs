//! Slot and epoch newtypes
//!
//! 64-bit unsigned values travel as base-10 decimal strings: digits only, no
//! sign, no leading `+`. The stock `u64::from_str` accepts a leading `+`, so
//! decoding goes through [`decode_u64`] instead.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct Slot(pub u64);

#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct Epoch(pub u64);

/// Strict decimal decode for 64-bit unsigned external forms
pub fn decode_u64(s: &str) -> Result<u64, SchemaError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SchemaError::encoding(format!(
            "invalid decimal string \"{s}\""
        )));
    }

    s.parse().map_err(|_| {
        SchemaError::encoding(format!("decimal string \"{s}\" out of u64 range"))
    })
}

/////////////////
// conversions //
/////////////////

impl From<u64> for Slot {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u64> for Epoch {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for Slot {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_u64(s).map(Self)
    }
}

impl FromStr for Epoch {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_u64(s).map(Self)
    }
}

/////////////
// display //
/////////////

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///////////
// serde //
///////////

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::utility::serde::from_str(deserializer)
    }
}

impl Serialize for Epoch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Epoch {
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
    use quickcheck_macros::quickcheck;

    #[test]
    fn max_u64_roundtrips() -> anyhow::Result<()> {
        let s = u64::MAX.to_string();
        assert_eq!(decode_u64(&s)?, u64::MAX);
        Ok(())
    }

    #[test]
    fn rejects_sign_and_garbage() {
        for s in ["", "+1", "-1", "12a", " 12", "0x10"] {
            assert!(decode_u64(s).is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(decode_u64("18446744073709551616").is_err());
    }

    #[test]
    fn slot_serde_is_decimal_string() -> anyhow::Result<()> {
        let slot = Slot(162_304);
        let json = serde_json::to_value(slot)?;
        assert_eq!(json, serde_json::json!("162304"));
        assert_eq!(serde_json::from_value::<Slot>(json)?, slot);
        Ok(())
    }

    #[quickcheck]
    fn roundtrip(n: u64) -> bool {
        decode_u64(&n.to_string()) == Ok(n)
    }
}
