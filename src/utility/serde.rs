//! Common (de)serialization functions
//!
//! Every numeric external form is a string; these helpers bridge serde to the
//! scalar codecs via `FromStr`/`Display`.

use crate::base::numeric::decode_u64;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Deserialize from `str`
pub fn from_str<'de, T, D>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    String::deserialize(de)?
        .parse()
        .map_err(serde::de::Error::custom)
}

/// Serialize to `str`
pub fn to_str<T, S>(value: T, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: ToString,
{
    let s = value.to_string();
    ser.serialize_str(&s)
}

/// Deserialize a strict decimal `u64` (no sign, digits only)
pub fn from_dec<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    decode_u64(&String::deserialize(de)?).map_err(serde::de::Error::custom)
}

/// Lists of 64-bit unsigned values as lists of decimal strings
pub mod u64_list {
    use super::decode_u64;
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(values: &[u64], ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = ser.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(de: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(de)?
            .iter()
            .map(|s| decode_u64(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::from_dec")]
        count: u64,
    }

    #[test]
    fn from_dec_is_strict() -> anyhow::Result<()> {
        let ok: Wrapper = serde_json::from_str(r#"{"count": "42"}"#)?;
        assert_eq!(ok, Wrapper { count: 42 });

        assert!(serde_json::from_str::<Wrapper>(r#"{"count": "+42"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"count": 42}"#).is_err());
        Ok(())
    }

    #[derive(Debug, PartialEq, Deserialize, serde::Serialize)]
    struct Balances {
        #[serde(with = "super::u64_list")]
        balances: Vec<u64>,
    }

    #[test]
    fn u64_list_is_a_string_list() -> anyhow::Result<()> {
        let balances = Balances {
            balances: vec![0, u64::MAX],
        };
        let json = serde_json::to_value(&balances)?;

        assert_eq!(
            json,
            serde_json::json!({ "balances": ["0", "18446744073709551615"] })
        );
        assert_eq!(serde_json::from_value::<Balances>(json)?, balances);
        Ok(())
    }
}
