//! Compact bit-vector and bit-list scalars
//!
//! External form is a string of `0`/`1` characters. A bit-vector has a fixed
//! length known from the schema; a bit-list is variable-length with its bound
//! enforced by the conversion engine.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fixed-length bit-vector (`justification_bits`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitvector<const N: usize>(pub [bool; N]);

/// Bounded bit-list (`aggregation_bits`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitlist(pub Vec<bool>);

//////////
// impl //
//////////

fn encode_bits(bits: &[bool]) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

fn decode_bits(s: &str) -> Result<Vec<bool>, SchemaError> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(SchemaError::encoding(format!(
                "invalid bit string \"{s}\": unexpected character '{c}'"
            ))),
        })
        .collect()
}

impl<const N: usize> Bitvector<N> {
    pub const LEN: usize = N;

    pub fn encode(&self) -> String {
        encode_bits(&self.0)
    }

    pub fn decode(s: &str) -> Result<Self, SchemaError> {
        if s.len() != N {
            return Err(SchemaError::encoding(format!(
                "invalid bit-vector \"{s}\": expected exactly {N} bits, got {}",
                s.len()
            )));
        }

        let bits = decode_bits(s)?;
        let mut res = [false; N];
        res.copy_from_slice(&bits);
        Ok(Self(res))
    }
}

impl<const N: usize> Default for Bitvector<N> {
    fn default() -> Self {
        Self([false; N])
    }
}

impl Bitlist {
    pub fn encode(&self) -> String {
        encode_bits(&self.0)
    }

    pub fn decode(s: &str) -> Result<Self, SchemaError> {
        decode_bits(s).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/////////////
// display //
/////////////

impl<const N: usize> fmt::Display for Bitvector<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for Bitlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl<const N: usize> FromStr for Bitvector<N> {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl FromStr for Bitlist {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

///////////
// serde //
///////////

impl<const N: usize> Serialize for Bitvector<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Bitvector<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::utility::serde::from_str(deserializer)
    }
}

impl Serialize for Bitlist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Bitlist {
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
