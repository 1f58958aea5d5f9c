//! Fixed-width byte scalars
//!
//! External form is plain lowercase hex, exactly `2 * N` characters, no
//! prefix. Decoding is all-or-nothing: bad hex or a wrong length yields an
//! encoding error and no value.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes<const N: usize>(pub [u8; N]);

/// Fork version identifier on the wire
pub type Version4 = Bytes<4>;

/// Execution-layer address
pub type Address = Bytes<20>;

/// 32-byte hash
pub type Root = Bytes<32>;

/// BLS public key
pub type Pubkey = Bytes<48>;

/// Execution logs bloom filter
pub type Bloom = Bytes<256>;

//////////
// impl //
//////////

impl<const N: usize> Bytes<N> {
    pub const LEN: usize = N;

    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, SchemaError> {
        if s.len() != 2 * N {
            return Err(SchemaError::encoding(format!(
                "invalid {N}-byte hex scalar \"{s}\": expected {} characters, got {}",
                2 * N,
                s.len()
            )));
        }

        let mut res = [0u8; N];
        hex::decode_to_slice(s, &mut res).map_err(|e| {
            SchemaError::encoding(format!("invalid {N}-byte hex scalar \"{s}\": {e}"))
        })?;

        Ok(Self(res))
    }
}

impl<const N: usize> Default for Bytes<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Debug for Bytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bytes<{N}>({})", self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Bytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<const N: usize> FromStr for Bytes<N> {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

///////////
// serde //
///////////

impl<const N: usize> Serialize for Bytes<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Bytes<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::utility::serde::from_str(deserializer)
    }
}

///////////////
// byte list //
///////////////

/// Variable-length byte string (`extra_data`), hex on the wire. The length
/// bound is enforced by the conversion engine, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteList(pub Vec<u8>);

impl ByteList {
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, SchemaError> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| SchemaError::encoding(format!("invalid hex byte string \"{s}\": {e}")))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ByteList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ByteList {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for ByteList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ByteList {
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
    use crate::error::SchemaError;
    use hex_literal::hex;
    use quickcheck_macros::quickcheck;

    #[test]
    fn zero_root_encodes_as_64_zeros() {
        assert_eq!(Root::default().to_hex(), "0".repeat(64));
    }

    #[test]
    fn short_hex_fails() {
        let s = "0".repeat(63);
        assert!(matches!(Root::from_hex(&s), Err(SchemaError::Encoding(_))));
    }

    #[test]
    fn non_hex_fails() {
        let s = "zz".repeat(32);
        assert!(matches!(Root::from_hex(&s), Err(SchemaError::Encoding(_))));
    }

    #[test]
    fn known_value_roundtrip() -> anyhow::Result<()> {
        let root = Root::from(hex!(
            "deadbeef00000000000000000000000000000000000000000000000000000000"
        ));
        assert_eq!(Root::from_hex(&root.to_hex())?, root);
        Ok(())
    }

    #[test]
    fn serde_json_string_form() -> anyhow::Result<()> {
        let address = Address::default();
        let json = serde_json::to_value(address)?;
        assert_eq!(json, serde_json::json!("0".repeat(40)));
        assert_eq!(serde_json::from_value::<Address>(json)?, address);
        Ok(())
    }

    #[quickcheck]
    fn roundtrip(bytes: Vec<u8>) -> bool {
        let mut raw = [0u8; 32];
        for (slot, byte) in raw.iter_mut().zip(bytes) {
            *slot = byte;
        }

        let root = Root::from(raw);
        Root::from_hex(&root.to_hex()) == Ok(root)
    }

    #[quickcheck]
    fn byte_list_roundtrip(bytes: Vec<u8>) -> bool {
        let list = ByteList(bytes);
        ByteList::from_hex(&list.to_hex()).as_ref() == Ok(&list)
    }
}
