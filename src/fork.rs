//! Fork version chain
//!
//! Fork versions form a strict, totally ordered sequence; each version's
//! schema is defined relative to exactly one predecessor. The enum order is
//! the protocol upgrade order, so `PartialOrd`/`Ord` compare fork age.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkVersion {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
    Electra,
    Eip7732,
}

impl ForkVersion {
    /// Every fork, genesis first
    pub const ALL: [Self; 7] = [
        Self::Phase0,
        Self::Altair,
        Self::Bellatrix,
        Self::Capella,
        Self::Deneb,
        Self::Electra,
        Self::Eip7732,
    ];

    /// The fork this one upgraded from (`None` for genesis)
    pub fn parent(self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|v| *v == self)?;
        idx.checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Phase0 => "phase0",
            Self::Altair => "altair",
            Self::Bellatrix => "bellatrix",
            Self::Capella => "capella",
            Self::Deneb => "deneb",
            Self::Electra => "electra",
            Self::Eip7732 => "eip7732",
        }
    }
}

impl fmt::Display for ForkVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ForkVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| SchemaError::UnknownVersion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::ForkVersion;
    use crate::error::SchemaError;

    #[test]
    fn order_follows_upgrade_history() {
        assert!(ForkVersion::Phase0 < ForkVersion::Altair);
        assert!(ForkVersion::Electra < ForkVersion::Eip7732);
    }

    #[test]
    fn parent_chain_is_strict() {
        assert_eq!(ForkVersion::Phase0.parent(), None);

        for pair in ForkVersion::ALL.windows(2) {
            assert_eq!(pair[1].parent(), Some(pair[0]));
        }
    }

    #[test]
    fn parse_roundtrip() -> anyhow::Result<()> {
        for version in ForkVersion::ALL {
            assert_eq!(version.name().parse::<ForkVersion>()?, version);
        }
        Ok(())
    }

    #[test]
    fn unknown_version() {
        assert_eq!(
            "merge".parse::<ForkVersion>(),
            Err(SchemaError::UnknownVersion("merge".into()))
        );
    }
}
