//! Versioned schema chain
//!
//! Each fork version declares a patch against its predecessor: fields added,
//! field types overridden, fields removed. Resolving a version folds every
//! patch from genesis up to it into an ordered field list. Resolution is pure
//! and deterministic, so all forks are resolved once and cached.
//!
//! Evolution is additive: a field present at one fork stays present at every
//! later fork, possibly with an overridden type, unless a patch explicitly
//! removes it.

pub mod chain;

use crate::{fork::ForkVersion, params::ForkParams};
use std::{collections::BTreeMap, sync::LazyLock};

/// Element type of a bounded list field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElemKind {
    Uint64,
    Root,
    Eth1Data,
    Validator,
    PendingAttestation,
    HistoricalSummary,
    PendingBalanceDeposit,
    PendingPartialWithdrawal,
    PendingConsolidation,
}

/// Structured sub-object type of a container field. Execution payload
/// headers carry the fork of their shape: overriding the header field swaps
/// in a different kind while the field name stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Fork,
    BlockHeader,
    Checkpoint,
    Eth1Data,
    SyncCommittee,
    ExecutionPayloadHeaderBellatrix,
    ExecutionPayloadHeaderCapella,
    ExecutionPayloadHeaderDeneb,
    ExecutionPayloadHeaderEip7732,
}

/// Which parameter-set value bounds a list field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    SlotsPerHistoricalRoot,
    HistoricalRootsLimit,
    Eth1DataVotesBound,
    ValidatorRegistryLimit,
    EpochsPerHistoricalVector,
    EpochsPerSlashingsVector,
    MaxPendingAttestations,
    PendingBalanceDepositsLimit,
    PendingPartialWithdrawalsLimit,
    PendingConsolidationsLimit,
}

impl Bound {
    /// Maximum length under the given parameter set
    pub fn max(self, params: &ForkParams) -> u64 {
        match self {
            Self::SlotsPerHistoricalRoot => params.slots_per_historical_root(),
            Self::HistoricalRootsLimit => params.historical_roots_limit(),
            Self::Eth1DataVotesBound => params.eth1_data_votes_bound(),
            Self::ValidatorRegistryLimit => params.validator_registry_limit(),
            Self::EpochsPerHistoricalVector => params.epochs_per_historical_vector(),
            Self::EpochsPerSlashingsVector => params.epochs_per_slashings_vector(),
            Self::MaxPendingAttestations => params.max_pending_attestations(),
            Self::PendingBalanceDepositsLimit => params.pending_balance_deposits_limit(),
            Self::PendingPartialWithdrawalsLimit => params.pending_partial_withdrawals_limit(),
            Self::PendingConsolidationsLimit => params.pending_consolidations_limit(),
        }
    }
}

/// External/internal type of a state field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Uint64,
    Slot,
    Epoch,
    Root,
    Bitvector(usize),
    Container(ContainerKind),
    List(ElemKind, Bound),
    /// Bounded byte string, hex on the wire (epoch participation flags)
    ByteList(Bound),
}

/// One field of a fork's resolved schema. The name is the wire contract:
/// fixed lower-snake-case, stable once the fork ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A single evolution step within a fork's patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaChange {
    Add(FieldDef),
    Override(FieldDef),
    Remove(&'static str),
}

/// A fork's schema declared as changes against its predecessor
#[derive(Debug, Clone, Copy)]
pub struct SchemaPatch {
    pub version: ForkVersion,
    pub changes: &'static [SchemaChange],
}

/// Ordered field list of one fork, produced by folding the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub version: ForkVersion,
    pub fields: Vec<FieldDef>,
}

impl ResolvedSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Parameter-set bound of a list field, if `name` is one
    pub fn bound(&self, name: &str, params: &ForkParams) -> Option<u64> {
        match self.field(name)?.kind {
            FieldKind::List(_, bound) | FieldKind::ByteList(bound) => Some(bound.max(params)),
            _ => None,
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

////////////////
// resolution //
////////////////

// A malformed chain (adding an existing field, overriding or removing an
// absent one) is a defect in the static patch list, caught the first time any
// schema is resolved.
fn apply(fields: &mut Vec<FieldDef>, version: ForkVersion, change: &SchemaChange) {
    match change {
        SchemaChange::Add(def) => {
            assert!(
                !fields.iter().any(|f| f.name == def.name),
                "{version}: add of existing field `{}`",
                def.name
            );
            fields.push(*def);
        }
        SchemaChange::Override(def) => {
            let existing = fields
                .iter_mut()
                .find(|f| f.name == def.name)
                .unwrap_or_else(|| panic!("{version}: override of absent field `{}`", def.name));
            existing.kind = def.kind;
        }
        SchemaChange::Remove(name) => {
            let before = fields.len();
            fields.retain(|f| f.name != *name);
            assert!(
                fields.len() < before,
                "{version}: removal of absent field `{name}`"
            );
        }
    }
}

static RESOLVED: LazyLock<BTreeMap<ForkVersion, ResolvedSchema>> = LazyLock::new(|| {
    let mut fields: Vec<FieldDef> = Vec::new();
    let mut resolved = BTreeMap::new();

    for patch in chain::CHAIN {
        for change in patch.changes {
            apply(&mut fields, patch.version, change);
        }

        resolved.insert(
            patch.version,
            ResolvedSchema {
                version: patch.version,
                fields: fields.clone(),
            },
        );
    }

    log::debug!("resolved {} fork schemas", resolved.len());
    resolved
});

/// Resolved field list for a fork version. `ForkVersion` is closed over the
/// chain, so resolution is total; an unknown version name already fails at
/// `ForkVersion::from_str`.
pub fn resolve(version: ForkVersion) -> &'static ResolvedSchema {
    RESOLVED
        .get(&version)
        .expect("every fork version has a chain patch")
}

///////////
// tests //
///////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fork_resolves() {
        for version in ForkVersion::ALL {
            let schema = resolve(version);
            assert_eq!(schema.version, version);
            assert!(!schema.fields.is_empty());
        }
    }

    #[test]
    fn resolution_is_cached_and_stable() {
        for version in ForkVersion::ALL {
            assert!(std::ptr::eq(resolve(version), resolve(version)));
        }
    }

    #[test]
    fn altair_participation_lists_are_bounded_byte_strings() {
        let params = crate::params::ForkParams::mainnet(ForkVersion::Altair);

        for field in ["previous_epoch_participation", "current_epoch_participation"] {
            assert!(resolve(ForkVersion::Phase0).field(field).is_none());
            assert_eq!(
                resolve(ForkVersion::Altair).field(field).unwrap().kind,
                FieldKind::ByteList(Bound::ValidatorRegistryLimit)
            );
            assert_eq!(
                resolve(ForkVersion::Eip7732).bound(field, &params),
                Some(1_099_511_627_776)
            );
        }
    }

    #[test]
    fn genesis_has_attestations_altair_does_not() {
        assert!(resolve(ForkVersion::Phase0)
            .field("previous_epoch_attestations")
            .is_some());
        assert!(resolve(ForkVersion::Altair)
            .field("previous_epoch_attestations")
            .is_none());
    }

    #[test]
    fn header_override_keeps_name_changes_kind() {
        let field = "latest_execution_payload_header";

        assert!(resolve(ForkVersion::Altair).field(field).is_none());
        assert_eq!(
            resolve(ForkVersion::Bellatrix).field(field).unwrap().kind,
            FieldKind::Container(ContainerKind::ExecutionPayloadHeaderBellatrix)
        );
        assert_eq!(
            resolve(ForkVersion::Deneb).field(field).unwrap().kind,
            FieldKind::Container(ContainerKind::ExecutionPayloadHeaderDeneb)
        );
        assert_eq!(
            resolve(ForkVersion::Eip7732).field(field).unwrap().kind,
            FieldKind::Container(ContainerKind::ExecutionPayloadHeaderEip7732)
        );
    }

    #[test]
    fn list_bounds_come_from_params() {
        let params = crate::params::ForkParams::mainnet(ForkVersion::Phase0);
        let schema = resolve(ForkVersion::Phase0);

        assert_eq!(schema.bound("block_roots", &params), Some(8_192));
        assert_eq!(schema.bound("validators", &params), Some(1_099_511_627_776));
        assert_eq!(schema.bound("slot", &params), None);
    }

    #[test]
    fn additive_evolution() {
        // every field of fork v survives into v+1 unless v+1 removes it
        for pair in ForkVersion::ALL.windows(2) {
            let (old, new) = (resolve(pair[0]), resolve(pair[1]));
            let removed: Vec<_> = chain::CHAIN
                .iter()
                .find(|p| p.version == pair[1])
                .unwrap()
                .changes
                .iter()
                .filter_map(|c| match c {
                    SchemaChange::Remove(name) => Some(*name),
                    _ => None,
                })
                .collect();

            for field in &old.fields {
                if removed.contains(&field.name) {
                    assert!(new.field(field.name).is_none());
                } else {
                    assert!(
                        new.field(field.name).is_some(),
                        "{} silently dropped `{}`",
                        pair[1],
                        field.name
                    );
                }
            }
        }
    }
}
