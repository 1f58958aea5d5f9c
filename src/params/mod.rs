//! Per-fork protocol parameter set
//!
//! One immutable [`ForkParams`] instance per fork version. Successor forks
//! reuse or extend the predecessor's values; a changed constant means a new
//! instance, never mutation. List bounds consumed by the conversion engine
//! live here, decoupled from the schema chain itself.

use crate::{constants::*, fork::ForkVersion};
use anyhow::bail;
use smart_default::SmartDefault;

/// Raw networking constants, mainnet values by default. Validated and frozen
/// into [`ForkParams`] by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub struct NetworkingConfig {
    #[default(GOSSIP_MAX_SIZE)]
    pub gossip_max_size: u64,

    #[default(MAX_CHUNK_SIZE)]
    pub max_chunk_size: u64,

    #[default(EPOCHS_PER_SUBNET_SUBSCRIPTION)]
    pub epochs_per_subnet_subscription: u64,

    #[default(MIN_EPOCHS_FOR_BLOCK_REQUESTS)]
    pub min_epochs_for_block_requests: u64,

    #[default(SUBNETS_PER_NODE)]
    pub subnets_per_node: u64,

    #[default(ATTESTATION_SUBNET_COUNT)]
    pub attestation_subnet_count: u64,

    /// Extra bits of a node id used when mapping to a subscribed subnet
    #[default(ATTESTATION_SUBNET_EXTRA_BITS)]
    pub attestation_subnet_extra_bits: u64,
}

/// Raw state list maxima, mainnet values by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub struct StateListMaxima {
    #[default(SLOTS_PER_HISTORICAL_ROOT)]
    pub slots_per_historical_root: u64,

    #[default(HISTORICAL_ROOTS_LIMIT)]
    pub historical_roots_limit: u64,

    #[default(ETH1_DATA_VOTES_BOUND)]
    pub eth1_data_votes_bound: u64,

    #[default(VALIDATOR_REGISTRY_LIMIT)]
    pub validator_registry_limit: u64,

    #[default(EPOCHS_PER_HISTORICAL_VECTOR)]
    pub epochs_per_historical_vector: u64,

    #[default(EPOCHS_PER_SLASHINGS_VECTOR)]
    pub epochs_per_slashings_vector: u64,

    #[default(MAX_PENDING_ATTESTATIONS)]
    pub max_pending_attestations: u64,

    #[default(MAX_VALIDATORS_PER_COMMITTEE)]
    pub max_validators_per_committee: u64,

    #[default(SYNC_COMMITTEE_SIZE)]
    pub sync_committee_size: u64,

    #[default(PENDING_BALANCE_DEPOSITS_LIMIT)]
    pub pending_balance_deposits_limit: u64,

    #[default(PENDING_PARTIAL_WITHDRAWALS_LIMIT)]
    pub pending_partial_withdrawals_limit: u64,

    #[default(PENDING_CONSOLIDATIONS_LIMIT)]
    pub pending_consolidations_limit: u64,

    #[default(MAX_EXTRA_DATA_BYTES)]
    pub max_extra_data_bytes: u64,
}

/// Immutable parameter set for one fork version. Read-only accessors only;
/// the derived subnet prefix width is computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkParams {
    version: ForkVersion,
    networking: NetworkingConfig,
    maxima: StateListMaxima,
    attestation_subnet_prefix_bits: u64,
}

/// `ceil(log2(n))` for `n > 0`
pub(crate) fn ceil_log2(n: u64) -> u64 {
    u64::from(u64::BITS - (n - 1).leading_zeros())
}

impl ForkParams {
    pub fn new(
        version: ForkVersion,
        networking: NetworkingConfig,
        maxima: StateListMaxima,
    ) -> anyhow::Result<Self> {
        let positive = [
            ("gossip_max_size", networking.gossip_max_size),
            ("max_chunk_size", networking.max_chunk_size),
            (
                "epochs_per_subnet_subscription",
                networking.epochs_per_subnet_subscription,
            ),
            (
                "min_epochs_for_block_requests",
                networking.min_epochs_for_block_requests,
            ),
            ("subnets_per_node", networking.subnets_per_node),
            (
                "attestation_subnet_count",
                networking.attestation_subnet_count,
            ),
            (
                "slots_per_historical_root",
                maxima.slots_per_historical_root,
            ),
            ("historical_roots_limit", maxima.historical_roots_limit),
            ("eth1_data_votes_bound", maxima.eth1_data_votes_bound),
            ("validator_registry_limit", maxima.validator_registry_limit),
            (
                "epochs_per_historical_vector",
                maxima.epochs_per_historical_vector,
            ),
            (
                "epochs_per_slashings_vector",
                maxima.epochs_per_slashings_vector,
            ),
            ("max_pending_attestations", maxima.max_pending_attestations),
            (
                "max_validators_per_committee",
                maxima.max_validators_per_committee,
            ),
            ("sync_committee_size", maxima.sync_committee_size),
            (
                "pending_balance_deposits_limit",
                maxima.pending_balance_deposits_limit,
            ),
            (
                "pending_partial_withdrawals_limit",
                maxima.pending_partial_withdrawals_limit,
            ),
            (
                "pending_consolidations_limit",
                maxima.pending_consolidations_limit,
            ),
            ("max_extra_data_bytes", maxima.max_extra_data_bytes),
        ];

        // extra bits may legitimately be zero (mainnet), everything else is a
        // count or size
        for (name, value) in positive {
            if value == 0 {
                bail!("{name} must be a positive integer");
            }
        }

        let attestation_subnet_prefix_bits = ceil_log2(networking.attestation_subnet_count)
            + networking.attestation_subnet_extra_bits;

        Ok(Self {
            version,
            networking,
            maxima,
            attestation_subnet_prefix_bits,
        })
    }

    /// Mainnet parameter set for a fork version
    pub fn mainnet(version: ForkVersion) -> Self {
        Self::new(version, NetworkingConfig::default(), StateListMaxima::default())
            .expect("mainnet constants are valid")
    }

    ///////////////
    // accessors //
    ///////////////

    pub fn version(&self) -> ForkVersion {
        self.version
    }

    pub fn gossip_max_size(&self) -> u64 {
        self.networking.gossip_max_size
    }

    pub fn max_chunk_size(&self) -> u64 {
        self.networking.max_chunk_size
    }

    pub fn epochs_per_subnet_subscription(&self) -> u64 {
        self.networking.epochs_per_subnet_subscription
    }

    pub fn min_epochs_for_block_requests(&self) -> u64 {
        self.networking.min_epochs_for_block_requests
    }

    pub fn subnets_per_node(&self) -> u64 {
        self.networking.subnets_per_node
    }

    pub fn attestation_subnet_count(&self) -> u64 {
        self.networking.attestation_subnet_count
    }

    pub fn attestation_subnet_extra_bits(&self) -> u64 {
        self.networking.attestation_subnet_extra_bits
    }

    /// `ceil(log2(attestation_subnet_count)) + attestation_subnet_extra_bits`
    pub fn attestation_subnet_prefix_bits(&self) -> u64 {
        self.attestation_subnet_prefix_bits
    }

    pub fn slots_per_historical_root(&self) -> u64 {
        self.maxima.slots_per_historical_root
    }

    pub fn historical_roots_limit(&self) -> u64 {
        self.maxima.historical_roots_limit
    }

    pub fn eth1_data_votes_bound(&self) -> u64 {
        self.maxima.eth1_data_votes_bound
    }

    pub fn validator_registry_limit(&self) -> u64 {
        self.maxima.validator_registry_limit
    }

    pub fn epochs_per_historical_vector(&self) -> u64 {
        self.maxima.epochs_per_historical_vector
    }

    pub fn epochs_per_slashings_vector(&self) -> u64 {
        self.maxima.epochs_per_slashings_vector
    }

    pub fn max_pending_attestations(&self) -> u64 {
        self.maxima.max_pending_attestations
    }

    pub fn max_validators_per_committee(&self) -> u64 {
        self.maxima.max_validators_per_committee
    }

    pub fn sync_committee_size(&self) -> u64 {
        self.maxima.sync_committee_size
    }

    pub fn pending_balance_deposits_limit(&self) -> u64 {
        self.maxima.pending_balance_deposits_limit
    }

    pub fn pending_partial_withdrawals_limit(&self) -> u64 {
        self.maxima.pending_partial_withdrawals_limit
    }

    pub fn pending_consolidations_limit(&self) -> u64 {
        self.maxima.pending_consolidations_limit
    }

    pub fn max_extra_data_bytes(&self) -> u64 {
        self.maxima.max_extra_data_bytes
    }
}

///////////
// tests //
///////////
