//! Mainnet preset constants

// networking

pub const GOSSIP_MAX_SIZE: u64 = 10_485_760;
pub const MAX_CHUNK_SIZE: u64 = 10_485_760;
pub const EPOCHS_PER_SUBNET_SUBSCRIPTION: u64 = 256;
pub const MIN_EPOCHS_FOR_BLOCK_REQUESTS: u64 = 33_024;
pub const SUBNETS_PER_NODE: u64 = 2;
pub const ATTESTATION_SUBNET_COUNT: u64 = 64;
pub const ATTESTATION_SUBNET_EXTRA_BITS: u64 = 0;

// state list bounds

pub const SLOTS_PER_HISTORICAL_ROOT: u64 = 8_192;
pub const HISTORICAL_ROOTS_LIMIT: u64 = 16_777_216;
pub const ETH1_DATA_VOTES_BOUND: u64 = EPOCHS_PER_ETH1_VOTING_PERIOD * SLOTS_PER_EPOCH;
pub const VALIDATOR_REGISTRY_LIMIT: u64 = 1_099_511_627_776;
pub const EPOCHS_PER_HISTORICAL_VECTOR: u64 = 65_536;
pub const EPOCHS_PER_SLASHINGS_VECTOR: u64 = 8_192;
pub const MAX_PENDING_ATTESTATIONS: u64 = MAX_ATTESTATIONS * SLOTS_PER_EPOCH;
pub const PENDING_BALANCE_DEPOSITS_LIMIT: u64 = 134_217_728;
pub const PENDING_PARTIAL_WITHDRAWALS_LIMIT: u64 = 134_217_728;
pub const PENDING_CONSOLIDATIONS_LIMIT: u64 = 262_144;

// container-local bounds

pub const MAX_VALIDATORS_PER_COMMITTEE: u64 = 2_048;
pub const SYNC_COMMITTEE_SIZE: u64 = 512;
pub const MAX_EXTRA_DATA_BYTES: u64 = 32;

// derivation inputs

pub const SLOTS_PER_EPOCH: u64 = 32;
pub const MAX_ATTESTATIONS: u64 = 128;
pub const EPOCHS_PER_ETH1_VOTING_PERIOD: u64 = 64;

// fixed field widths

pub const JUSTIFICATION_BITS_LENGTH: usize = 4;
