//! Execution payload header shapes
//!
//! The `latest_execution_payload_header` field is overridden by three forks,
//! so its internal type is a variant per shape. Capella appends the
//! withdrawals root, Deneb appends blob gas accounting, and the eip7732
//! header is a different, much smaller container.

use crate::{
    base::{Address, Bloom, ByteList, Root, Slot, Uint256},
    fork::ForkVersion,
    utility::serde::{from_dec, to_str},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayloadHeaderBellatrix {
    pub parent_hash: Root,
    pub fee_recipient: Address,
    pub state_root: Root,
    pub receipts_root: Root,
    pub logs_bloom: Bloom,
    pub prev_randao: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub block_number: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_limit: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_used: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub timestamp: u64,

    pub extra_data: ByteList,
    pub base_fee_per_gas: Uint256,
    pub block_hash: Root,
    pub transactions_root: Root,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayloadHeaderCapella {
    pub parent_hash: Root,
    pub fee_recipient: Address,
    pub state_root: Root,
    pub receipts_root: Root,
    pub logs_bloom: Bloom,
    pub prev_randao: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub block_number: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_limit: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_used: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub timestamp: u64,

    pub extra_data: ByteList,
    pub base_fee_per_gas: Uint256,
    pub block_hash: Root,
    pub transactions_root: Root,
    pub withdrawals_root: Root,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayloadHeaderDeneb {
    pub parent_hash: Root,
    pub fee_recipient: Address,
    pub state_root: Root,
    pub receipts_root: Root,
    pub logs_bloom: Bloom,
    pub prev_randao: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub block_number: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_limit: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_used: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub timestamp: u64,

    pub extra_data: ByteList,
    pub base_fee_per_gas: Uint256,
    pub block_hash: Root,
    pub transactions_root: Root,
    pub withdrawals_root: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub blob_gas_used: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub excess_blob_gas: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPayloadHeaderEip7732 {
    pub parent_block_hash: Root,
    pub parent_block_root: Root,
    pub block_hash: Root,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub gas_limit: u64,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub builder_index: u64,

    pub slot: Slot,

    #[serde(serialize_with = "to_str", deserialize_with = "from_dec")]
    pub value: u64,

    pub blob_kzg_commitments_root: Root,
}

/// Internal header value: one variant per shape in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionPayloadHeader {
    Bellatrix(ExecutionPayloadHeaderBellatrix),
    Capella(ExecutionPayloadHeaderCapella),
    Deneb(ExecutionPayloadHeaderDeneb),
    Eip7732(ExecutionPayloadHeaderEip7732),
}

impl ExecutionPayloadHeader {
    /// The fork that introduced this header shape
    pub fn shape_fork(&self) -> ForkVersion {
        match self {
            Self::Bellatrix(_) => ForkVersion::Bellatrix,
            Self::Capella(_) => ForkVersion::Capella,
            Self::Deneb(_) => ForkVersion::Deneb,
            Self::Eip7732(_) => ForkVersion::Eip7732,
        }
    }
}
