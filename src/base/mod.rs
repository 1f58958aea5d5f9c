//! Scalar value types and their codecs

pub mod bitfield;
pub mod bytes;
pub mod numeric;
pub mod uint256;

pub use bitfield::{Bitlist, Bitvector};
pub use bytes::{Address, Bloom, ByteList, Bytes, Pubkey, Root, Version4};
pub use numeric::{Epoch, Slot};
pub use uint256::Uint256;
