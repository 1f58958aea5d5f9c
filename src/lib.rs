//! Versioned beacon-state schemas
//!
//! A consensus client's state schema grows and mutates across fork versions.
//! This crate maintains the per-fork schema chain, the canonical (internal)
//! state shape, the external JSON-facing representation of each fork, and
//! exact, bounded conversion between the two.

pub mod api;
pub mod base;
pub mod constants;
pub mod convert;
pub mod error;
pub mod fork;
pub mod params;
pub mod schema;
pub mod state;
pub mod utility;
