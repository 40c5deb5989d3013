//! Shared type definitions for DEX contract storage prefixes.
//!
//! Contract accounts, the tagged key-space of the wasm store, and the
//! fixed-length [`StoragePrefix`](primitives::StoragePrefix) that scopes a
//! contract's namespace.

pub mod constants;
pub mod error;
pub mod key;
pub mod primitives;
