//! Storage abstraction for DEX contract state.
//!
//! Provides an ordered [`KvStore`](traits::KvStore) trait keyed by raw bytes
//! and an in-memory [`MemoryStore`](memory::MemoryStore) backend.

pub mod error;
pub mod memory;
pub mod traits;
