//! Contract storage prefixes for the DEX module.
//!
//! Decodes whitelisted contract addresses into the `0x03 || account_id`
//! prefixes that scope each contract's state in the wasm store, matches
//! storage keys against those prefixes, and offers a store view that only
//! reaches whitelisted namespaces.

pub mod address;
pub mod config;
pub mod error;
pub mod logging;
pub mod prefix;
pub mod scoped;
pub mod whitelist;

pub use address::Bech32Codec;
pub use error::WhitelistError;
pub use prefix::{derive_whitelist_prefixes, is_whitelisted};
pub use whitelist::Whitelist;
