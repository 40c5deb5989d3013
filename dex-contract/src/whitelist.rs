use serde::{Deserialize, Serialize};

use dex_types::primitives::StoragePrefix;

use crate::address::Bech32Codec;
use crate::error::WhitelistError;
use crate::prefix::derive_whitelist_prefixes;

/// Ordered contract-store prefixes of the contracts trusted for scoped access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Whitelist {
    prefixes: Vec<StoragePrefix>,
}

impl Whitelist {
    /// Decode every address and keep its prefix, in input order.
    pub fn from_addresses<S: AsRef<str>>(
        codec: &Bech32Codec,
        addresses: &[S],
    ) -> Result<Self, WhitelistError> {
        let prefixes = derive_whitelist_prefixes(codec, addresses)?;
        tracing::debug!(count = prefixes.len(), "built contract whitelist");
        Ok(Self { prefixes })
    }

    pub fn from_prefixes(prefixes: Vec<StoragePrefix>) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[StoragePrefix] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoragePrefix> {
        self.prefixes.iter()
    }

    /// Whether `key` lies in any whitelisted namespace.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.matching_prefix(key).is_some()
    }

    /// The first whitelisted prefix that `key` starts with.
    pub fn matching_prefix(&self, key: &[u8]) -> Option<&StoragePrefix> {
        self.prefixes.iter().find(|prefix| prefix.is_prefix_of(key))
    }

    /// Whether `prefix` itself is one of the whitelisted prefixes.
    pub fn contains_prefix(&self, prefix: &StoragePrefix) -> bool {
        self.prefixes.contains(prefix)
    }
}

impl<'a> IntoIterator for &'a Whitelist {
    type Item = &'a StoragePrefix;
    type IntoIter = std::slice::Iter<'a, StoragePrefix>;

    fn into_iter(self) -> Self::IntoIter {
        self.prefixes.iter()
    }
}
