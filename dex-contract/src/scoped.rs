use std::collections::HashSet;

use dex_storage::traits::{BatchOp, BatchWriter, KvPairs, KvStore};
use dex_types::primitives::StoragePrefix;

use crate::error::WhitelistError;
use crate::whitelist::Whitelist;

/// View over a KvStore that only reaches whitelisted contract namespaces.
pub struct WhitelistedStore<S: KvStore> {
    store: S,
    whitelist: Whitelist,
}

impl<S: KvStore> WhitelistedStore<S> {
    pub fn new(store: S, whitelist: Whitelist) -> Self {
        Self { store, whitelist }
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn check_key(&self, key: &[u8]) -> Result<(), WhitelistError> {
        if self.whitelist.contains_key(key) {
            Ok(())
        } else {
            tracing::warn!(key = %hex::encode(key), "denying access outside contract whitelist");
            Err(WhitelistError::NotWhitelisted {
                key: hex::encode(key),
            })
        }
    }

    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, WhitelistError> {
        self.check_key(key)?;
        Ok(self.store.get(key)?)
    }

    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<(), WhitelistError> {
        self.check_key(key)?;
        Ok(self.store.put(key, value)?)
    }

    pub fn delete(&self, key: &[u8]) -> Result<(), WhitelistError> {
        self.check_key(key)?;
        Ok(self.store.delete(key)?)
    }

    /// All pairs in one whitelisted contract namespace, bounded by
    /// `[prefix, prefix.range_end())`.
    pub fn scan_contract(&self, prefix: &StoragePrefix) -> Result<KvPairs, WhitelistError> {
        if !self.whitelist.contains_prefix(prefix) {
            return Err(WhitelistError::NotWhitelisted {
                key: prefix.to_string(),
            });
        }
        let end = prefix.range_end();
        Ok(self.store.range_scan(prefix.as_bytes(), end.as_deref())?)
    }

    /// Pairs of every whitelisted namespace, in whitelist order. A prefix
    /// listed twice is scanned once.
    pub fn scan_all(&self) -> Result<KvPairs, WhitelistError> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        for prefix in &self.whitelist {
            if !seen.insert(*prefix) {
                continue;
            }
            pairs.extend(self.scan_contract(prefix)?);
        }
        tracing::debug!(
            namespaces = seen.len(),
            pairs = pairs.len(),
            "scanned whitelisted contract state"
        );
        Ok(pairs)
    }
}

impl<S: BatchWriter> WhitelistedStore<S> {
    /// Apply `ops` atomically. One key outside the whitelist rejects the whole
    /// batch before anything is written.
    pub fn write_batch(&self, ops: Vec<BatchOp>) -> Result<(), WhitelistError> {
        for op in &ops {
            self.check_key(op.key())?;
        }
        Ok(self.store.write_batch(ops)?)
    }
}
