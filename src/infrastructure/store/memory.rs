//! In-Memory Asset Store
//!
//! Map-backed store that records every call. Used by tests and for dry runs
//! against a snapshot of a theme.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::Asset;
use crate::domain::ports::{AssetStore, StoreError, StoreResult};
use crate::domain::value_objects::AssetKey;

/// A recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Get(String),
    Put(String),
    Delete(String),
}

/// Asset store kept in memory
#[derive(Debug, Default)]
pub struct InMemoryAssetStore {
    assets: Mutex<BTreeMap<String, Asset>>,
    failures: Mutex<HashMap<String, StoreError>>,
    calls: Mutex<Vec<StoreCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_asset(self, asset: Asset) -> Self {
        self.insert(asset);
        self
    }

    /// Store an asset without recording a call
    pub fn insert(&self, asset: Asset) {
        lock(&self.assets).insert(asset.key().to_string(), asset);
    }

    /// Make every operation on `key` fail with `error`
    pub fn fail_on(&self, key: &str, error: StoreError) {
        lock(&self.failures).insert(key.to_string(), error);
    }

    /// Stored asset for `key`, if any
    pub fn stored(&self, key: &str) -> Option<Asset> {
        lock(&self.assets).get(key).cloned()
    }

    /// Keys currently stored
    pub fn keys(&self) -> Vec<String> {
        lock(&self.assets).keys().cloned().collect()
    }

    /// Every call in order
    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.calls).clone()
    }

    /// Keys passed to `put`, in order
    pub fn puts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Put(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    /// Keys passed to `delete`, in order
    pub fn deletes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Delete(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    fn record(&self, call: StoreCall) {
        lock(&self.calls).push(call);
    }

    fn check_failure(&self, key: &str) -> StoreResult<()> {
        match lock(&self.failures).get(key) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl AssetStore for InMemoryAssetStore {
    fn list(&self) -> StoreResult<Vec<String>> {
        self.record(StoreCall::List);
        Ok(self.keys())
    }

    fn get(&self, key: &AssetKey) -> StoreResult<Asset> {
        self.record(StoreCall::Get(key.to_string()));
        self.check_failure(key.as_str())?;
        self.stored(key.as_str())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn put(&self, asset: &Asset) -> StoreResult<()> {
        self.record(StoreCall::Put(asset.key().to_string()));
        self.check_failure(asset.key().as_str())?;
        self.insert(asset.clone());
        Ok(())
    }

    fn delete(&self, key: &AssetKey) -> StoreResult<()> {
        self.record(StoreCall::Delete(key.to_string()));
        self.check_failure(key.as_str())?;
        lock(&self.assets)
            .remove(key.as_str())
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}
