//! Persistence port.
//!
//! The scorekeeper persists through a string-keyed store of JSON values.
//! Two keys are used: `sessionMeta` for session-level state and `gridData`
//! for the grid. Writes are fire-and-forget: the scorekeeper logs a failed
//! write and carries on.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::StoreError;

/// Key of the persisted [`SessionMeta`].
pub const SESSION_META_KEY: &str = "sessionMeta";

/// Key of the persisted [`GridData`](crate::grid::GridData).
pub const GRID_DATA_KEY: &str = "gridData";

/// String-keyed store of JSON values.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Read and deserialize a value.
pub fn load<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serialize and write a value.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    store.set(key, serde_json::to_value(value)?)
}

/// Session-level state, persisted under [`SESSION_META_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMeta {
    pub game_name: String,
    pub roster: Vec<String>,
    pub starting_dealer_offset: usize,
    pub in_progress: bool,
}

/// In-process store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    values: FxHashMap<String, Value>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}
