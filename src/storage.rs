//! The local key-value store behind the draft.
//!
//! Values are plain strings. [`ConfyStore`] keeps them in a TOML file in the
//! user's config directory and rewrites the file on every change, so a write
//! is durable once the call returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::APP_NAME;
use crate::error::StorageError;

pub const DRAFT_KEY: &str = "rascunho";
pub const COUNT_KEY: &str = "contador";

const STORE_NAME: &str = "storage";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Removes every key in `keys`. Stores that write through to disk
    /// override this so either all keys go or none do.
    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StorageError> {
        keys.iter().try_for_each(|key| self.remove(key))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StoredEntries {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct ConfyStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl ConfyStore {
    /// Opens the store in the platform config directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let path = confy::get_configuration_file_path(APP_NAME, STORE_NAME)
            .map_err(StorageError::Unavailable)?;
        Self::open(path)
    }

    /// Opens (creating if needed) the store file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let stored: StoredEntries = confy::load_path(&path).map_err(StorageError::Unavailable)?;
        tracing::debug!(path = %path.display(), keys = stored.entries.len(), "opened draft store");
        Ok(Self {
            path,
            entries: stored.entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `entries` to disk and only then adopts them, so a failed write
    /// leaves the store as it was.
    fn commit(
        &mut self,
        key: &str,
        entries: BTreeMap<String, String>,
    ) -> Result<(), StorageError> {
        let stored = StoredEntries { entries };
        confy::store_path(&self.path, &stored).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })?;
        self.entries = stored.entries;
        Ok(())
    }
}

impl KeyValueStore for ConfyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(key, entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.remove_all(&[key])
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.clone();
        let removed = keys
            .iter()
            .filter(|key| entries.remove(**key).is_some())
            .count();
        if removed == 0 {
            return Ok(());
        }
        self.commit(&keys.join(", "), entries)
    }
}

/// Process-local store, used when nothing needs to outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
