//! String-keyed value stores
//!
//! The persistence collaborator behind [`BudgetRepository`](super::BudgetRepository):
//! a synchronous map from string keys to string values. Every `set` and
//! `remove` is durable before it returns.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::warn;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_json, write_json_atomic};

/// A persistent string-keyed store
pub trait KeyValueStore {
    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> BudgetResult<()>;

    /// Delete `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> BudgetResult<()>;
}

fn lock_poisoned<E: std::fmt::Display>(e: E) -> BudgetError {
    BudgetError::Storage(format!("Failed to acquire store lock: {}", e))
}

/// Store backed by a single JSON object on disk
///
/// The whole map is rewritten atomically on every mutation.
pub struct FileStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating it lazily on first write
    ///
    /// A file that exists but cannot be parsed is treated as an empty store.
    pub fn open(path: PathBuf) -> BudgetResult<Self> {
        let data = match read_json::<BTreeMap<String, String>, _>(&path) {
            Ok(map) => map,
            Err(BudgetError::StorageParse { reason, .. }) => {
                warn!(path = %path.display(), %reason, "store file is unreadable, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &*data)
    }

    fn remove(&self, key: &str) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        if data.remove(key).is_some() {
            write_json_atomic(&self.path, &*data)?;
        }
        Ok(())
    }
}

/// In-process store, for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let data = self.data.read().map_err(lock_poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(lock_poisoned)?;
        data.remove(key);
        Ok(())
    }
}
