//! Persistent key-value storage
//!
//! The cache treats its backing store as an injected capability: anything
//! that can fetch and replace a JSON blob by key. The JSON-file
//! implementation gives state that survives process restarts; the in-memory
//! one backs tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during store access
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A keyed blob store with host-session persistence.
///
/// `get` returns `None` for an absent key; `update` replaces the value for a
/// key. Implementations are free to fail; callers decide whether a failure
/// matters (the workspace cache swallows them).
pub trait KeyValueStore: Send + Sync {
    /// Fetch the blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Insert or replace the blob stored under `key`.
    fn update(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Store backed by a single JSON file on disk.
///
/// The file holds one top-level object mapping keys to blobs. A missing file
/// reads as empty; a corrupt file is treated as empty on the next write
/// rather than blocking it.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_root(&self) -> Result<HashMap<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut root = self.read_root()?;
        Ok(root.remove(key))
    }

    fn update(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut root = self.read_root().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "store file unreadable, starting fresh: {e}");
            HashMap::new()
        });
        root.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&root)?)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let inner = self.inner.lock().expect("mutex poisoned");
        Ok(inner.get(key).cloned())
    }

    fn update(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("mutex poisoned");
        inner.insert(key.to_string(), value);
        Ok(())
    }
}
