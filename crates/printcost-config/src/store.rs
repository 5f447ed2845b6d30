//! Key-value stores for persisted state.
//!
//! A store maps string keys to JSON documents, one document per key. Two
//! backends are provided:
//!
//! - [`InMemoryStore`]: process-local, for tests and embedding
//! - [`JsonFileStore`]: a single JSON object on disk, written atomically

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Storage backend for persisted documents.
pub trait StateStore: Send + Sync {
    /// Returns the name of this backend.
    fn backend_name(&self) -> &'static str;

    /// Reads the document stored under `key`.
    fn get(&self, key: &str) -> ConfigResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous document.
    fn put(&self, key: &str, value: Value) -> ConfigResult<()>;

    /// Removes the document under `key`. Returns true if one existed.
    fn remove(&self, key: &str) -> ConfigResult<bool>;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    fn get(&self, key: &str) -> ConfigResult<Option<Value>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Value) -> ConfigResult<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> ConfigResult<bool> {
        (**self).remove(key)
    }
}

fn lock_error(err: impl std::fmt::Display) -> ConfigError {
    ConfigError::Lock(err.to_string())
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// In-memory store. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> ConfigResult<usize> {
        Ok(self.entries.read().map_err(lock_error)?.len())
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> ConfigResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl StateStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> ConfigResult<Option<Value>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> ConfigResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> ConfigResult<bool> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        Ok(entries.remove(key).is_some())
    }
}

// =============================================================================
// JSON FILE
// =============================================================================

/// Store backed by one JSON object in a file.
///
/// Keys not owned by this crate are preserved on write. A missing file reads
/// as an empty store; a file that is not a JSON object is an error.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    guard: RwLock<()>,
}

impl JsonFileStore {
    /// Creates a store at `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: RwLock::new(()),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ConfigResult<BTreeMap<String, Value>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, Value>) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), keys = entries.len(), "wrote state file");
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn backend_name(&self) -> &'static str {
        "json-file"
    }

    fn get(&self, key: &str) -> ConfigResult<Option<Value>> {
        let _guard = self.guard.read().map_err(lock_error)?;
        Ok(self.read_all()?.remove(key))
    }

    fn put(&self, key: &str, value: Value) -> ConfigResult<()> {
        let _guard = self.guard.write().map_err(lock_error)?;
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> ConfigResult<bool> {
        let _guard = self.guard.write().map_err(lock_error)?;
        let mut entries = self.read_all()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.write_all(&entries)?;
        Ok(true)
    }
}
