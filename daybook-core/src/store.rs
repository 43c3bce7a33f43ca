//! Key-value persistence.
//!
//! The whole event collection lives under a single key and is rewritten in
//! full on every change. There are no transactions: the last write wins.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::DaybookResult;

/// Key holding the JSON-serialized event collection
pub const EVENTS_KEY: &str = "calendar-events";

/// A synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DaybookResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> DaybookResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DaybookResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            debug!(path = %path.display(), "no stored value");
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> DaybookResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }
}

/// In-memory store, mostly useful for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DaybookResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DaybookResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
