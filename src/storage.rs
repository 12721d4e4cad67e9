//! Key-value storage
//!
//! The persister only ever touches one key, but the store is injected so
//! browser LocalStorage and an in-memory map are interchangeable.

use std::collections::HashMap;

use crate::error::{PersistError, Result};

/// Origin-scoped persistent string store (`getItem`/`setItem` shape)
pub trait KeyValueStore {
    /// Value under `key`, or `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite `key` with `value`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and the native build
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every `set`, like a browser with storage disabled
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seed a key without counting it as a write
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PersistError::Storage(format!("write to '{key}' rejected")));
        }
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
