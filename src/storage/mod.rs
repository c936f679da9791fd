//! Durable key/value storage behind a small port, so the transaction store
//! can run against SQLite on disk or a plain map in tests.

mod schema;
mod sqlite;

use anyhow::Result;
#[cfg(test)]
use std::collections::HashMap;

pub(crate) use sqlite::SqliteStorage;

/// Key under which the serialized transaction list lives.
pub(crate) const TRANSACTIONS_KEY: &str = "transactions";

pub(crate) trait Storage {
    /// Raw value stored under `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile storage backing the store in tests.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStorage {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`, e.g. to simulate prior state.
    pub(crate) fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
