//! Raw key-value backend contract.

use thiserror::Error;

/// Errors surfaced by store writes.
///
/// Reads never return these to callers: [`crate::EntityStore::get`] degrades
/// missing or unreadable values to `None`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Store backend unavailable: {0}")]
    Backend(String),
}

/// A durable string-to-string map, shared by every context of one origin.
///
/// Writes are synchronous: once `store` returns, a `load` of the same key in
/// any context sees the new value.
pub trait StoreBackend: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn store(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
