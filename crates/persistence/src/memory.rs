//! In-memory backend: the test fake and the backing for ephemeral contexts.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::backend::{StoreBackend, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self
            .map
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self
            .map
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self
            .map
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.load("theme").unwrap(), None);

        store.store("theme", "\"dark\"").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("\"dark\""));

        store.remove("theme").unwrap();
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.store("users", "[]").unwrap();
        store.store("users", "[{}]").unwrap();
        assert_eq!(store.load("users").unwrap().as_deref(), Some("[{}]"));
    }
}
