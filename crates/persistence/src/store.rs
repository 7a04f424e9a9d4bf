//! Typed per-context store handle.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::backend::{StoreBackend, StoreError};
use crate::bus::{ChangeBus, ContextId, ExternalChanges};
use crate::keys::StoreKey;
use crate::memory::MemoryStore;

/// One context's view of the shared store.
///
/// All handles created with [`EntityStore::open_sibling`] share the backend
/// and the notification bus; each write announces itself to every *other*
/// handle. Within a handle, a write is visible to the next read immediately.
#[derive(Clone)]
pub struct EntityStore {
    context: ContextId,
    backend: Arc<dyn StoreBackend>,
    bus: ChangeBus,
}

impl EntityStore {
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self {
            context: Uuid::new_v4(),
            backend,
            bus: ChangeBus::new(),
        }
    }

    /// Fresh store over an in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Another context over the same backend and bus: the "second tab".
    pub fn open_sibling(&self) -> Self {
        Self {
            context: Uuid::new_v4(),
            backend: Arc::clone(&self.backend),
            bus: self.bus.clone(),
        }
    }

    /// Reads and decodes a value.
    ///
    /// Missing, corrupt, or unreadable values all come back as `None`;
    /// callers fall back to their defaults. Corruption is logged, never
    /// propagated.
    pub fn get<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let raw = match self.backend.load(key.as_str()) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(%key, error = %err, "store read failed; treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%key, error = %err, "corrupt value in store; treating as absent");
                None
            }
        }
    }

    /// Reads a collection, defaulting to empty.
    pub fn collection<T: DeserializeOwned>(&self, key: StoreKey) -> Vec<T> {
        self.get(key).unwrap_or_default()
    }

    /// Encodes and durably writes a value, then notifies other contexts.
    pub fn set<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.store(key.as_str(), &raw)?;
        self.bus.publish(self.context);
        Ok(())
    }

    /// Removes a key, then notifies other contexts.
    pub fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.backend.remove(key.as_str())?;
        self.bus.publish(self.context);
        Ok(())
    }

    /// Listener that wakes when another context writes.
    pub fn subscribe(&self) -> ExternalChanges {
        self.bus.subscribe(self.context)
    }

    /// Raw write, bypassing JSON encoding. Used by tests to plant corrupt
    /// values.
    #[doc(hidden)]
    pub fn set_raw(&self, key: StoreKey, raw: &str) -> Result<(), StoreError> {
        self.backend.store(key.as_str(), raw)?;
        self.bus.publish(self.context);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{Theme, User};
    use domain::seed::default_services;

    #[test]
    fn test_collection_round_trip_is_deep_equal() {
        let store = EntityStore::in_memory();
        let services = default_services();
        store.set(StoreKey::Services, &services).unwrap();
        let read: Vec<domain::models::Service> = store.collection(StoreKey::Services);
        assert_eq!(read, services);
    }

    #[test]
    fn test_corrupt_value_reads_as_default() {
        let store = EntityStore::in_memory();
        store.set_raw(StoreKey::Users, "{not json").unwrap();
        let users: Vec<User> = store.collection(StoreKey::Users);
        assert!(users.is_empty());
        assert_eq!(store.get::<Vec<User>>(StoreKey::Users), None);
    }

    #[test]
    fn test_scalar_flags() {
        let store = EntityStore::in_memory();
        assert_eq!(store.get::<bool>(StoreKey::AdminFlag), None);
        store.set(StoreKey::AdminFlag, &true).unwrap();
        assert_eq!(store.get::<bool>(StoreKey::AdminFlag), Some(true));
        store.remove(StoreKey::AdminFlag).unwrap();
        assert_eq!(store.get::<bool>(StoreKey::AdminFlag), None);
    }

    #[test]
    fn test_write_visible_to_same_context_immediately() {
        let store = EntityStore::in_memory();
        store.set(StoreKey::Theme, &Theme::Dark).unwrap();
        assert_eq!(store.get::<Theme>(StoreKey::Theme), Some(Theme::Dark));
    }

    #[tokio::test]
    async fn test_sibling_contexts_share_data_and_notifications() {
        let first = EntityStore::in_memory();
        let second = first.open_sibling();

        let mut first_listener = first.subscribe();
        let mut second_listener = second.subscribe();

        first.set(StoreKey::AdminFlag, &true).unwrap();

        // The writer does not hear its own write; the sibling does, and
        // re-reads rather than trusting a stale copy.
        assert!(!first_listener.try_changed());
        assert!(second_listener.changed().await);
        assert_eq!(second.get::<bool>(StoreKey::AdminFlag), Some(true));
    }
}
