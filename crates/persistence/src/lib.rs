//! Entity store adapter for the CitizenConnect data layer.
//!
//! This crate contains:
//! - The persisted key namespace ([`keys::StoreKey`])
//! - Pluggable raw key-value backends (in-memory and SQLite)
//! - The cross-context change-notification bus
//! - [`store::EntityStore`], the typed per-context handle

pub mod backend;
pub mod bus;
pub mod keys;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use backend::{StoreBackend, StoreError};
pub use bus::ExternalChanges;
pub use keys::StoreKey;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::EntityStore;
