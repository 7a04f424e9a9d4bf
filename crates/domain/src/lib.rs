//! Domain layer for the CitizenConnect data layer.
//!
//! Pure types and logic with no I/O:
//! - Entity models and their store-boundary defaulting
//! - Derived projections (filtering, search, aggregation)
//! - Session rules for the admin and citizen identities
//! - The built-in seed catalog of services

pub mod error;
pub mod models;
pub mod projections;
pub mod seed;
pub mod session;

pub use error::DomainError;
