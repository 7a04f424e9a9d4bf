//! Shared utilities for the CitizenConnect data layer.
//!
//! This crate provides common functionality used across the other crates:
//! - Form and field validation helpers

pub mod validation;
