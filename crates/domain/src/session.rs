//! Session rules for the two independent identities.
//!
//! The admin flag and the citizen record have separate lifecycles and no
//! mutual exclusion: both can be set at once. When they are, admin controls
//! take precedence in the UI.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use crate::models::{Credentials, Signup, User};

/// Snapshot of both identities for the current context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub admin: bool,
    pub citizen: Option<User>,
}

impl Session {
    pub fn is_anonymous(&self) -> bool {
        !self.admin && self.citizen.is_none()
    }

    /// Whether admin-only controls (add service, review users) are shown.
    pub fn shows_admin_controls(&self) -> bool {
        self.admin
    }
}

/// The fixed demo credential pair guarding the admin identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Exact match only; there is no hashing in this demo-grade flow.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Finds the citizen account matching the submitted credentials.
pub fn authenticate<'a>(users: &'a [User], credentials: &Credentials) -> Result<&'a User, DomainError> {
    credentials.validate()?;
    users
        .iter()
        .find(|u| u.email == credentials.email && u.password == credentials.password)
        .ok_or(DomainError::InvalidCredentials)
}

/// Creates a new citizen account after the email-uniqueness check.
///
/// The caller appends the returned record to the collection and persists it;
/// this function never mutates its input.
pub fn register(users: &[User], signup: Signup) -> Result<User, DomainError> {
    signup.validate()?;
    if users.iter().any(|u| u.email == signup.email) {
        return Err(DomainError::DuplicateEmail);
    }
    Ok(User {
        id: Uuid::new_v4(),
        name: signup.name,
        email: signup.email,
        password: signup.password,
    })
}
