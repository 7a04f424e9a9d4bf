//! The persisted key namespace.

use std::fmt;

/// Keys under which JSON-encoded collections and session flags live.
///
/// Key strings match the historical browser-storage names, so an existing
/// exported store stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Theme,
    AdminFlag,
    CurrentUser,
    Users,
    Services,
    Complaints,
    SupportTickets,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Theme => "theme",
            StoreKey::AdminFlag => "isLoggedIn",
            StoreKey::CurrentUser => "currentUser",
            StoreKey::Users => "users",
            StoreKey::Services => "services",
            StoreKey::Complaints => "complaints",
            StoreKey::SupportTickets => "supportTickets",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
