//! Entity models persisted in the store and exchanged with the remote API.

pub mod complaint;
pub mod service;
pub mod theme;
pub mod ticket;
pub mod user;

pub use complaint::{Complaint, ComplaintDraft, ComplaintStatus, Priority};
pub use service::{Service, ServiceCategory, ServiceDraft, ServiceStatus};
pub use theme::Theme;
pub use ticket::{SupportTicket, TicketDraft, TicketTopic};
pub use user::{Credentials, Signup, User};

/// Treats empty or whitespace-only optional form inputs as absent.
pub(crate) fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
