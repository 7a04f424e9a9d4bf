//! Complaint domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use super::{none_if_blank, User};

/// Urgency reported by the citizen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a complaint. New complaints always start `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplaintStatus::Open => write!(f, "open"),
            ComplaintStatus::InProgress => write!(f, "in-progress"),
            ComplaintStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// A citizen complaint as stored and served by the remote API.
///
/// `service_id` may dangle when the referenced service is gone; projections
/// render those as "Unknown service" rather than failing. `user_id` is absent
/// for guest submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    pub service_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub priority: Priority,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Complaint form input. The remote store assigns id, createdAt, and the
/// initial `open` status on create.
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    #[validate(required(message = "Select the affected service"))]
    pub service_id: Option<i64>,
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub description: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

impl ComplaintDraft {
    /// Pre-fills the submitter fields from a logged-in citizen.
    pub fn for_user(mut self, user: &User) -> Self {
        self.name = user.name.clone();
        self.contact = Some(user.email.clone());
        self.user_id = Some(user.id);
        self
    }

    /// Normalizes optional fields before the draft leaves the form layer.
    pub fn normalized(mut self) -> Self {
        self.contact = none_if_blank(self.contact);
        self
    }
}
