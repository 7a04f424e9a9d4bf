//! Support ticket domain models. Tickets are store-only: the remote API has
//! no endpoint for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Routing topic chosen on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketTopic {
    #[default]
    General,
    Services,
    Complaints,
    Feedback,
}

/// A submitted support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub topic: TicketTopic,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form input.
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub topic: TicketTopic,
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub message: String,
}

impl TicketDraft {
    /// Validates the form and stamps the ticket with an id and timestamp.
    pub fn build(self) -> Result<SupportTicket, ValidationErrors> {
        self.validate()?;
        Ok(SupportTicket {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            topic: self.topic,
            message: self.message,
            created_at: Utc::now(),
        })
    }
}
