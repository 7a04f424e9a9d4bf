//! Citizen account domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A registered citizen account.
///
/// Passwords are stored in plaintext by design: this is demo-grade identity
/// with no real authentication behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Single-letter avatar initial shown in the header chip.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Signup form input.
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "shared::validation::validate_password"))]
    pub password: String,
}

/// Citizen login form input.
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub password: String,
}
