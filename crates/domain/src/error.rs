//! Domain error types.

use thiserror::Error;

/// Errors produced by domain rules.
///
/// None of these are fatal; callers report them inline and carry on.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("A user with this email already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),
}

impl DomainError {
    /// True when the error should be rendered next to a form field rather
    /// than as a page-level failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateEmail | DomainError::InvalidCredentials | DomainError::Validation(_)
        )
    }
}
