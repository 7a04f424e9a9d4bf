//! Client-side error taxonomy.
//!
//! Nothing here is fatal: every failure is reported to the caller as a value
//! (and logged) so the UI can render it inline. There are no automatic
//! retries anywhere.

use reqwest::StatusCode;
use thiserror::Error;

/// Outcome classes for remote calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server understood the request and refused it (non-2xx).
    #[error("Request rejected by server ({status})")]
    Rejected { status: StatusCode },

    /// The request never completed: connection refused, timeout, DNS.
    /// Surfaced distinctly so the UI can say "check your connection".
    #[error("Network failure, please try again")]
    Network(#[source] reqwest::Error),

    /// A 2xx response whose body could not be decoded.
    #[error("Malformed response from server")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Top-level error type of the data layer facade.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required form field was missing or malformed. No network call was
    /// made.
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Domain(#[from] domain::DomainError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] persistence::StoreError),

    #[error("Admin access required")]
    AdminRequired,
}

impl ClientError {
    /// True for the "try again" class of failures, as opposed to ones where
    /// retrying the same input cannot help.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Api(ApiError::Network(_)))
    }
}
