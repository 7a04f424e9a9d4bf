//! Remote sync client: a thin typed wrapper over the civic REST API.
//!
//! Every call resolves to one of three outcomes: a parsed payload, a
//! server-side rejection (non-2xx), or a network failure. Failures are
//! logged and returned; nothing is retried, and nothing is applied locally
//! before the server confirms.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use domain::models::{Complaint, ComplaintDraft, Service, ServiceDraft};

use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/services"))
            .send()
            .await
            .map_err(Self::network)?;
        Self::parse(response).await
    }

    /// Creates a service. The server assigns the id and fills rating and
    /// image defaults.
    pub async fn create_service(&self, draft: &ServiceDraft) -> Result<Service, ApiError> {
        let response = self
            .http
            .post(self.url("/api/services"))
            .json(draft)
            .send()
            .await
            .map_err(Self::network)?;
        Self::parse(response).await
    }

    pub async fn list_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/complaints"))
            .send()
            .await
            .map_err(Self::network)?;
        Self::parse(response).await
    }

    /// Creates a complaint. The server assigns id, createdAt, and the
    /// initial `open` status.
    pub async fn create_complaint(&self, draft: &ComplaintDraft) -> Result<Complaint, ApiError> {
        let response = self
            .http
            .post(self.url("/api/complaints"))
            .json(draft)
            .send()
            .await
            .map_err(Self::network)?;
        Self::parse(response).await
    }

    pub async fn delete_complaint(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/complaints/{}", id)))
            .send()
            .await
            .map_err(Self::network)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(%status, %id, "complaint delete rejected");
            Err(ApiError::Rejected { status })
        }
    }

    fn network(err: reqwest::Error) -> ApiError {
        tracing::warn!(error = %err, "remote request failed");
        ApiError::Network(err)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "remote request rejected");
            return Err(ApiError::Rejected { status });
        }
        response.json().await.map_err(ApiError::from_body)
    }
}
