//! HTTP client
//!
//! Thin client for the REST API, used by the CLI `ask` and `status`
//! commands against a running server.

use crate::corpus::CorpusStatus;
use crate::http::types::{ErrorResponse, QueryRequest, QueryResponse};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the server
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Server is not reachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    ServerError { status: StatusCode, message: String },
}

/// Client for a running handbook QA server
pub struct HandbookClient {
    base_url: String,
    client: reqwest::Client,
}

impl HandbookClient {
    /// Create a client for the given base URL (e.g. "http://127.0.0.1:3001")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Ask a question against the loaded handbook
    pub async fn ask(&self, question: &str) -> Result<QueryResponse, ClientError> {
        let url = format!("{}/api/v1/query", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&QueryRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|source| ClientError::Unreachable {
                url: url.clone(),
                source,
            })?;

        Self::parse(response).await
    }

    /// Fetch the corpus status
    pub async fn status(&self) -> Result<CorpusStatus, ClientError> {
        let url = format!("{}/api/v1/status", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Unreachable {
                url: url.clone(),
                source,
            })?;

        Self::parse(response).await
    }

    /// Decode a success body, or surface the server's error message
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(ClientError::ServerError { status, message })
        }
    }
}
