use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod form;

/// Request body for `POST /contact`. All five fields are always sent; empty
/// optional fields are defaulted by the relay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),

    #[error("Failed to serialize/deserialize message")]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct ContactClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            endpoint: format!("{}/contact", base_url.trim_end_matches('/')),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Performs exactly one POST. Error statuses still carry a reply body, so the
    /// body is decoded regardless of status.
    pub async fn send(&self, request: &ContactRequest) -> Result<ContactReply, ClientError> {
        let body = serde_json::to_string(request)?;
        let resp = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        let json = resp.text().await?;
        let reply: ContactReply = serde_json::from_str(&json)?;
        Ok(reply)
    }
}
