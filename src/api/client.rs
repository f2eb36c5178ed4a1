//! Request dispatcher — one HTTP call per accepted plan.
//!
//! Posts JSON to the configured crew server and normalizes every way a
//! call can resolve into `Result<CrewReply, ApiError>`. One attempt per
//! turn; no retries and no client-side timeout, since a stage can
//! legitimately run for minutes.

use async_trait::async_trait;

use crate::config::CrewConfig;
use crate::conversation::{Endpoint, RequestPlan};
use crate::error::ApiError;

use super::types::{CrewReply, ErrorReply};

/// Dispatch seam between the session and the HTTP layer.
#[async_trait]
pub trait CrewApi: Send + Sync {
    /// Execute exactly one request for this plan.
    async fn dispatch(&self, plan: &RequestPlan) -> Result<CrewReply, ApiError>;
}

/// HTTP client for the crew server.
///
/// The cookie jar is load-bearing: the server keeps the project context
/// in a cookie-keyed session, and the two post-kickoff calls send empty
/// bodies that only mean something alongside that cookie.
pub struct CrewClient {
    client: reqwest::Client,
    base_url: String,
}

impl CrewClient {
    /// Build a client against the configured server.
    pub fn new(config: &CrewConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl CrewApi for CrewClient {
    async fn dispatch(&self, plan: &RequestPlan) -> Result<CrewReply, ApiError> {
        let resp = self
            .client
            .post(self.endpoint_url(plan.endpoint))
            .json(&plan.payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint: plan.endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            // Error bodies are best-effort JSON; anything else means no details.
            let body: ErrorReply = resp.json().await.unwrap_or_default();
            tracing::warn!(
                endpoint = %plan.endpoint,
                status = status.as_u16(),
                error = body.error.as_deref().unwrap_or("-"),
                "Crew request failed"
            );
            return Err(ApiError::Server {
                status: status.as_u16(),
                details: body.details,
            });
        }

        let reply: CrewReply = resp.json().await.map_err(|e| ApiError::InvalidBody {
            endpoint: plan.endpoint.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(endpoint = %plan.endpoint, "Crew request succeeded");
        Ok(reply)
    }
}
