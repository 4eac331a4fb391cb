//! HTTP adapter for the claims gateway

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use domain_claims::{normalize, ClaimDetail, ClaimSummary};

use crate::error::GatewayError;
use crate::gateway::{CancelClaimRequest, ClaimsGateway};

/// Configuration for the HTTP gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the upstream claims service
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// `reqwest`-backed implementation of [`ClaimsGateway`]
#[derive(Debug, Clone)]
pub struct HttpClaimsGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpClaimsGateway {
    /// Creates a gateway against the configured upstream
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn claims_url(&self) -> String {
        format!("{}/api/claims", self.config.base_url.trim_end_matches('/'))
    }

    fn claim_url(&self, id: &str) -> String {
        format!("{}/{}", self.claims_url(), id)
    }

    fn cancel_url(&self, id: &str) -> String {
        format!("{}/cancel", self.claim_url(id))
    }
}

#[async_trait]
impl ClaimsGateway for HttpClaimsGateway {
    async fn list_claims(&self) -> Result<Vec<ClaimSummary>, GatewayError> {
        let response = self.client.get(self.claims_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "claims list fetch failed");
            return Err(GatewayError::upstream(status.as_u16(), status_reason(status)));
        }

        let payload: Value = response.json().await?;
        let claims = normalize::claim_list(&payload);
        tracing::debug!(count = claims.len(), "claims list fetched");
        Ok(claims)
    }

    async fn fetch_claim(&self, id: &str) -> Result<ClaimDetail, GatewayError> {
        let response = self.client.get(self.claim_url(id)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            tracing::warn!(claim_id = %id, status = status.as_u16(), "claim fetch failed");
            return Err(GatewayError::upstream(status.as_u16(), status_reason(status)));
        }

        let payload: Value = response.json().await?;
        normalize::claim_detail(&payload).ok_or_else(|| GatewayError::NotFound { id: id.to_string() })
    }

    async fn cancel_claim(
        &self,
        id: &str,
        request: &CancelClaimRequest,
    ) -> Result<ClaimDetail, GatewayError> {
        let response = self
            .client
            .post(self.cancel_url(id))
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = rejection_message(&body);
            tracing::warn!(claim_id = %id, status = status.as_u16(), %message, "cancel rejected");
            return Err(GatewayError::Rejected { message });
        }

        let payload: Value = response.json().await?;
        tracing::info!(claim_id = %id, "claim cancelled");
        Ok(normalize::cancelled_claim(&payload))
    }
}

/// Fallback message when a rejection body carries no usable text.
pub const GENERIC_CANCEL_FAILURE: &str = "Failed to cancel claim.";

fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Extracts the upstream's `error` or `details` message from a rejection
/// body, in that order.
fn rejection_message(body: &Value) -> String {
    body.as_object()
        .and_then(|obj| {
            ["error", "details"]
                .iter()
                .find_map(|key| obj.get(*key))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_CANCEL_FAILURE.to_string())
}
