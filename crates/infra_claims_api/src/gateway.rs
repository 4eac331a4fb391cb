//! Claims gateway port
//!
//! The port trait the presentation layer depends on. The production
//! implementation is [`crate::http::HttpClaimsGateway`]; tests use an
//! in-memory fake.

use async_trait::async_trait;
use serde::Serialize;

use domain_claims::{ClaimDetail, ClaimSummary};

use crate::error::GatewayError;

/// Fixed comment submitted with every cancellation.
pub const DEFAULT_CANCEL_COMMENT: &str = "Cancelled by user.";

/// Actor recorded when the claim carries no requestor name.
pub const FALLBACK_CANCEL_ACTOR: &str = "User";

/// Body of a cancel submission, in the upstream's wire spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelClaimRequest {
    pub comments: String,
    pub cancelled_by: String,
}

impl CancelClaimRequest {
    /// Builds the standard cancellation body for a requestor, falling
    /// back to the generic actor when the claim has no name attached.
    pub fn for_requestor(requestor_name: Option<&str>) -> Self {
        Self {
            comments: DEFAULT_CANCEL_COMMENT.to_string(),
            cancelled_by: requestor_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(FALLBACK_CANCEL_ACTOR)
                .to_string(),
        }
    }
}

/// Port over the upstream claims REST API.
///
/// One request in flight per page interaction; implementations perform no
/// retries and no caching.
#[async_trait]
pub trait ClaimsGateway: Send + Sync {
    /// Fetches every claim visible to the caller.
    async fn list_claims(&self) -> Result<Vec<ClaimSummary>, GatewayError>;

    /// Fetches a single claim by backend identifier.
    async fn fetch_claim(&self, id: &str) -> Result<ClaimDetail, GatewayError>;

    /// Submits a cancellation and returns the replacement record.
    async fn cancel_claim(
        &self,
        id: &str,
        request: &CancelClaimRequest,
    ) -> Result<ClaimDetail, GatewayError>;
}
