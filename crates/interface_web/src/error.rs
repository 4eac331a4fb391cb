//! Presentation error handling
//!
//! Gateway failures map onto the three client-facing states: a page-level
//! fetch error, a dedicated not-found card, and a non-fatal action
//! rejection notice. Nothing propagates uncaught; the worst case is a
//! degraded view.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use infra_claims_api::GatewayError;

/// Presentation error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// A page fetch failed; rendered as the page-level error state
    #[error("{0}")]
    FetchFailed(String),

    /// The record does not exist; rendered as the not-found card
    #[error("{0}")]
    NotFound(String),

    /// A cancel submission was rejected; rendered as an error notice
    #[error("{0}")]
    ActionRejected(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a list fetch failure to its page-level message.
    pub fn from_list_fetch(error: GatewayError) -> Self {
        match error.status_reason() {
            Some(reason) => ApiError::FetchFailed(format!("Error fetching claims: {reason}")),
            None => ApiError::FetchFailed(error.to_string()),
        }
    }

    /// Maps a detail fetch failure, keeping the not-found state distinct
    /// from the error state.
    pub fn from_detail_fetch(error: GatewayError, id: &str) -> Self {
        if error.is_not_found() {
            return ApiError::NotFound(format!(
                "The requested Claim (ID: {id}) could not be found or loaded."
            ));
        }
        match error.status_reason() {
            Some(reason) => ApiError::FetchFailed(format!("Error fetching claim: {reason}")),
            None => ApiError::FetchFailed(error.to_string()),
        }
    }

    /// Maps a cancel failure to a non-fatal notice.
    pub fn from_cancel(error: GatewayError, id: &str) -> Self {
        match error {
            GatewayError::Rejected { message } => ApiError::ActionRejected(message),
            other => Self::from_detail_fetch(other, id),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::FetchFailed(msg) => (StatusCode::BAD_GATEWAY, "fetch_failed", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::ActionRejected(msg) => (StatusCode::CONFLICT, "action_rejected", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
