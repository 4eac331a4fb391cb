//! Gateway error types
//!
//! The taxonomy mirrors how failures surface to users: transport failures
//! and upstream non-2xx statuses become page-level error states, a missing
//! record becomes a dedicated not-found state, and a rejected cancel is a
//! non-fatal notification. Nothing here is fatal to the process.

use thiserror::Error;

/// Errors that can occur while talking to the upstream claims API
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The transport failed before a response arrived
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status
    #[error("Upstream returned {status} {reason}")]
    Upstream {
        /// Numeric HTTP status
        status: u16,
        /// Canonical status reason, e.g. "Internal Server Error"
        reason: String,
    },

    /// The detail endpoint produced no usable record
    #[error("Claim not found: {id}")]
    NotFound { id: String },

    /// The upstream rejected a cancel submission
    #[error("{message}")]
    Rejected { message: String },
}

impl GatewayError {
    /// Builds an upstream-status error from the numeric status and its
    /// canonical reason.
    pub fn upstream(status: u16, reason: impl Into<String>) -> Self {
        GatewayError::Upstream {
            status,
            reason: reason.into(),
        }
    }

    /// Checks if this error indicates the claim was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }

    /// Checks if this error is a rejected action rather than a fetch
    /// failure
    pub fn is_rejection(&self) -> bool {
        matches!(self, GatewayError::Rejected { .. })
    }

    /// The upstream status reason, when one was captured
    pub fn status_reason(&self) -> Option<&str> {
        match self {
            GatewayError::Upstream { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
