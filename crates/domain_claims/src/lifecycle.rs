//! Claim lifecycle policy
//!
//! Pure predicates from a claim's status string to the actions it
//! currently permits. Statuses are an open, server-defined set; both
//! predicates are total over arbitrary strings and compare exactly
//! (case-sensitive). The visual badge grouping lives in [`crate::badge`]
//! and is intentionally a separate classification.

use serde::Serialize;

/// Statuses in which a claim may still be edited.
pub const EDITABLE_STATUSES: [&str; 4] = [
    "Pending Verification",
    "Draft",
    "Rejected",
    "Pending Approval",
];

/// Statuses in which a claim may be cancelled.
pub const CANCELLABLE_STATUSES: [&str; 2] = ["Pending Verification", "Pending Approval"];

/// Statuses that end the lifecycle; no action is ever permitted from
/// these, even if a future status value also lands in one of the sets
/// above.
pub const TERMINAL_STATUSES: [&str; 3] = ["Approved", "Cancelled", "Processed"];

/// True when the claim may be edited in its current status.
pub fn can_edit(status: &str) -> bool {
    EDITABLE_STATUSES.contains(&status) && !TERMINAL_STATUSES.contains(&status)
}

/// True when the claim may be cancelled in its current status.
pub fn can_cancel(status: &str) -> bool {
    CANCELLABLE_STATUSES.contains(&status) && !TERMINAL_STATUSES.contains(&status)
}

/// The permitted action set for a status, as exposed to view models.
///
/// Advisory only: the controls are hidden when false, but the server
/// remains the authority on every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClaimActions {
    pub can_edit: bool,
    pub can_cancel: bool,
}

impl ClaimActions {
    /// Evaluates both predicates for a status.
    pub fn for_status(status: &str) -> Self {
        Self {
            can_edit: can_edit(status),
            can_cancel: can_cancel(status),
        }
    }

    /// The view-only action set.
    pub fn none() -> Self {
        Self {
            can_edit: false,
            can_cancel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_verification_allows_both() {
        assert!(can_edit("Pending Verification"));
        assert!(can_cancel("Pending Verification"));
    }

    #[test]
    fn test_draft_and_rejected_edit_only() {
        for status in ["Draft", "Rejected"] {
            assert!(can_edit(status));
            assert!(!can_cancel(status));
        }
    }

    #[test]
    fn test_terminal_statuses_allow_nothing() {
        for status in TERMINAL_STATUSES {
            assert!(!can_edit(status));
            assert!(!can_cancel(status));
        }
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(!can_edit("pending verification"));
        assert!(!can_cancel("PENDING APPROVAL"));
    }

    #[test]
    fn test_unknown_status_allows_nothing() {
        assert_eq!(ClaimActions::for_status("Escalated"), ClaimActions::none());
        assert_eq!(ClaimActions::for_status(""), ClaimActions::none());
    }
}
