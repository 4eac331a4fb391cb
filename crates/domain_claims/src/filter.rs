//! In-memory claims list filtering
//!
//! The list page filters entirely over already-fetched summaries; nothing
//! here issues a request. The type branch matches a field the documented
//! backend contract never populates, so selecting a concrete type over a
//! typeless list yields no rows.

use crate::summary::ClaimSummary;

/// Sentinel option meaning "no restriction" for the status and type
/// selectors.
pub const FILTER_ALL: &str = "ALL";

/// Filter state for the claims list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimFilter {
    /// Case-insensitive substring over display id, requestor, and purpose
    pub search: String,
    /// Exact status match, or [`FILTER_ALL`]
    pub status: String,
    /// Exact claim type match, or [`FILTER_ALL`]
    pub claim_type: String,
}

impl Default for ClaimFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FILTER_ALL.to_string(),
            claim_type: FILTER_ALL.to_string(),
        }
    }
}

impl ClaimFilter {
    /// True when the claim passes all three criteria.
    pub fn matches(&self, claim: &ClaimSummary) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || claim.display_id().to_lowercase().contains(&needle)
            || claim.requestor.to_lowercase().contains(&needle)
            || claim.purpose.to_lowercase().contains(&needle);

        let matches_status = self.status == FILTER_ALL || claim.status == self.status;

        let matches_type = self.claim_type == FILTER_ALL
            || claim.claim_type.as_deref() == Some(self.claim_type.as_str());

        matches_search && matches_status && matches_type
    }

    /// Applies the filter, preserving order.
    pub fn apply<'a>(&self, claims: &'a [ClaimSummary]) -> Vec<&'a ClaimSummary> {
        claims.iter().filter(|claim| self.matches(claim)).collect()
    }
}
