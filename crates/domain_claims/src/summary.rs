//! Claim list projection

use serde_json::{Map, Value};

use core_kernel::{fields, LenientDate, LenientNumber};

/// One row of the claims list, as normalized from a backend payload.
///
/// Never constructed locally: always the result of normalizing a fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSummary {
    /// Backend-assigned identifier (numbers are stringified)
    pub id: String,
    /// Human-facing claim number, either historical spelling
    pub document_number: Option<String>,
    /// Claimant display name
    pub requestor: String,
    /// Free-text description
    pub purpose: String,
    /// Claimed amount, USD
    pub amount: LenientNumber,
    /// Server-defined status string, open set
    pub status: String,
    /// Date the claim was filed
    pub submitted_date: LenientDate,
    /// Claim type, when the backend sends one. The documented contract
    /// never populates this; the list filter still honors it when present.
    pub claim_type: Option<String>,
}

impl ClaimSummary {
    /// Normalizes a single claim-like object.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            id: fields::opt_string(obj, &["id"]).unwrap_or_default(),
            document_number: fields::opt_string(obj, &["document_number", "documentNumber"]),
            requestor: fields::string_or(obj, &["requestor"], ""),
            purpose: fields::string_or(obj, &["purpose"], ""),
            amount: fields::number(obj, &["amount"]),
            status: fields::string_or(obj, &["status"], ""),
            submitted_date: fields::date(obj, &["submitted_date", "submittedDate"]),
            claim_type: fields::opt_string(obj, &["type"]),
        }
    }

    /// The identifier shown to users: the document number when one was
    /// assigned, else the raw id.
    pub fn display_id(&self) -> &str {
        self.document_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_display_id_prefers_document_number() {
        let claim = ClaimSummary::from_object(&obj(json!({
            "id": "C1",
            "documentNumber": "TSR-001"
        })));
        assert_eq!(claim.display_id(), "TSR-001");
    }

    #[test]
    fn test_display_id_falls_back_to_id() {
        let claim = ClaimSummary::from_object(&obj(json!({"id": "C1"})));
        assert_eq!(claim.display_id(), "C1");

        let blank = ClaimSummary::from_object(&obj(json!({
            "id": "C2",
            "document_number": ""
        })));
        assert_eq!(blank.display_id(), "C2");
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let claim = ClaimSummary::from_object(&obj(json!({"id": 1042})));
        assert_eq!(claim.id, "1042");
    }
}
