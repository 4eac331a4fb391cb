//! Response normalization for the claims backend
//!
//! The backend has served two envelope shapes per endpoint over its
//! lifetime: list payloads arrive as a bare array or wrapped under
//! `claims`, detail payloads bare or wrapped under `claimData`, and cancel
//! responses wrapped under `claim`. Normalization is fail-soft: an
//! unrecognized list shape yields an empty sequence so the list page still
//! renders, never an error.

use serde_json::Value;

use crate::detail::ClaimDetail;
use crate::summary::ClaimSummary;

/// Normalizes a list payload into claim summaries.
///
/// Accepts a bare array or `{"claims": [...]}`; any other shape yields an
/// empty vector. Non-object entries are skipped.
pub fn claim_list(payload: &Value) -> Vec<ClaimSummary> {
    let entries = match payload {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(obj) => obj
            .get("claims")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .map(ClaimSummary::from_object)
        .collect()
}

/// Normalizes a detail payload into a claim record.
///
/// Accepts a bare claim object or `{"claimData": {...}}`. Returns `None`
/// when the payload holds no usable record at all, which callers surface
/// as a missing resource rather than an error.
pub fn claim_detail(payload: &Value) -> Option<ClaimDetail> {
    let obj = payload.as_object()?;
    let record = obj
        .get("claimData")
        .and_then(Value::as_object)
        .unwrap_or(obj);
    Some(ClaimDetail::from_object(record))
}

/// Normalizes a cancel response into the replacement claim record.
///
/// The backend nests the updated record under `claim`; a response without
/// that envelope normalizes to an empty-default record. This mirrors the
/// agreed backend contract and must not be widened without renegotiating
/// it.
pub fn cancelled_claim(payload: &Value) -> ClaimDetail {
    payload
        .as_object()
        .and_then(|obj| obj.get("claim"))
        .and_then(Value::as_object)
        .map(ClaimDetail::from_object)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_and_wrapped_list_agree() {
        let bare = json!([{"id": "C1", "status": "Approved"}]);
        let wrapped = json!({"claims": [{"id": "C1", "status": "Approved"}]});
        assert_eq!(claim_list(&bare), claim_list(&wrapped));
        assert_eq!(claim_list(&bare).len(), 1);
    }

    #[test]
    fn test_unrecognized_list_shapes_yield_empty() {
        for payload in [
            json!({"data": [{"id": "C1"}]}),
            json!("claims"),
            json!(42),
            json!(null),
            json!({"claims": "not an array"}),
        ] {
            assert!(claim_list(&payload).is_empty());
        }
    }

    #[test]
    fn test_detail_bare_and_wrapped_agree() {
        let bare = json!({"id": "C7", "status": "Rejected"});
        let wrapped = json!({"claimData": {"id": "C7", "status": "Rejected"}});
        assert_eq!(claim_detail(&bare), claim_detail(&wrapped));
    }

    #[test]
    fn test_detail_non_object_is_none() {
        assert!(claim_detail(&json!(null)).is_none());
        assert!(claim_detail(&json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_cancel_reads_claim_envelope_only() {
        let wrapped = json!({"claim": {"id": "C3", "status": "Cancelled"}});
        let claim = cancelled_claim(&wrapped);
        assert_eq!(claim.status, "Cancelled");

        // A bare record clears to the empty default, per the backend
        // contract.
        let bare = json!({"id": "C3", "status": "Cancelled"});
        assert_eq!(cancelled_claim(&bare), ClaimDetail::default());
    }
}
