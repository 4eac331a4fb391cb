//! Tolerant field resolution over backend payloads
//!
//! The claims backend has emitted fields under two spellings over its
//! lifetime (snake_case and camelCase), sometimes mixed within a single
//! object. Resolution is per field: the first candidate key present on the
//! object wins, where a JSON null counts as present and converts to the
//! caller's default. Callers list the snake_case spelling first.

use serde_json::{Map, Value};

use crate::dates::LenientDate;
use crate::numeric::LenientNumber;

/// Returns the value under the first candidate key present on the object.
///
/// Presence is key-presence, not non-nullness: a null under an earlier key
/// shadows a value under a later one.
pub fn pick<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

/// Resolves a string field, falling back to `default` when no candidate
/// key holds a string or number.
pub fn string_or(obj: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    opt_string(obj, keys).unwrap_or_else(|| default.to_string())
}

/// Resolves an optional string field. Numbers are stringified; any other
/// type resolves to `None`.
pub fn opt_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match pick(obj, keys)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolves a boolean flag; anything that is not a JSON boolean is `false`.
pub fn flag(obj: &Map<String, Value>, keys: &[&str]) -> bool {
    matches!(pick(obj, keys), Some(Value::Bool(true)))
}

/// Resolves a numeric field into a [`LenientNumber`].
pub fn number(obj: &Map<String, Value>, keys: &[&str]) -> LenientNumber {
    LenientNumber::from_value(pick(obj, keys))
}

/// Resolves a date field into a [`LenientDate`].
pub fn date(obj: &Map<String, Value>, keys: &[&str]) -> LenientDate {
    LenientDate::from_value(pick(obj, keys))
}

/// Resolves a sequence field; any non-array value yields an empty slice.
pub fn items<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> &'a [Value] {
    pick(obj, keys)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Resolves a nested object group, if present.
pub fn group<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Map<String, Value>> {
    pick(obj, keys).and_then(Value::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_first_spelling_wins() {
        let o = obj(json!({"document_number": "TSR-001", "documentNumber": "TSR-002"}));
        assert_eq!(
            string_or(&o, &["document_number", "documentNumber"], ""),
            "TSR-001"
        );
    }

    #[test]
    fn test_second_spelling_used_when_first_absent() {
        let o = obj(json!({"documentNumber": "TSR-002"}));
        assert_eq!(
            string_or(&o, &["document_number", "documentNumber"], ""),
            "TSR-002"
        );
    }

    #[test]
    fn test_default_when_neither_present() {
        let o = obj(json!({}));
        assert_eq!(string_or(&o, &["document_number", "documentNumber"], "-"), "-");
        assert_eq!(opt_string(&o, &["document_number", "documentNumber"]), None);
    }

    #[test]
    fn test_null_counts_as_present() {
        // A null under the first spelling shadows the second and converts
        // to the default.
        let o = obj(json!({"document_number": null, "documentNumber": "TSR-002"}));
        assert_eq!(string_or(&o, &["document_number", "documentNumber"], ""), "");
    }

    #[test]
    fn test_resolution_is_per_field() {
        // One payload mixing conventions across fields resolves each
        // field independently.
        let o = obj(json!({"document_number": "TSR-001", "staffName": "Jane Lim"}));
        assert_eq!(
            string_or(&o, &["document_number", "documentNumber"], ""),
            "TSR-001"
        );
        assert_eq!(string_or(&o, &["staff_name", "staffName"], ""), "Jane Lim");
    }

    #[test]
    fn test_numbers_stringify() {
        let o = obj(json!({"id": 1042}));
        assert_eq!(opt_string(&o, &["id"]), Some("1042".to_string()));
    }

    #[test]
    fn test_flag_requires_boolean_true() {
        let o = obj(json!({"isMedicalClaim": true, "isForFamily": "yes"}));
        assert!(flag(&o, &["is_medical_claim", "isMedicalClaim"]));
        assert!(!flag(&o, &["is_for_family", "isForFamily"]));
    }

    #[test]
    fn test_items_absorbs_bad_shapes() {
        let o = obj(json!({"expenseItems": {"not": "an array"}}));
        assert!(items(&o, &["expense_items", "expenseItems"]).is_empty());
        assert!(items(&o, &["fxRates"]).is_empty());
    }

    #[test]
    fn test_group_lookup() {
        let o = obj(json!({"bankDetails": {"bankName": "First National"}}));
        let bank = group(&o, &["bank_details", "bankDetails"]).unwrap();
        assert_eq!(string_or(bank, &["bank_name", "bankName"], ""), "First National");
        assert!(group(&o, &["headerDetails"]).is_none());
    }
}
