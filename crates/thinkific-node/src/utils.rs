// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Small pure helpers for parameter and response shaping

use crate::error::NodeError;
use serde_json::{Map, Value};

/// Convert `"true"`/`"false"` string fields to real booleans.
///
/// Applies to object fields only and recurses into nested plain objects;
/// arrays, numbers, other strings, and null pass through unchanged.
pub fn convert_boolean_strings(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let converted = map
                .iter()
                .map(|(key, value)| {
                    let value = match value {
                        Value::String(s) if s == "true" => Value::Bool(true),
                        Value::String(s) if s == "false" => Value::Bool(false),
                        Value::Object(_) => convert_boolean_strings(value),
                        other => other.clone(),
                    };
                    (key.clone(), value)
                })
                .collect();
            Value::Object(converted)
        }
        other => other.clone(),
    }
}

/// Parse a comma-separated id list (`" 1, 2,3 "`) into integers.
///
/// Entries are trimmed before parsing; any non-numeric entry fails the whole
/// list with a permanent error rather than shipping garbage to the vendor.
pub fn parse_id_list(input: &str) -> Result<Vec<i64>, NodeError> {
    input
        .split(',')
        .map(str::trim)
        .map(|entry| {
            entry.parse::<i64>().map_err(|_| {
                NodeError::permanent(
                    "INVALID_ID_LIST",
                    format!("Invalid id in comma-separated list: '{}'", entry),
                )
            })
        })
        .collect()
}

/// Keep exactly the `page`, `limit`, and `query` keys of a filter object.
///
/// Unset values (null, empty string, zero) are dropped along with every
/// other key.
pub fn extract_list_query(fields: &Map<String, Value>) -> Map<String, Value> {
    let mut query = Map::new();
    for key in ["page", "limit", "query"] {
        if let Some(value) = fields.get(key).filter(|v| is_set(v)) {
            query.insert(key.to_string(), value.clone());
        }
    }
    query
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_true_string() {
        let result = convert_boolean_strings(&json!({ "active": "true" }));
        assert_eq!(result, json!({ "active": true }));
    }

    #[test]
    fn test_convert_false_string() {
        let result = convert_boolean_strings(&json!({ "active": "false" }));
        assert_eq!(result, json!({ "active": false }));
    }

    #[test]
    fn test_convert_leaves_other_strings() {
        let input = json!({ "name": "John", "email": "john@example.com" });
        assert_eq!(convert_boolean_strings(&input), input);
    }

    #[test]
    fn test_convert_recurses_into_nested_objects() {
        let input = json!({
            "user": { "active": "true", "verified": "false", "name": "John" },
        });
        let result = convert_boolean_strings(&input);
        assert_eq!(
            result,
            json!({
                "user": { "active": true, "verified": false, "name": "John" },
            })
        );
    }

    #[test]
    fn test_convert_leaves_arrays_untouched() {
        let input = json!({ "tags": ["true", "tag2"] });
        assert_eq!(convert_boolean_strings(&input), input);
    }

    #[test]
    fn test_convert_mixed_types() {
        let input = json!({ "active": "true", "count": 5, "name": "Test", "enabled": "false", "missing": null });
        let result = convert_boolean_strings(&input);
        assert_eq!(
            result,
            json!({ "active": true, "count": 5, "name": "Test", "enabled": false, "missing": null })
        );
    }

    #[test]
    fn test_convert_non_object_passthrough() {
        assert_eq!(convert_boolean_strings(&json!("true")), json!("true"));
        assert_eq!(convert_boolean_strings(&json!(null)), json!(null));
    }

    #[test]
    fn test_parse_id_list_trims_and_parses() {
        assert_eq!(parse_id_list(" 1, 2,3 ").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_id_list_single_entry() {
        assert_eq!(parse_id_list("42").unwrap(), vec![42]);
    }

    #[test]
    fn test_parse_id_list_rejects_non_numeric() {
        let err = parse_id_list("1, abc, 3").unwrap_err();
        assert_eq!(err.code, "INVALID_ID_LIST");
        assert!(err.message.contains("abc"));
    }

    #[test]
    fn test_parse_id_list_rejects_empty_entry() {
        assert!(parse_id_list("1,,3").is_err());
        assert!(parse_id_list("").is_err());
    }

    #[test]
    fn test_extract_list_query_keeps_known_keys() {
        let fields = json!({ "page": 3, "limit": 25, "query": "x", "name": "ignored" });
        let result = extract_list_query(fields.as_object().unwrap());
        assert_eq!(Value::Object(result), json!({ "page": 3, "limit": 25, "query": "x" }));
    }

    #[test]
    fn test_extract_list_query_drops_unset_values() {
        let fields = json!({ "page": 0, "limit": null, "query": "" });
        let result = extract_list_query(fields.as_object().unwrap());
        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_list_query_empty_input() {
        let result = extract_list_query(&Map::new());
        assert!(result.is_empty());
    }
}
