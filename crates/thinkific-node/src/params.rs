// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Typed access to one input record's parameters
//!
//! Each input record carries the node parameters for that record as a JSON
//! object. `Params` wraps that object with typed getters; missing or
//! wrongly-typed values are permanent errors since retrying cannot fix a bad
//! workflow configuration.

use crate::error::NodeError;
use crate::utils::convert_boolean_strings;
use serde_json::{Map, Number, Value};

/// Borrow wrapper over one input record's parameter object
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    values: &'a Map<String, Value>,
}

impl<'a> Params<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Params { values }
    }

    /// Wrap an input record, which must be a JSON object
    pub fn from_record(record: &'a Value) -> Result<Self, NodeError> {
        record
            .as_object()
            .map(Params::new)
            .ok_or_else(|| {
                NodeError::permanent("RECORD_INVALID", "Input record must be a JSON object")
            })
    }

    /// Required string parameter
    pub fn string(&self, name: &str) -> Result<&'a str, NodeError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Err(missing(name)),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(invalid(name, "a string", other)),
        }
    }

    /// Optional string parameter
    pub fn opt_string(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).and_then(Value::as_str)
    }

    /// Required numeric parameter, accepting JSON numbers only
    pub fn number(&self, name: &str) -> Result<Number, NodeError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Err(missing(name)),
            Some(Value::Number(n)) => Ok(n.clone()),
            Some(other) => Err(invalid(name, "a number", other)),
        }
    }

    /// Integer id parameter: a JSON number or a numeric string.
    ///
    /// Used where the vendor request body requires a numeric field while the
    /// UI delivers the id as a string.
    pub fn int(&self, name: &str) -> Result<i64, NodeError> {
        match self.values.get(name) {
            None | Some(Value::Null) => Err(missing(name)),
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| invalid(name, "an integer", &Value::Number(n.clone()))),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid(name, "an integer", &Value::String(s.clone()))),
            Some(other) => Err(invalid(name, "an integer", other)),
        }
    }

    /// Boolean parameter with a default for absent values
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.values
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// Unsigned integer parameter with a default for absent values
    pub fn u64_or(&self, name: &str, default: u64) -> u64 {
        self.values
            .get(name)
            .and_then(Value::as_u64)
            .unwrap_or(default)
    }

    /// Collection parameter (additionalFields, updateFields, filters).
    ///
    /// Absent collections resolve to an empty object. Boolean-valued child
    /// fields may arrive from the UI as `"true"`/`"false"` strings and are
    /// normalized here.
    pub fn collection(&self, name: &str) -> Map<String, Value> {
        match self.values.get(name) {
            Some(value @ Value::Object(_)) => convert_boolean_strings(value)
                .as_object()
                .cloned()
                .unwrap_or_default(),
            _ => Map::new(),
        }
    }
}

fn missing(name: &str) -> NodeError {
    NodeError::permanent(
        "PARAMETER_MISSING",
        format!("Missing required parameter: {}", name),
    )
    .with_attr("parameter", name)
}

fn invalid(name: &str, expected: &str, got: &Value) -> NodeError {
    NodeError::permanent(
        "PARAMETER_INVALID",
        format!("Parameter '{}' must be {}, got: {}", name, expected, got),
    )
    .with_attr("parameter", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Value {
        value
    }

    #[test]
    fn test_string_present() {
        let r = record(json!({ "resource": "user" }));
        let params = Params::from_record(&r).unwrap();
        assert_eq!(params.string("resource").unwrap(), "user");
    }

    #[test]
    fn test_string_missing() {
        let r = record(json!({}));
        let params = Params::from_record(&r).unwrap();
        let err = params.string("resource").unwrap_err();
        assert_eq!(err.code, "PARAMETER_MISSING");
    }

    #[test]
    fn test_string_wrong_type() {
        let r = record(json!({ "resource": 7 }));
        let params = Params::from_record(&r).unwrap();
        let err = params.string("resource").unwrap_err();
        assert_eq!(err.code, "PARAMETER_INVALID");
    }

    #[test]
    fn test_int_from_string_and_number() {
        let r = record(json!({ "userId": "101", "courseId": 202 }));
        let params = Params::from_record(&r).unwrap();
        assert_eq!(params.int("userId").unwrap(), 101);
        assert_eq!(params.int("courseId").unwrap(), 202);
    }

    #[test]
    fn test_int_rejects_non_numeric_string() {
        let r = record(json!({ "userId": "abc" }));
        let params = Params::from_record(&r).unwrap();
        assert_eq!(params.int("userId").unwrap_err().code, "PARAMETER_INVALID");
    }

    #[test]
    fn test_number() {
        let r = record(json!({ "discountAmount": 12.5 }));
        let params = Params::from_record(&r).unwrap();
        assert_eq!(params.number("discountAmount").unwrap().as_f64(), Some(12.5));
    }

    #[test]
    fn test_bool_and_u64_defaults() {
        let r = record(json!({ "returnAll": true }));
        let params = Params::from_record(&r).unwrap();
        assert!(params.bool_or("returnAll", false));
        assert!(!params.bool_or("other", false));
        assert_eq!(params.u64_or("limit", 50), 50);
    }

    #[test]
    fn test_collection_defaults_to_empty() {
        let r = record(json!({}));
        let params = Params::from_record(&r).unwrap();
        assert!(params.collection("additionalFields").is_empty());
    }

    #[test]
    fn test_collection_normalizes_boolean_strings() {
        let r = record(json!({ "additionalFields": { "send_welcome_email": "true", "company": "Acme" } }));
        let params = Params::from_record(&r).unwrap();
        let fields = params.collection("additionalFields");
        assert_eq!(fields.get("send_welcome_email"), Some(&Value::Bool(true)));
        assert_eq!(fields.get("company"), Some(&json!("Acme")));
    }

    #[test]
    fn test_from_record_rejects_non_object() {
        let r = record(json!([1, 2, 3]));
        assert_eq!(Params::from_record(&r).unwrap_err().code, "RECORD_INVALID");
    }
}
