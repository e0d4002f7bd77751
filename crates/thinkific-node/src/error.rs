// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Structured errors for the Thinkific node
//!
//! Every failure surfaces as a [`NodeError`] carrying a machine-readable
//! code, a human message, and an [`ErrorCategory`] so the host can decide
//! whether a retry makes sense. Vendor API failures get their message from
//! the Thinkific error envelope (`{error, errors?}`) when one is present.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thinkific_schema::{ErrorCategory, ErrorSeverity};

/// Fallback message when neither the vendor envelope nor the transport
/// provides one.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Structured error for node operations.
///
/// - **Transient**: temporary failures (network, timeout, rate limit) - the
///   host may retry
/// - **Permanent**: non-recoverable failures (404, validation, bad
///   parameters) - human intervention may help
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeError {
    /// Machine-readable error code (e.g., "HTTP_UNAUTHORIZED", "NETWORK_ERROR")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Error category for retry/routing decisions
    pub category: ErrorCategory,

    /// Error severity for logging/alerting
    pub severity: ErrorSeverity,

    /// Additional context attributes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl NodeError {
    /// Create a transient error (retry likely to succeed).
    pub fn transient(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: ErrorCategory::Transient,
            severity: ErrorSeverity::Warning,
            attributes: HashMap::new(),
        }
    }

    /// Create a permanent error (don't auto-retry).
    pub fn permanent(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: ErrorCategory::Permanent,
            severity: ErrorSeverity::Error,
            attributes: HashMap::new(),
        }
    }

    /// Set the error severity.
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a context attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Should the host retry this error?
    pub fn should_retry(&self) -> bool {
        self.category == ErrorCategory::Transient
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for NodeError {}

/// Classify an HTTP status code into an error category.
///
/// - 408 Request Timeout → Transient
/// - 429 Too Many Requests → Transient
/// - 5xx Server Errors → Transient
/// - other 4xx Client Errors → Permanent
pub fn classify_http_status(status: u16) -> ErrorCategory {
    match status {
        408 => ErrorCategory::Transient,
        429 => ErrorCategory::Transient,
        500..=599 => ErrorCategory::Transient,
        400..=499 => ErrorCategory::Permanent,
        // Anything else unexpected is permanent
        _ => ErrorCategory::Permanent,
    }
}

/// Extract a human message from the Thinkific error envelope.
///
/// The envelope shape is `{error: "...", errors: ["...", ...]}`; the joined
/// `errors` array is appended to `error` when both are present. Returns
/// `None` when the body is not an envelope.
pub fn extract_envelope_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let error = parsed.get("error")?.as_str()?;

    let details: Vec<&str> = parsed
        .get("errors")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if details.is_empty() {
        Some(error.to_string())
    } else {
        Some(format!("{}: {}", error, details.join(", ")))
    }
}

/// Create a NodeError from a non-2xx HTTP response.
///
/// The message is taken from the vendor envelope when present, then the raw
/// body text, then [`UNKNOWN_ERROR`].
pub fn http_error(status: u16, body: &str) -> NodeError {
    let category = classify_http_status(status);

    let code = match status {
        400 => "HTTP_BAD_REQUEST",
        401 => "HTTP_UNAUTHORIZED",
        403 => "HTTP_FORBIDDEN",
        404 => "HTTP_NOT_FOUND",
        408 => "HTTP_TIMEOUT",
        422 => "HTTP_UNPROCESSABLE",
        429 => "HTTP_RATE_LIMITED",
        500 => "HTTP_INTERNAL_ERROR",
        502 => "HTTP_BAD_GATEWAY",
        503 => "HTTP_SERVICE_UNAVAILABLE",
        504 => "HTTP_GATEWAY_TIMEOUT",
        _ => "HTTP_ERROR",
    };

    let message = extract_envelope_message(body).unwrap_or_else(|| {
        if body.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            body.to_string()
        }
    });

    NodeError {
        code: code.to_string(),
        message,
        category,
        severity: if category == ErrorCategory::Transient {
            ErrorSeverity::Warning
        } else {
            ErrorSeverity::Error
        },
        attributes: {
            let mut attrs = HashMap::new();
            attrs.insert("status_code".to_string(), status.to_string());
            attrs
        },
    }
}

/// Create a NodeError from a network/connection failure.
pub fn network_error(message: impl Into<String>) -> NodeError {
    NodeError::transient("NETWORK_ERROR", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_http_status_transient() {
        assert_eq!(classify_http_status(408), ErrorCategory::Transient);
        assert_eq!(classify_http_status(429), ErrorCategory::Transient);
        assert_eq!(classify_http_status(500), ErrorCategory::Transient);
        assert_eq!(classify_http_status(503), ErrorCategory::Transient);
    }

    #[test]
    fn test_classify_http_status_permanent() {
        assert_eq!(classify_http_status(400), ErrorCategory::Permanent);
        assert_eq!(classify_http_status(401), ErrorCategory::Permanent);
        assert_eq!(classify_http_status(404), ErrorCategory::Permanent);
        assert_eq!(classify_http_status(422), ErrorCategory::Permanent);
    }

    #[test]
    fn test_classify_http_status_unknown() {
        assert_eq!(classify_http_status(302), ErrorCategory::Permanent);
    }

    #[test]
    fn test_envelope_with_error_and_errors() {
        let body = r#"{"error":"Invalid","errors":["Email taken","Name required"]}"#;
        assert_eq!(
            extract_envelope_message(body).as_deref(),
            Some("Invalid: Email taken, Name required")
        );
    }

    #[test]
    fn test_envelope_with_error_only() {
        let body = r#"{"error":"X"}"#;
        assert_eq!(extract_envelope_message(body).as_deref(), Some("X"));
    }

    #[test]
    fn test_envelope_with_empty_errors_array() {
        let body = r#"{"error":"Invalid","errors":[]}"#;
        assert_eq!(extract_envelope_message(body).as_deref(), Some("Invalid"));
    }

    #[test]
    fn test_envelope_absent() {
        assert_eq!(extract_envelope_message("not json"), None);
        assert_eq!(extract_envelope_message(r#"{"message":"other"}"#), None);
    }

    #[test]
    fn test_http_error_envelope_message() {
        let err = http_error(422, r#"{"error":"Invalid","errors":["Email taken"]}"#);
        assert_eq!(err.code, "HTTP_UNPROCESSABLE");
        assert_eq!(err.message, "Invalid: Email taken");
        assert_eq!(err.category, ErrorCategory::Permanent);
        assert_eq!(err.attributes.get("status_code"), Some(&"422".to_string()));
    }

    #[test]
    fn test_http_error_raw_body_fallback() {
        let err = http_error(500, "upstream exploded");
        assert_eq!(err.message, "upstream exploded");
        assert_eq!(err.category, ErrorCategory::Transient);
        assert_eq!(err.severity, ErrorSeverity::Warning);
    }

    #[test]
    fn test_http_error_empty_body_fallback() {
        let err = http_error(404, "");
        assert_eq!(err.message, UNKNOWN_ERROR);
        assert_eq!(err.code, "HTTP_NOT_FOUND");
    }

    #[test]
    fn test_network_error_retries() {
        let err = network_error("Connection refused");
        assert_eq!(err.code, "NETWORK_ERROR");
        assert!(err.should_retry());
    }

    #[test]
    fn test_display_format() {
        let err = NodeError::permanent("PARAMETER_MISSING", "Missing required parameter: email");
        assert_eq!(
            format!("{}", err),
            "[PARAMETER_MISSING] Missing required parameter: email"
        );
    }

    #[test]
    fn test_with_attr() {
        let err = NodeError::transient("TEST", "test")
            .with_attr("endpoint", "/users")
            .with_attr("page", "3");
        assert_eq!(err.attributes.get("endpoint"), Some(&"/users".to_string()));
        assert_eq!(err.attributes.get("page"), Some(&"3".to_string()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let err = NodeError::permanent("X", "boom").with_attr("key", "value");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: NodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.code, err.code);
        assert_eq!(parsed.category, err.category);
        assert_eq!(parsed.attributes.get("key"), Some(&"value".to_string()));
    }
}
