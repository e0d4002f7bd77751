// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Thinkific API credentials
//!
//! Two secrets, two fixed headers. The credential descriptor registered here
//! tells the host what to ask the user for and which request to issue as a
//! liveness check.

use crate::error::NodeError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thinkific_schema::{CredentialDescriptor, CredentialTest, Property, PropertyKind};

/// Credentials for the Thinkific public API
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkificCredentials {
    /// API key from Settings → Code & analytics → API
    pub api_key: String,
    /// School subdomain, e.g. "myschool" from myschool.thinkific.com
    pub subdomain: String,
}

impl ThinkificCredentials {
    pub fn new(api_key: impl Into<String>, subdomain: impl Into<String>) -> Self {
        ThinkificCredentials {
            api_key: api_key.into(),
            subdomain: subdomain.into(),
        }
    }

    /// Extract credentials from the host-supplied parameter object
    pub fn from_value(params: &Value) -> Result<Self, NodeError> {
        serde_json::from_value(params.clone()).map_err(|e| {
            NodeError::permanent(
                "CREDENTIALS_INVALID",
                format!("Invalid Thinkific credentials: {}", e),
            )
        })
    }

    /// Headers attached to every API request
    pub fn headers(&self) -> [(&'static str, String); 3] {
        [
            ("X-Auth-API-Key", self.api_key.clone()),
            ("X-Auth-Subdomain", self.subdomain.clone()),
            ("Content-Type", "application/json".to_string()),
        ]
    }
}

// The API key must not leak into logs.
impl fmt::Debug for ThinkificCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThinkificCredentials")
            .field("api_key", &"***")
            .field("subdomain", &self.subdomain)
            .finish()
    }
}

pub static THINKIFIC_API_CREDENTIAL: CredentialDescriptor = CredentialDescriptor {
    name: "thinkificApi",
    display_name: "Thinkific API",
    documentation_url: "https://developers.thinkific.com/api/api-documentation/",
    properties: &[
        Property {
            name: "apiKey",
            display_name: "API Key",
            kind: PropertyKind::String,
            required: true,
            secret: true,
            default: Some("\"\""),
            description: Some(
                "Your Thinkific API key. Find it in Settings → Code & analytics → API.",
            ),
            ..Property::DEFAULT
        },
        Property {
            name: "subdomain",
            display_name: "Subdomain",
            kind: PropertyKind::String,
            required: true,
            default: Some("\"\""),
            placeholder: Some("myschool"),
            description: Some(
                "Your Thinkific subdomain (e.g., \"myschool\" from myschool.thinkific.com). This is case-sensitive.",
            ),
            ..Property::DEFAULT
        },
    ],
    test: CredentialTest {
        method: "GET",
        path: "/users",
        query: &[("page", "1"), ("limit", "1")],
    },
};

inventory::submit! { &THINKIFIC_API_CREDENTIAL }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let creds = ThinkificCredentials::from_value(&json!({
            "apiKey": "key-123",
            "subdomain": "myschool",
        }))
        .unwrap();
        assert_eq!(creds.api_key, "key-123");
        assert_eq!(creds.subdomain, "myschool");
    }

    #[test]
    fn test_from_value_missing_field() {
        let err = ThinkificCredentials::from_value(&json!({ "apiKey": "key-123" })).unwrap_err();
        assert_eq!(err.code, "CREDENTIALS_INVALID");
        assert!(!err.should_retry());
    }

    #[test]
    fn test_from_value_null_field() {
        let err = ThinkificCredentials::from_value(&json!({
            "apiKey": "key-123",
            "subdomain": null,
        }))
        .unwrap_err();
        assert_eq!(err.code, "CREDENTIALS_INVALID");
    }

    #[test]
    fn test_headers() {
        let creds = ThinkificCredentials::new("key-123", "myschool");
        let headers = creds.headers();
        assert_eq!(headers[0], ("X-Auth-API-Key", "key-123".to_string()));
        assert_eq!(headers[1], ("X-Auth-Subdomain", "myschool".to_string()));
        assert_eq!(headers[2], ("Content-Type", "application/json".to_string()));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let creds = ThinkificCredentials::new("super-secret", "myschool");
        let output = format!("{:?}", creds);
        assert!(!output.contains("super-secret"));
        assert!(output.contains("myschool"));
    }

    #[test]
    fn test_credential_descriptor_registered() {
        let cred = thinkific_schema::find_credential("thinkificApi").expect("registered");
        assert_eq!(cred.test.path, "/users");
        assert_eq!(cred.test.query, &[("page", "1"), ("limit", "1")]);
        assert!(cred.properties.iter().any(|p| p.name == "apiKey" && p.secret));
    }
}
