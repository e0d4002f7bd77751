// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Action node entry point
//!
//! The host hands `execute` an ordered list of input records; each record
//! independently selects a resource and operation and becomes one or more
//! output records. Records are processed strictly in order - record i+1 does
//! not start until record i has finished.

use crate::client::Client;
use crate::descriptions;
use crate::error::NodeError;
use crate::params::Params;
use crate::resources;
use serde_json::{Value, json};
use std::sync::Once;
use thinkific_schema::NodeDescriptor;
use tracing::{debug, info};

static STARTUP_NOTICE: Once = Once::new();

/// One-time startup notice, invoked by the host's node-loading sequence.
///
/// Safe to call repeatedly; only the first call logs.
pub fn init() {
    STARTUP_NOTICE.call_once(|| {
        info!(
            node = NODE.name,
            version = env!("CARGO_PKG_VERSION"),
            "Thinkific integration node loaded (AGPL-3.0-or-later)"
        );
    });
}

/// Host-controlled execution flags
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Convert per-record failures into error records instead of aborting
    /// the batch
    pub continue_on_fail: bool,
}

/// Run every input record through the action dispatch.
///
/// Array-valued results (list operations) flatten into one output record per
/// item; object results become a single record. With
/// [`ExecuteOptions::continue_on_fail`] set, a failed record contributes
/// `{"error": message}` and processing continues; otherwise the first failure
/// aborts the whole batch.
pub async fn execute(
    client: &Client,
    items: &[Value],
    options: ExecuteOptions,
) -> Result<Vec<Value>, NodeError> {
    let mut output = Vec::new();

    for (index, record) in items.iter().enumerate() {
        debug!(record = index, "executing record");

        let result = match Params::from_record(record) {
            Ok(params) => resources::dispatch(client, &params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(Value::Array(records)) => output.extend(records),
            Ok(value) => output.push(value),
            Err(err) if options.continue_on_fail => {
                output.push(json!({ "error": err.message }));
            }
            Err(err) => return Err(err.with_attr("record", index.to_string())),
        }
    }

    Ok(output)
}

/// Declarative schema of the action node
pub static NODE: NodeDescriptor = NodeDescriptor {
    name: "thinkific",
    display_name: "Thinkific",
    description: "Interact with the Thinkific API for course management and e-commerce automation",
    group: "transform",
    property_groups: descriptions::ALL_PROPERTY_GROUPS,
};

inventory::submit! { &NODE }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::ThinkificCredentials;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> Client {
        Client::with_base_url(
            ThinkificCredentials::new("key-123", "myschool"),
            server.uri(),
        )
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn test_node_registered() {
        let node = thinkific_schema::find_node("thinkific").expect("registered");
        assert_eq!(node.group, "transform");
        assert!(node.properties().any(|p| p.name == "resource"));
    }

    #[tokio::test]
    async fn test_object_result_is_one_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
            .mount(&server)
            .await;

        let items = vec![json!({ "resource": "user", "operation": "get", "userId": "9" })];
        let output = execute(&test_client(&server), &items, ExecuteOptions::default())
            .await
            .unwrap();
        assert_eq!(output, vec![json!({ "id": 9 })]);
    }

    #[tokio::test]
    async fn test_array_result_flattens() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": 1 }, { "id": 2 }],
            })))
            .mount(&server)
            .await;

        let items = vec![json!({ "resource": "course", "operation": "getAll" })];
        let output = execute(&test_client(&server), &items, ExecuteOptions::default())
            .await
            .unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output[1], json!({ "id": 2 }));
    }

    #[tokio::test]
    async fn test_first_failure_aborts_batch_by_default() {
        let server = MockServer::start().await;

        let items = vec![
            json!({ "resource": "invoice", "operation": "get" }),
            json!({ "resource": "user", "operation": "get", "userId": "9" }),
        ];
        let err = execute(&test_client(&server), &items, ExecuteOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, "RESOURCE_UNKNOWN");
        assert_eq!(err.attributes.get("record"), Some(&"0".to_string()));
        // The second record never ran.
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_continue_on_fail_emits_error_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
            .mount(&server)
            .await;

        let items = vec![
            json!({ "resource": "invoice", "operation": "get" }),
            json!({ "resource": "user", "operation": "get", "userId": "9" }),
        ];
        let options = ExecuteOptions {
            continue_on_fail: true,
        };
        let output = execute(&test_client(&server), &items, options).await.unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output[0]["error"], "Unknown resource: invoice");
        assert_eq!(output[1], json!({ "id": 9 }));
    }
}
