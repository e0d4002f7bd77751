// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Webhook subscription operations
//!
//! These are the plain CRUD calls on `/webhooks`; the trigger node's
//! lifecycle management lives in [`crate::trigger`].

use super::{Resource, get_many, unknown_operation};
use crate::client::{Client, Method};
use crate::error::NodeError;
use crate::params::Params;
use serde_json::{Map, Value, json};

pub async fn execute(
    client: &Client,
    operation: &str,
    params: &Params<'_>,
) -> Result<Value, NodeError> {
    match operation {
        "create" => {
            let topic = params.string("topic")?;
            let target_url = params.string("targetUrl")?;
            client
                .request(
                    Method::POST,
                    "/webhooks",
                    Some(&json!({ "topic": topic, "target_url": target_url })),
                    None,
                )
                .await
        }
        "delete" => {
            let webhook_id = params.string("webhookId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/webhooks/{}", webhook_id),
                    None,
                    None,
                )
                .await
        }
        "getAll" => get_many(client, "/webhooks", params, Map::new()).await,
        "update" => {
            let webhook_id = params.string("webhookId")?;
            let update_fields = params.collection("updateFields");
            client
                .request(
                    Method::PUT,
                    &format!("/webhooks/{}", webhook_id),
                    Some(&Value::Object(update_fields)),
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::Webhook, other)),
    }
}
