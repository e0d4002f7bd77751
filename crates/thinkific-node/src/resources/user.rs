// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! User operations

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
            let email = params.string("email")?;
            let mut body = Map::new();
            body.insert("email".to_string(), Value::from(email));
            body.extend(params.collection("additionalFields"));
            client
                .request(Method::POST, "/users", Some(&Value::Object(body)), None)
                .await
        }
        "delete" => {
            let user_id = params.string("userId")?;
            client
                .request(Method::DELETE, &format!("/users/{}", user_id), None, None)
                .await
        }
        "get" => {
            let user_id = params.string("userId")?;
            client
                .request(Method::GET, &format!("/users/{}", user_id), None, None)
                .await
        }
        "getByEmail" => {
            let email = params.string("email")?;
            let mut query = Map::new();
            query.insert("query[email]".to_string(), Value::from(email));
            let response = client
                .request(Method::GET, "/users", None, Some(&query))
                .await?;
            let first = response
                .get("items")
                .and_then(Value::as_array)
                .and_then(|items| items.first())
                .cloned();
            Ok(first.unwrap_or_else(|| json!({})))
        }
        "getAll" => get_many(client, "/users", params, params.collection("filters")).await,
        "update" => {
            let user_id = params.string("userId")?;
            let update_fields = params.collection("updateFields");
            client
                .request(
                    Method::PUT,
                    &format!("/users/{}", user_id),
                    Some(&Value::Object(update_fields)),
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::User, other)),
    }
}
