// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Group operations
//!
//! Membership is managed through sub-endpoints; user id lists arrive as
//! comma-separated strings and are converted to integer arrays locally.

use super::{Resource, get_many, unknown_operation};
use crate::client::{Client, Method};
use crate::error::NodeError;
use crate::params::Params;
use crate::utils::parse_id_list;
use serde_json::{Map, Value, json};

pub async fn execute(
    client: &Client,
    operation: &str,
    params: &Params<'_>,
) -> Result<Value, NodeError> {
    match operation {
        "addUsers" => {
            let group_id = params.string("groupId")?;
            let user_ids = parse_id_list(params.string("userIds")?)?;
            client
                .request(
                    Method::POST,
                    &format!("/groups/{}/users", group_id),
                    Some(&json!({ "user_ids": user_ids })),
                    None,
                )
                .await
        }
        "create" => {
            let mut body = Map::new();
            body.insert("name".to_string(), Value::from(params.string("name")?));

            let mut additional = params.collection("additionalFields");
            for key in ["user_ids", "group_analyst_ids"] {
                if let Some(Value::String(raw)) = additional.get(key) {
                    let ids = parse_id_list(raw)?;
                    additional.insert(key.to_string(), Value::from(ids));
                }
            }
            body.extend(additional);

            client
                .request(Method::POST, "/groups", Some(&Value::Object(body)), None)
                .await
        }
        "get" => {
            let group_id = params.string("groupId")?;
            client
                .request(Method::GET, &format!("/groups/{}", group_id), None, None)
                .await
        }
        "getAnalysts" => {
            let group_id = params.string("groupId")?;
            let endpoint = format!("/groups/{}/analysts", group_id);
            get_many(client, &endpoint, params, Map::new()).await
        }
        "getAll" => get_many(client, "/groups", params, Map::new()).await,
        "removeUser" => {
            let group_id = params.string("groupId")?;
            let user_id = params.string("userId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/groups/{}/users/{}", group_id, user_id),
                    None,
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::Group, other)),
    }
}
