// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Order operations
//!
//! External orders bypass Thinkific checkout: the caller records a purchase
//! made through an outside payment provider.

use super::{Resource, get_many, unknown_operation};
use crate::client::{Client, Method};
use crate::error::NodeError;
use crate::params::Params;
use serde_json::{Map, Value};

pub async fn execute(
    client: &Client,
    operation: &str,
    params: &Params<'_>,
) -> Result<Value, NodeError> {
    match operation {
        "createExternal" => {
            let mut body = Map::new();
            body.insert("user_id".to_string(), Value::from(params.int("userId")?));
            body.insert(
                "product_id".to_string(),
                Value::from(params.int("productId")?),
            );
            body.insert(
                "payment_provider".to_string(),
                Value::from(params.string("paymentProvider")?),
            );
            body.extend(params.collection("additionalFields"));
            client
                .request(Method::POST, "/orders", Some(&Value::Object(body)), None)
                .await
        }
        "get" => {
            let order_id = params.string("orderId")?;
            client
                .request(Method::GET, &format!("/orders/{}", order_id), None, None)
                .await
        }
        "getAll" => get_many(client, "/orders", params, params.collection("filters")).await,
        "refund" => {
            let order_id = params.string("orderId")?;
            client
                .request(
                    Method::POST,
                    &format!("/orders/{}/refund", order_id),
                    None,
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::Order, other)),
    }
}
