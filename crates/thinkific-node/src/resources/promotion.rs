// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Promotion operations
//!
//! The `product_ids` collection field arrives as a comma-separated string
//! from the UI and goes on the wire as an integer array.

use super::{Resource, get_many, unknown_operation};
use crate::client::{Client, Method};
use crate::error::NodeError;
use crate::params::Params;
use crate::utils::parse_id_list;
use serde_json::{Map, Value};

pub async fn execute(
    client: &Client,
    operation: &str,
    params: &Params<'_>,
) -> Result<Value, NodeError> {
    match operation {
        "create" => {
            let mut body = Map::new();
            body.insert("name".to_string(), Value::from(params.string("name")?));
            body.insert(
                "discount_type".to_string(),
                Value::from(params.string("discountType")?),
            );
            body.insert(
                "discount_amount".to_string(),
                Value::Number(params.number("discountAmount")?),
            );
            body.extend(convert_product_ids(params.collection("additionalFields"))?);
            client
                .request(Method::POST, "/promotions", Some(&Value::Object(body)), None)
                .await
        }
        "delete" => {
            let promotion_id = params.string("promotionId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/promotions/{}", promotion_id),
                    None,
                    None,
                )
                .await
        }
        "get" => {
            let promotion_id = params.string("promotionId")?;
            client
                .request(
                    Method::GET,
                    &format!("/promotions/{}", promotion_id),
                    None,
                    None,
                )
                .await
        }
        "getAll" => get_many(client, "/promotions", params, Map::new()).await,
        "update" => {
            let promotion_id = params.string("promotionId")?;
            let update_fields = convert_product_ids(params.collection("updateFields"))?;
            client
                .request(
                    Method::PUT,
                    &format!("/promotions/{}", promotion_id),
                    Some(&Value::Object(update_fields)),
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::Promotion, other)),
    }
}

fn convert_product_ids(mut fields: Map<String, Value>) -> Result<Map<String, Value>, NodeError> {
    if let Some(Value::String(raw)) = fields.get("product_ids") {
        let ids = parse_id_list(raw)?;
        fields.insert("product_ids".to_string(), Value::from(ids));
    }
    Ok(fields)
}
