// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Coupon operations

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
        "create" => {
            let mut body = Map::new();
            body.insert("code".to_string(), Value::from(params.string("code")?));
            // Coupons reference their promotion by numeric id.
            body.insert(
                "promotion_id".to_string(),
                Value::from(params.int("promotionId")?),
            );
            body.extend(params.collection("additionalFields"));
            client
                .request(Method::POST, "/coupons", Some(&Value::Object(body)), None)
                .await
        }
        "delete" => {
            let coupon_id = params.string("couponId")?;
            client
                .request(Method::DELETE, &format!("/coupons/{}", coupon_id), None, None)
                .await
        }
        "get" => {
            let coupon_id = params.string("couponId")?;
            client
                .request(Method::GET, &format!("/coupons/{}", coupon_id), None, None)
                .await
        }
        "getAll" => get_many(client, "/coupons", params, params.collection("filters")).await,
        "update" => {
            let coupon_id = params.string("couponId")?;
            let update_fields = params.collection("updateFields");
            client
                .request(
                    Method::PUT,
                    &format!("/coupons/{}", coupon_id),
                    Some(&Value::Object(update_fields)),
                    None,
                )
                .await
        }
        "validate" => {
            let mut query = Map::new();
            query.insert("code".to_string(), Value::from(params.string("couponCode")?));
            query.insert(
                "product_id".to_string(),
                Value::from(params.string("productId")?),
            );
            client
                .request(Method::GET, "/coupons/validate", None, Some(&query))
                .await
        }
        other => Err(unknown_operation(Resource::Coupon, other)),
    }
}
