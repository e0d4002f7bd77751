// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Product operations

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
        "get" => {
            let product_id = params.string("productId")?;
            client
                .request(Method::GET, &format!("/products/{}", product_id), None, None)
                .await
        }
        "getCourses" => {
            let product_id = params.string("productId")?;
            let endpoint = format!("/products/{}/courses", product_id);
            get_many(client, &endpoint, params, Map::new()).await
        }
        "getAll" => get_many(client, "/products", params, params.collection("filters")).await,
        "getPrices" => {
            let product_id = params.string("productId")?;
            client
                .request(
                    Method::GET,
                    &format!("/products/{}/prices", product_id),
                    None,
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::Product, other)),
    }
}
