// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Per-resource action dispatch
//!
//! Each input record selects a resource and an operation; dispatch routes to
//! the matching resource module, which builds exactly one logical vendor
//! call. List operations share the "Get Many" pattern: return everything via
//! the pagination helper when `returnAll` is set, otherwise one page-1
//! request with an explicit limit.

use crate::client::{Client, Method};
use crate::error::NodeError;
use crate::params::Params;
use serde_json::{Map, Value};
use strum::VariantNames;

pub mod coupon;
pub mod course;
pub mod enrollment;
pub mod group;
pub mod order;
pub mod product;
pub mod promotion;
pub mod user;
pub mod webhook;

/// The nine Thinkific entity kinds this node operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Coupon,
    Course,
    Enrollment,
    Group,
    Order,
    Product,
    Promotion,
    User,
    Webhook,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Coupon => "coupon",
            Resource::Course => "course",
            Resource::Enrollment => "enrollment",
            Resource::Group => "group",
            Resource::Order => "order",
            Resource::Product => "product",
            Resource::Promotion => "promotion",
            Resource::User => "user",
            Resource::Webhook => "webhook",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "coupon" => Some(Resource::Coupon),
            "course" => Some(Resource::Course),
            "enrollment" => Some(Resource::Enrollment),
            "group" => Some(Resource::Group),
            "order" => Some(Resource::Order),
            "product" => Some(Resource::Product),
            "promotion" => Some(Resource::Promotion),
            "user" => Some(Resource::User),
            "webhook" => Some(Resource::Webhook),
            _ => None,
        }
    }
}

/// Route one record's (resource, operation) selection to a vendor call
pub async fn dispatch(client: &Client, params: &Params<'_>) -> Result<Value, NodeError> {
    let resource_name = params.string("resource")?;
    let resource = Resource::parse(resource_name).ok_or_else(|| {
        NodeError::permanent(
            "RESOURCE_UNKNOWN",
            format!("Unknown resource: {}", resource_name),
        )
    })?;
    let operation = params.string("operation")?;

    match resource {
        Resource::Coupon => coupon::execute(client, operation, params).await,
        Resource::Course => course::execute(client, operation, params).await,
        Resource::Enrollment => enrollment::execute(client, operation, params).await,
        Resource::Group => group::execute(client, operation, params).await,
        Resource::Order => order::execute(client, operation, params).await,
        Resource::Product => product::execute(client, operation, params).await,
        Resource::Promotion => promotion::execute(client, operation, params).await,
        Resource::User => user::execute(client, operation, params).await,
        Resource::Webhook => webhook::execute(client, operation, params).await,
    }
}

pub(crate) fn unknown_operation(resource: Resource, operation: &str) -> NodeError {
    NodeError::permanent(
        "OPERATION_UNKNOWN",
        format!(
            "Unknown operation '{}' for resource '{}'",
            operation,
            resource.as_str()
        ),
    )
    .with_attr("resource", resource.as_str())
}

/// "Get Many" pattern shared by every list operation.
///
/// `returnAll` drains every page; otherwise a single page-1 request is made
/// with the record's `limit` (default 50) and that page's `items` are
/// returned, or an empty list if the response has none.
pub(crate) async fn get_many(
    client: &Client,
    endpoint: &str,
    params: &Params<'_>,
    query: Map<String, Value>,
) -> Result<Value, NodeError> {
    if params.bool_or("returnAll", false) {
        let query = Some(&query).filter(|q| !q.is_empty());
        let items = client.request_all_items(Method::GET, endpoint, query).await?;
        return Ok(Value::Array(items));
    }

    let mut query = query;
    query.insert("limit".to_string(), Value::from(params.u64_or("limit", 50)));
    query.insert("page".to_string(), Value::from(1));

    let response = client
        .request(Method::GET, endpoint, None, Some(&query))
        .await?;
    match response.get("items") {
        Some(Value::Array(items)) => Ok(Value::Array(items.clone())),
        _ => Ok(Value::Array(Vec::new())),
    }
}
