// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Enrollment operations
//!
//! The create body requires numeric `user_id`/`course_id` fields, so the
//! string-valued UI parameters are integer-parsed before the request is
//! built. Lifecycle flags (completed, expired) are set by Thinkific.

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
            let mut body = Map::new();
            body.insert("user_id".to_string(), Value::from(params.int("userId")?));
            body.insert("course_id".to_string(), Value::from(params.int("courseId")?));
            body.extend(params.collection("additionalFields"));
            client
                .request(Method::POST, "/enrollments", Some(&Value::Object(body)), None)
                .await
        }
        "delete" => {
            let enrollment_id = params.string("enrollmentId")?;
            client
                .request(
                    Method::DELETE,
                    &format!("/enrollments/{}", enrollment_id),
                    None,
                    None,
                )
                .await
        }
        "expire" => {
            let enrollment_id = params.string("enrollmentId")?;
            let expiry_date = params.string("expiryDate")?;
            client
                .request(
                    Method::PUT,
                    &format!("/enrollments/{}", enrollment_id),
                    Some(&json!({ "expiry_date": expiry_date })),
                    None,
                )
                .await
        }
        "get" => {
            let enrollment_id = params.string("enrollmentId")?;
            client
                .request(
                    Method::GET,
                    &format!("/enrollments/{}", enrollment_id),
                    None,
                    None,
                )
                .await
        }
        "getByCourse" => {
            let mut query = Map::new();
            query.insert(
                "course_id".to_string(),
                Value::from(params.string("courseId")?),
            );
            get_many(client, "/enrollments", params, query).await
        }
        "getByUser" => {
            let mut query = Map::new();
            query.insert("user_id".to_string(), Value::from(params.string("userId")?));
            get_many(client, "/enrollments", params, query).await
        }
        "getAll" => get_many(client, "/enrollments", params, params.collection("filters")).await,
        "update" => {
            let enrollment_id = params.string("enrollmentId")?;
            let update_fields = params.collection("updateFields");
            client
                .request(
                    Method::PUT,
                    &format!("/enrollments/{}", enrollment_id),
                    Some(&Value::Object(update_fields)),
                    None,
                )
                .await
        }
        other => Err(unknown_operation(Resource::Enrollment, other)),
    }
}
