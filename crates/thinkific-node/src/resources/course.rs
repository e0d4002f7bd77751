// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Course operations
//!
//! Courses are read-only: the node fetches the course → chapters → contents
//! hierarchy on demand, never mutating it.

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
            let course_id = params.string("courseId")?;
            client
                .request(Method::GET, &format!("/courses/{}", course_id), None, None)
                .await
        }
        "getChapters" => {
            let course_id = params.string("courseId")?;
            let endpoint = format!("/courses/{}/chapters", course_id);
            get_many(client, &endpoint, params, Map::new()).await
        }
        "getContents" => {
            let course_id = params.string("courseId")?;
            let endpoint = format!("/courses/{}/contents", course_id);
            get_many(client, &endpoint, params, Map::new()).await
        }
        "getLessons" => {
            // Lessons live under the chapter, not the course.
            let chapter_id = params.string("chapterId")?;
            let endpoint = format!("/chapters/{}/contents", chapter_id);
            get_many(client, &endpoint, params, Map::new()).await
        }
        "getAll" => get_many(client, "/courses", params, params.collection("filters")).await,
        other => Err(unknown_operation(Resource::Course, other)),
    }
}
