// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Authenticated HTTP client for the Thinkific public API
//!
//! One request helper and one pagination helper. No retry, timeout, or
//! concurrency policy lives here - the host's transport settings apply
//! unmodified, and failures surface immediately as [`NodeError`]s.

use crate::credentials::ThinkificCredentials;
use crate::error::{NodeError, http_error, network_error};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use reqwest::Method;

/// Production API base
pub const BASE_URL: &str = "https://api.thinkific.com/api/public/v1";

/// Fixed page size used by the pagination helper
pub const PAGE_SIZE: usize = 100;

// Defensive bound: the loop normally terminates on the first short page, but
// a vendor that returned more items than requested would otherwise spin.
const MAX_PAGES: usize = 1000;

/// Thinkific API client
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credentials: ThinkificCredentials,
}

impl Client {
    pub fn new(credentials: ThinkificCredentials) -> Self {
        Client::with_base_url(credentials, BASE_URL)
    }

    /// Client against a non-default base URL (used by tests)
    pub fn with_base_url(credentials: ThinkificCredentials, base_url: impl Into<String>) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Issue one authenticated request and return the parsed JSON body.
    ///
    /// Empty bodies and empty query maps are omitted entirely rather than
    /// sent as `{}`. An empty 2xx response body parses as `null`; a non-JSON
    /// 2xx body falls back to a string value.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        query: Option<&Map<String, Value>>,
    ) -> Result<Value, NodeError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(method = %method, endpoint, "thinkific api request");

        let mut request = self.http.request(method, &url);
        for (name, value) in self.credentials.headers() {
            request = request.header(name, value);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(&query_pairs(query));
        }
        if let Some(body) = body.filter(|b| !is_empty_body(b)) {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            network_error(format!("Request to {} failed: {}", endpoint, e))
                .with_attr("endpoint", endpoint)
        })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(http_error(status.as_u16(), &text).with_attr("endpoint", endpoint));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Fetch every page of a list endpoint and concatenate the `items`.
    ///
    /// Pages are requested sequentially from page 1 with a `limit` of
    /// [`PAGE_SIZE`]; the loop stops on the first page whose `items` array is
    /// missing, empty, or shorter than the page size.
    pub async fn request_all_items(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&Map<String, Value>>,
    ) -> Result<Vec<Value>, NodeError> {
        let mut all_items = Vec::new();

        for page in 1..=MAX_PAGES {
            let mut page_query = query.cloned().unwrap_or_default();
            page_query.insert("page".to_string(), Value::from(page));
            page_query.insert("limit".to_string(), Value::from(PAGE_SIZE));

            let response = self
                .request(method.clone(), endpoint, None, Some(&page_query))
                .await?;

            let Some(items) = response.get("items").and_then(Value::as_array) else {
                return Ok(all_items);
            };
            let full_page = items.len() >= PAGE_SIZE;
            all_items.extend(items.iter().cloned());

            if !full_page {
                return Ok(all_items);
            }
        }

        warn!(endpoint, pages = MAX_PAGES, "pagination stopped at page cap");
        Ok(all_items)
    }

    /// Cheap liveness check used when the host tests stored credentials
    pub async fn verify_credentials(&self) -> Result<(), NodeError> {
        let mut query = Map::new();
        query.insert("page".to_string(), Value::from(1));
        query.insert("limit".to_string(), Value::from(1));
        self.request(Method::GET, "/users", None, Some(&query))
            .await?;
        Ok(())
    }
}

// Query values go on the wire as strings; non-scalar values are serialized.
fn query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
