// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Webhook trigger lifecycle
//!
//! The trigger owns the only client-held state in this integration: the
//! vendor-assigned webhook id, kept in host-provided per-node storage so a
//! later deactivation can delete the subscription. Registration is keyed on
//! (event topic, callback URL); inbound deliveries pass through unmodified.

use crate::client::{Client, Method};
use crate::descriptions;
use crate::error::NodeError;
use serde_json::{Value, json};
use thinkific_schema::NodeDescriptor;
use tracing::{info, warn};

/// Storage key for the vendor-assigned webhook id
const WEBHOOK_ID_KEY: &str = "webhookId";

/// Event topics a trigger can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookEvent {
    ChapterCompleted,
    CourseCompleted,
    EnrollmentCompleted,
    EnrollmentCreated,
    LessonCompleted,
    OrderCompleted,
    OrderCreated,
    UserCreated,
    UserSignin,
    UserUpdated,
}

impl WebhookEvent {
    pub const ALL: [WebhookEvent; 10] = [
        WebhookEvent::ChapterCompleted,
        WebhookEvent::CourseCompleted,
        WebhookEvent::EnrollmentCompleted,
        WebhookEvent::EnrollmentCreated,
        WebhookEvent::LessonCompleted,
        WebhookEvent::OrderCompleted,
        WebhookEvent::OrderCreated,
        WebhookEvent::UserCreated,
        WebhookEvent::UserSignin,
        WebhookEvent::UserUpdated,
    ];

    /// The topic string as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookEvent::ChapterCompleted => "chapter.completed",
            WebhookEvent::CourseCompleted => "course.completed",
            WebhookEvent::EnrollmentCompleted => "enrollment.completed",
            WebhookEvent::EnrollmentCreated => "enrollment.created",
            WebhookEvent::LessonCompleted => "lesson.completed",
            WebhookEvent::OrderCompleted => "order.completed",
            WebhookEvent::OrderCreated => "order.created",
            WebhookEvent::UserCreated => "user.created",
            WebhookEvent::UserSignin => "user.signin",
            WebhookEvent::UserUpdated => "user.updated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.as_str() == s)
    }
}

/// Per-node key-value storage provided by the host.
///
/// Scoped to one workflow-node instance; the trigger is the only writer and
/// lifecycle hooks run one at a time, so no synchronization is needed.
pub trait StaticData {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value);
    fn remove(&mut self, key: &str);
}

/// In-memory [`StaticData`] for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStaticData {
    values: std::collections::HashMap<String, Value>,
}

impl MemoryStaticData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StaticData for MemoryStaticData {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Manages one webhook subscription for a workflow trigger
pub struct WebhookTrigger {
    client: Client,
    event: WebhookEvent,
    target_url: String,
    store: Box<dyn StaticData + Send>,
}

impl WebhookTrigger {
    pub fn new(
        client: Client,
        event: WebhookEvent,
        target_url: impl Into<String>,
        store: Box<dyn StaticData + Send>,
    ) -> Self {
        WebhookTrigger {
            client,
            event,
            target_url: target_url.into(),
            store,
        }
    }

    /// The vendor-assigned id of the registered webhook, if any
    pub fn webhook_id(&self) -> Option<Value> {
        self.store.get(WEBHOOK_ID_KEY)
    }

    /// Scan the vendor's webhook list for a subscription matching this
    /// trigger's (topic, target URL).
    ///
    /// A match stores the found id so a later [`delete`](Self::delete) can
    /// reference it. Single page only.
    pub async fn check_exists(&mut self) -> Result<bool, NodeError> {
        let response = self
            .client
            .request(Method::GET, "/webhooks", None, None)
            .await?;

        let Some(items) = response.get("items").and_then(Value::as_array) else {
            return Ok(false);
        };

        for webhook in items {
            let url_matches = webhook.get("target_url").and_then(Value::as_str)
                == Some(self.target_url.as_str());
            let topic_matches =
                webhook.get("topic").and_then(Value::as_str) == Some(self.event.as_str());
            if url_matches && topic_matches {
                if let Some(id) = webhook.get("id") {
                    self.store.set(WEBHOOK_ID_KEY, id.clone());
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Register the webhook with the vendor and store its id.
    ///
    /// A response without an id means the subscription cannot be managed
    /// later, so it is treated as a definite failure.
    pub async fn create(&mut self) -> Result<(), NodeError> {
        let body = json!({
            "topic": self.event.as_str(),
            "target_url": self.target_url,
        });
        let response = self
            .client
            .request(Method::POST, "/webhooks", Some(&body), None)
            .await?;

        let id = response.get("id").filter(|id| !id.is_null()).ok_or_else(|| {
            NodeError::permanent(
                "WEBHOOK_MISSING_ID",
                "Webhook creation response did not include an id",
            )
            .with_attr("topic", self.event.as_str())
        })?;

        info!(topic = self.event.as_str(), "webhook registered");
        self.store.set(WEBHOOK_ID_KEY, id.clone());
        Ok(())
    }

    /// Delete the registered webhook.
    ///
    /// Succeeds trivially when no id is stored. A failed deletion returns
    /// `false` and leaves the stored id in place so a later teardown can
    /// retry; the host contract does not allow teardown to fail the
    /// deactivation.
    pub async fn delete(&mut self) -> bool {
        let Some(id) = self.store.get(WEBHOOK_ID_KEY) else {
            return true;
        };

        let endpoint = format!("/webhooks/{}", id_segment(&id));
        match self
            .client
            .request(Method::DELETE, &endpoint, None, None)
            .await
        {
            Ok(_) => {
                info!(topic = self.event.as_str(), "webhook deleted");
                self.store.remove(WEBHOOK_ID_KEY);
                true
            }
            Err(err) => {
                warn!(topic = self.event.as_str(), error = %err, "webhook deletion failed");
                false
            }
        }
    }

    /// Inbound delivery: the posted body becomes one output record, verbatim
    pub fn handle(&self, body: Value) -> Vec<Value> {
        vec![body]
    }
}

// Vendor ids arrive as JSON numbers; render them without quotes in paths.
fn id_segment(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Declarative schema of the trigger node
pub static TRIGGER_NODE: NodeDescriptor = NodeDescriptor {
    name: "thinkificTrigger",
    display_name: "Thinkific Trigger",
    description: "Starts the workflow when Thinkific events occur",
    group: "trigger",
    property_groups: &[descriptions::trigger::EVENT],
};

inventory::submit! { &TRIGGER_NODE }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::ThinkificCredentials;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_trigger(server: &MockServer, event: WebhookEvent) -> WebhookTrigger {
        let client = Client::with_base_url(
            ThinkificCredentials::new("key-123", "myschool"),
            server.uri(),
        );
        WebhookTrigger::new(
            client,
            event,
            "https://host.example/webhook/abc",
            Box::new(MemoryStaticData::new()),
        )
    }

    #[test]
    fn test_event_round_trip() {
        for event in WebhookEvent::ALL {
            assert_eq!(WebhookEvent::parse(event.as_str()), Some(event));
        }
        assert_eq!(WebhookEvent::parse("user.deleted"), None);
    }

    #[test]
    fn test_event_options_match_description_table() {
        let declared: Vec<&str> = descriptions::trigger::EVENT[0]
            .options
            .iter()
            .map(|o| o.value)
            .collect();
        let events: Vec<&str> = WebhookEvent::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(declared, events);
    }

    #[tokio::test]
    async fn test_check_exists_finds_matching_webhook() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": 1, "topic": "user.created", "target_url": "https://other.example/hook" },
                    { "id": 2, "topic": "user.created", "target_url": "https://host.example/webhook/abc" },
                ],
            })))
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        assert!(trigger.check_exists().await.unwrap());
        assert_eq!(trigger.webhook_id(), Some(json!(2)));
    }

    #[tokio::test]
    async fn test_check_exists_requires_both_topic_and_url() {
        let server = MockServer::start().await;

        // URL matches, topic does not.
        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": 1, "topic": "order.created", "target_url": "https://host.example/webhook/abc" },
                ],
            })))
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        assert!(!trigger.check_exists().await.unwrap());
        assert_eq!(trigger.webhook_id(), None);
    }

    #[tokio::test]
    async fn test_check_exists_no_items() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        assert!(!trigger.check_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_stores_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .and(body_json(json!({
                "topic": "order.created",
                "target_url": "https://host.example/webhook/abc",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 77,
                "topic": "order.created",
            })))
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::OrderCreated);
        trigger.create().await.unwrap();
        assert_eq!(trigger.webhook_id(), Some(json!(77)));
    }

    #[tokio::test]
    async fn test_create_without_id_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        let err = trigger.create().await.unwrap_err();
        assert_eq!(err.code, "WEBHOOK_MISSING_ID");
        assert!(!err.should_retry());
        assert_eq!(trigger.webhook_id(), None);
    }

    #[tokio::test]
    async fn test_delete_without_stored_id_is_trivial() {
        // No mocks mounted: any HTTP call would fail the test via an error.
        let server = MockServer::start().await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        assert!(trigger.delete().await);
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_clears_stored_id() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/webhooks/77"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        trigger.store.set(WEBHOOK_ID_KEY, json!(77));

        assert!(trigger.delete().await);
        assert_eq!(trigger.webhook_id(), None);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_stored_id() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/webhooks/77"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
            .mount(&server)
            .await;

        let mut trigger = test_trigger(&server, WebhookEvent::UserCreated);
        trigger.store.set(WEBHOOK_ID_KEY, json!(77));

        assert!(!trigger.delete().await);
        // State untouched, so a later teardown can retry.
        assert_eq!(trigger.webhook_id(), Some(json!(77)));
    }

    #[tokio::test]
    async fn test_handle_passes_body_through() {
        let server = MockServer::start().await;
        let trigger = test_trigger(&server, WebhookEvent::UserCreated);

        let body = json!({
            "id": "evt-1",
            "resource": "user",
            "payload": { "email": "new@student.example" },
        });
        let records = trigger.handle(body.clone());
        assert_eq!(records, vec![body]);
    }

    #[test]
    fn test_id_segment_rendering() {
        assert_eq!(id_segment(&json!(42)), "42");
        assert_eq!(id_segment(&json!("abc-7")), "abc-7");
    }

    #[test]
    fn test_trigger_node_registered() {
        let node = thinkific_schema::find_node("thinkificTrigger").expect("registered");
        assert_eq!(node.group, "trigger");
        assert!(node.properties().any(|p| p.name == "event"));
    }
}
