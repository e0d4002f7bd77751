// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Webhook subscription property tables

use super::{collection, child_string, limit, return_all, required_string, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub(crate) static TOPIC_OPTIONS: &[PropertyOption] = &[
    PropertyOption::new("Chapter Completed", "chapter.completed"),
    PropertyOption::new("Course Completed", "course.completed"),
    PropertyOption::new("Enrollment Completed", "enrollment.completed"),
    PropertyOption::new("Enrollment Created", "enrollment.created"),
    PropertyOption::new("Lesson Completed", "lesson.completed"),
    PropertyOption::new("Order Completed", "order.completed"),
    PropertyOption::new("Order Created", "order.created"),
    PropertyOption::new("User Created", "user.created"),
    PropertyOption::new("User Sign In", "user.signin"),
    PropertyOption::new("User Updated", "user.updated"),
];

pub static OPERATIONS: &[Property] = &[Property {
    name: "operation",
    display_name: "Operation",
    kind: PropertyKind::Options,
    default: Some("\"getAll\""),
    options: &[
        PropertyOption {
            name: "Create",
            value: "create",
            description: Some("Register a new webhook"),
            action: Some("Create a webhook"),
        },
        PropertyOption {
            name: "Delete",
            value: "delete",
            description: Some("Delete a webhook"),
            action: Some("Delete a webhook"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get all webhooks"),
            action: Some("Get many webhooks"),
        },
        PropertyOption {
            name: "Update",
            value: "update",
            description: Some("Update a webhook"),
            action: Some("Update a webhook"),
        },
    ],
    display: Some(show(&["webhook"], &[])),
    ..Property::DEFAULT
}];

static UPDATE_FIELDS: &[Property] = &[
    child_string("target_url", "Target URL", "The URL to send webhook events to"),
    Property {
        name: "topic",
        display_name: "Topic",
        kind: PropertyKind::Options,
        default: Some("\"user.created\""),
        description: Some("The event topic to subscribe to"),
        options: TOPIC_OPTIONS,
        ..Property::DEFAULT
    },
];

pub static FIELDS: &[Property] = &[
    // webhook:create
    Property {
        name: "topic",
        display_name: "Topic",
        kind: PropertyKind::Options,
        required: true,
        default: Some("\"user.created\""),
        description: Some("The event topic to subscribe to"),
        options: TOPIC_OPTIONS,
        display: Some(show(&["webhook"], &["create"])),
        ..Property::DEFAULT
    },
    Property {
        name: "targetUrl",
        display_name: "Target URL",
        required: true,
        default: Some("\"\""),
        placeholder: Some("https://example.com/webhook"),
        description: Some("The URL to send webhook events to"),
        display: Some(show(&["webhook"], &["create"])),
        ..Property::DEFAULT
    },
    // webhook:delete
    required_string(
        "webhookId",
        "Webhook ID",
        "The ID of the webhook to delete",
        show(&["webhook"], &["delete"]),
    ),
    // webhook:getAll
    return_all(show(&["webhook"], &["getAll"])),
    limit(&["webhook"], &["getAll"]),
    // webhook:update
    required_string(
        "webhookId",
        "Webhook ID",
        "The ID of the webhook to update",
        show(&["webhook"], &["update"]),
    ),
    collection(
        "updateFields",
        "Update Fields",
        "Add Field",
        UPDATE_FIELDS,
        show(&["webhook"], &["update"]),
    ),
];
