// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Trigger node property table
//!
//! The trigger has a single input: which event topic to subscribe to.

use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub static EVENT: &[Property] = &[Property {
    name: "event",
    display_name: "Event",
    kind: PropertyKind::Options,
    required: true,
    default: Some("\"user.created\""),
    description: Some("The event that will trigger the workflow"),
    options: &[
        PropertyOption {
            name: "Chapter Completed",
            value: "chapter.completed",
            description: Some("Triggers when a user completes a chapter"),
            action: None,
        },
        PropertyOption {
            name: "Course Completed",
            value: "course.completed",
            description: Some("Triggers when a user completes a course"),
            action: None,
        },
        PropertyOption {
            name: "Enrollment Completed",
            value: "enrollment.completed",
            description: Some("Triggers when an enrollment is completed"),
            action: None,
        },
        PropertyOption {
            name: "Enrollment Created",
            value: "enrollment.created",
            description: Some("Triggers when a new enrollment is created"),
            action: None,
        },
        PropertyOption {
            name: "Lesson Completed",
            value: "lesson.completed",
            description: Some("Triggers when a user completes a lesson"),
            action: None,
        },
        PropertyOption {
            name: "Order Completed",
            value: "order.completed",
            description: Some("Triggers when an order is completed"),
            action: None,
        },
        PropertyOption {
            name: "Order Created",
            value: "order.created",
            description: Some("Triggers when a new order is created"),
            action: None,
        },
        PropertyOption {
            name: "User Created",
            value: "user.created",
            description: Some("Triggers when a new user is created"),
            action: None,
        },
        PropertyOption {
            name: "User Sign In",
            value: "user.signin",
            description: Some("Triggers when a user signs in"),
            action: None,
        },
        PropertyOption {
            name: "User Updated",
            value: "user.updated",
            description: Some("Triggers when a user is updated"),
            action: None,
        },
    ],
    ..Property::DEFAULT
}];
