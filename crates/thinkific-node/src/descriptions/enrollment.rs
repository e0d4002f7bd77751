// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Enrollment resource property tables

use super::{collection, child_date_time, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub static OPERATIONS: &[Property] = &[Property {
    name: "operation",
    display_name: "Operation",
    kind: PropertyKind::Options,
    default: Some("\"getAll\""),
    options: &[
        PropertyOption {
            name: "Create",
            value: "create",
            description: Some("Enroll a user in a course"),
            action: Some("Create an enrollment"),
        },
        PropertyOption {
            name: "Delete",
            value: "delete",
            description: Some("Delete an enrollment"),
            action: Some("Delete an enrollment"),
        },
        PropertyOption {
            name: "Expire",
            value: "expire",
            description: Some("Set enrollment expiry date"),
            action: Some("Expire an enrollment"),
        },
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get an enrollment by ID"),
            action: Some("Get an enrollment"),
        },
        PropertyOption {
            name: "Get by Course",
            value: "getByCourse",
            description: Some("Get enrollments for a course"),
            action: Some("Get enrollments by course"),
        },
        PropertyOption {
            name: "Get by User",
            value: "getByUser",
            description: Some("Get enrollments for a user"),
            action: Some("Get enrollments by user"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many enrollments"),
            action: Some("Get many enrollments"),
        },
        PropertyOption {
            name: "Update",
            value: "update",
            description: Some("Update an enrollment"),
            action: Some("Update an enrollment"),
        },
    ],
    display: Some(show(&["enrollment"], &[])),
    ..Property::DEFAULT
}];

static DATE_FIELDS: &[Property] = &[
    child_date_time(
        "activated_at",
        "Activated At",
        "When the enrollment should be activated (ISO 8601 format)",
    ),
    child_date_time(
        "expiry_date",
        "Expiry Date",
        "When the enrollment should expire (ISO 8601 format)",
    ),
];

static GET_ALL_FILTERS: &[Property] = &[
    Property {
        name: "completed",
        display_name: "Completed",
        kind: PropertyKind::Boolean,
        default: Some("false"),
        description: Some("Whether to filter for completed enrollments only"),
        ..Property::DEFAULT
    },
    child_string("query", "Query", "Search query to filter enrollments"),
];

pub static FIELDS: &[Property] = &[
    // enrollment:create
    required_string(
        "userId",
        "User ID",
        "The ID of the user to enroll",
        show(&["enrollment"], &["create"]),
    ),
    required_string(
        "courseId",
        "Course ID",
        "The ID of the course to enroll the user in",
        show(&["enrollment"], &["create"]),
    ),
    collection(
        "additionalFields",
        "Additional Fields",
        "Add Field",
        DATE_FIELDS,
        show(&["enrollment"], &["create"]),
    ),
    // enrollment:delete
    required_string(
        "enrollmentId",
        "Enrollment ID",
        "The ID of the enrollment to delete",
        show(&["enrollment"], &["delete"]),
    ),
    // enrollment:expire
    required_string(
        "enrollmentId",
        "Enrollment ID",
        "The ID of the enrollment to expire",
        show(&["enrollment"], &["expire"]),
    ),
    Property {
        name: "expiryDate",
        display_name: "Expiry Date",
        kind: PropertyKind::DateTime,
        required: true,
        default: Some("\"\""),
        description: Some("When the enrollment should expire (ISO 8601 format)"),
        display: Some(show(&["enrollment"], &["expire"])),
        ..Property::DEFAULT
    },
    // enrollment:get
    required_string(
        "enrollmentId",
        "Enrollment ID",
        "The ID of the enrollment to retrieve",
        show(&["enrollment"], &["get"]),
    ),
    // enrollment:getByCourse
    required_string(
        "courseId",
        "Course ID",
        "The ID of the course to get enrollments for",
        show(&["enrollment"], &["getByCourse"]),
    ),
    return_all(show(&["enrollment"], &["getByCourse"])),
    limit(&["enrollment"], &["getByCourse"]),
    // enrollment:getByUser
    required_string(
        "userId",
        "User ID",
        "The ID of the user to get enrollments for",
        show(&["enrollment"], &["getByUser"]),
    ),
    return_all(show(&["enrollment"], &["getByUser"])),
    limit(&["enrollment"], &["getByUser"]),
    // enrollment:getAll
    return_all(show(&["enrollment"], &["getAll"])),
    limit(&["enrollment"], &["getAll"]),
    collection(
        "filters",
        "Filters",
        "Add Filter",
        GET_ALL_FILTERS,
        show(&["enrollment"], &["getAll"]),
    ),
    // enrollment:update
    required_string(
        "enrollmentId",
        "Enrollment ID",
        "The ID of the enrollment to update",
        show(&["enrollment"], &["update"]),
    ),
    collection(
        "updateFields",
        "Update Fields",
        "Add Field",
        DATE_FIELDS,
        show(&["enrollment"], &["update"]),
    ),
];
