// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! User resource property tables

use super::{collection, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

static ROLE_OPTIONS: &[PropertyOption] = &[
    PropertyOption::new("Affiliate", "affiliate"),
    PropertyOption::new("Course Admin", "course_admin"),
    PropertyOption::new("Group Analyst", "group_analyst"),
    PropertyOption::new("Site Admin", "site_admin"),
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
            description: Some("Create a new user"),
            action: Some("Create a user"),
        },
        PropertyOption {
            name: "Delete",
            value: "delete",
            description: Some("Delete a user"),
            action: Some("Delete a user"),
        },
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get a user by ID"),
            action: Some("Get a user"),
        },
        PropertyOption {
            name: "Get by Email",
            value: "getByEmail",
            description: Some("Get a user by email address"),
            action: Some("Get a user by email"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many users"),
            action: Some("Get many users"),
        },
        PropertyOption {
            name: "Update",
            value: "update",
            description: Some("Update a user"),
            action: Some("Update a user"),
        },
    ],
    display: Some(show(&["user"], &[])),
    ..Property::DEFAULT
}];

static CREATE_ADDITIONAL_FIELDS: &[Property] = &[
    child_string("bio", "Bio", "User biography"),
    child_string("company", "Company", "User company name"),
    child_string("external_source", "External Source", "External source identifier"),
    child_string("first_name", "First Name", "User first name"),
    child_string("headline", "Headline", "User headline or title"),
    child_string("last_name", "Last Name", "User last name"),
    Property {
        name: "password",
        display_name: "Password",
        secret: true,
        default: Some("\"\""),
        description: Some("Initial password for the user"),
        ..Property::DEFAULT
    },
    Property {
        name: "roles",
        display_name: "Roles",
        kind: PropertyKind::MultiOptions,
        default: Some("[]"),
        description: Some("Roles to assign to the user"),
        options: ROLE_OPTIONS,
        ..Property::DEFAULT
    },
    Property {
        name: "send_welcome_email",
        display_name: "Send Welcome Email",
        kind: PropertyKind::Boolean,
        default: Some("true"),
        description: Some("Whether to send a welcome email to the user"),
        ..Property::DEFAULT
    },
];

static UPDATE_FIELDS: &[Property] = &[
    child_string("bio", "Bio", "User biography"),
    child_string("company", "Company", "User company name"),
    Property {
        name: "email",
        display_name: "Email",
        default: Some("\"\""),
        placeholder: Some("name@email.com"),
        description: Some("New email address for the user"),
        ..Property::DEFAULT
    },
    child_string("first_name", "First Name", "User first name"),
    child_string("headline", "Headline", "User headline or title"),
    child_string("last_name", "Last Name", "User last name"),
    Property {
        name: "password",
        display_name: "Password",
        secret: true,
        default: Some("\"\""),
        description: Some("New password for the user"),
        ..Property::DEFAULT
    },
    Property {
        name: "roles",
        display_name: "Roles",
        kind: PropertyKind::MultiOptions,
        default: Some("[]"),
        description: Some("Roles to assign to the user"),
        options: ROLE_OPTIONS,
        ..Property::DEFAULT
    },
];

static GET_ALL_FILTERS: &[Property] = &[
    child_string(
        "query",
        "Query",
        "Search query to filter users (searches name and email)",
    ),
    Property {
        name: "role",
        display_name: "Role",
        kind: PropertyKind::Options,
        default: Some("\"\""),
        description: Some("Filter users by role"),
        options: ROLE_OPTIONS,
        ..Property::DEFAULT
    },
];

pub static FIELDS: &[Property] = &[
    // user:create
    Property {
        name: "email",
        display_name: "Email",
        required: true,
        default: Some("\"\""),
        placeholder: Some("name@email.com"),
        description: Some("The email address of the user (must be unique)"),
        display: Some(show(&["user"], &["create"])),
        ..Property::DEFAULT
    },
    collection(
        "additionalFields",
        "Additional Fields",
        "Add Field",
        CREATE_ADDITIONAL_FIELDS,
        show(&["user"], &["create"]),
    ),
    // user:delete
    required_string(
        "userId",
        "User ID",
        "The ID of the user to delete",
        show(&["user"], &["delete"]),
    ),
    // user:get
    required_string(
        "userId",
        "User ID",
        "The ID of the user to retrieve",
        show(&["user"], &["get"]),
    ),
    // user:getByEmail
    Property {
        name: "email",
        display_name: "Email",
        required: true,
        default: Some("\"\""),
        placeholder: Some("name@email.com"),
        description: Some("The email address of the user to find"),
        display: Some(show(&["user"], &["getByEmail"])),
        ..Property::DEFAULT
    },
    // user:getAll
    return_all(show(&["user"], &["getAll"])),
    limit(&["user"], &["getAll"]),
    collection(
        "filters",
        "Filters",
        "Add Filter",
        GET_ALL_FILTERS,
        show(&["user"], &["getAll"]),
    ),
    // user:update
    required_string(
        "userId",
        "User ID",
        "The ID of the user to update",
        show(&["user"], &["update"]),
    ),
    collection(
        "updateFields",
        "Update Fields",
        "Add Field",
        UPDATE_FIELDS,
        show(&["user"], &["update"]),
    ),
];
