// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Group resource property tables

use super::{collection, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub static OPERATIONS: &[Property] = &[Property {
    name: "operation",
    display_name: "Operation",
    kind: PropertyKind::Options,
    default: Some("\"getAll\""),
    options: &[
        PropertyOption {
            name: "Add Users",
            value: "addUsers",
            description: Some("Add users to a group"),
            action: Some("Add users to a group"),
        },
        PropertyOption {
            name: "Create",
            value: "create",
            description: Some("Create a new group"),
            action: Some("Create a group"),
        },
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get a group by ID"),
            action: Some("Get a group"),
        },
        PropertyOption {
            name: "Get Analysts",
            value: "getAnalysts",
            description: Some("Get analysts for a group"),
            action: Some("Get group analysts"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many groups"),
            action: Some("Get many groups"),
        },
        PropertyOption {
            name: "Remove User",
            value: "removeUser",
            description: Some("Remove a user from a group"),
            action: Some("Remove user from group"),
        },
    ],
    display: Some(show(&["group"], &[])),
    ..Property::DEFAULT
}];

static CREATE_ADDITIONAL_FIELDS: &[Property] = &[
    child_string(
        "group_analyst_ids",
        "Group Analyst IDs",
        "Comma-separated list of user IDs to assign as group analysts",
    ),
    child_string(
        "user_ids",
        "User IDs",
        "Comma-separated list of user IDs to add to the group",
    ),
];

pub static FIELDS: &[Property] = &[
    // group:addUsers
    required_string(
        "groupId",
        "Group ID",
        "The ID of the group to add users to",
        show(&["group"], &["addUsers"]),
    ),
    required_string(
        "userIds",
        "User IDs",
        "Comma-separated list of user IDs to add to the group",
        show(&["group"], &["addUsers"]),
    ),
    // group:create
    required_string(
        "name",
        "Name",
        "The name of the group",
        show(&["group"], &["create"]),
    ),
    collection(
        "additionalFields",
        "Additional Fields",
        "Add Field",
        CREATE_ADDITIONAL_FIELDS,
        show(&["group"], &["create"]),
    ),
    // group:get
    required_string(
        "groupId",
        "Group ID",
        "The ID of the group to retrieve",
        show(&["group"], &["get"]),
    ),
    // group:getAnalysts
    required_string(
        "groupId",
        "Group ID",
        "The ID of the group to get analysts for",
        show(&["group"], &["getAnalysts"]),
    ),
    return_all(show(&["group"], &["getAnalysts"])),
    limit(&["group"], &["getAnalysts"]),
    // group:getAll
    return_all(show(&["group"], &["getAll"])),
    limit(&["group"], &["getAll"]),
    // group:removeUser
    required_string(
        "groupId",
        "Group ID",
        "The ID of the group to remove the user from",
        show(&["group"], &["removeUser"]),
    ),
    required_string(
        "userId",
        "User ID",
        "The ID of the user to remove from the group",
        show(&["group"], &["removeUser"]),
    ),
];
