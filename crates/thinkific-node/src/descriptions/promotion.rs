// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Promotion resource property tables

use super::{collection, child_date_time, child_number, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

static DISCOUNT_TYPE_OPTIONS: &[PropertyOption] = &[
    PropertyOption::new("Fixed", "fixed"),
    PropertyOption::new("Percentage", "percentage"),
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
            description: Some("Create a new promotion"),
            action: Some("Create a promotion"),
        },
        PropertyOption {
            name: "Delete",
            value: "delete",
            description: Some("Delete a promotion"),
            action: Some("Delete a promotion"),
        },
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get a promotion by ID"),
            action: Some("Get a promotion"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many promotions"),
            action: Some("Get many promotions"),
        },
        PropertyOption {
            name: "Update",
            value: "update",
            description: Some("Update a promotion"),
            action: Some("Update a promotion"),
        },
    ],
    display: Some(show(&["promotion"], &[])),
    ..Property::DEFAULT
}];

static CREATE_ADDITIONAL_FIELDS: &[Property] = &[
    child_string("description", "Description", "The description of the promotion"),
    child_date_time(
        "expires_at",
        "Expires At",
        "When the promotion expires (ISO 8601 format)",
    ),
    child_string(
        "product_ids",
        "Product IDs",
        "Comma-separated list of product IDs the promotion applies to",
    ),
    child_date_time(
        "starts_at",
        "Starts At",
        "When the promotion starts (ISO 8601 format)",
    ),
];

static UPDATE_FIELDS: &[Property] = &[
    child_string("description", "Description", "The description of the promotion"),
    child_number(
        "discount_amount",
        "Discount Amount",
        "The discount value (percentage or fixed amount in cents)",
    ),
    Property {
        name: "discount_type",
        display_name: "Discount Type",
        kind: PropertyKind::Options,
        default: Some("\"percentage\""),
        description: Some("The type of discount"),
        options: DISCOUNT_TYPE_OPTIONS,
        ..Property::DEFAULT
    },
    child_date_time(
        "expires_at",
        "Expires At",
        "When the promotion expires (ISO 8601 format)",
    ),
    child_string("name", "Name", "The name of the promotion"),
    child_string(
        "product_ids",
        "Product IDs",
        "Comma-separated list of product IDs the promotion applies to",
    ),
    child_date_time(
        "starts_at",
        "Starts At",
        "When the promotion starts (ISO 8601 format)",
    ),
];

pub static FIELDS: &[Property] = &[
    // promotion:create
    required_string(
        "name",
        "Name",
        "The name of the promotion",
        show(&["promotion"], &["create"]),
    ),
    Property {
        name: "discountType",
        display_name: "Discount Type",
        kind: PropertyKind::Options,
        required: true,
        default: Some("\"percentage\""),
        description: Some("The type of discount"),
        options: DISCOUNT_TYPE_OPTIONS,
        display: Some(show(&["promotion"], &["create"])),
        ..Property::DEFAULT
    },
    Property {
        name: "discountAmount",
        display_name: "Discount Amount",
        kind: PropertyKind::Number,
        required: true,
        default: Some("0"),
        description: Some("The discount value (percentage or fixed amount in cents)"),
        display: Some(show(&["promotion"], &["create"])),
        ..Property::DEFAULT
    },
    collection(
        "additionalFields",
        "Additional Fields",
        "Add Field",
        CREATE_ADDITIONAL_FIELDS,
        show(&["promotion"], &["create"]),
    ),
    // promotion:delete
    required_string(
        "promotionId",
        "Promotion ID",
        "The ID of the promotion to delete",
        show(&["promotion"], &["delete"]),
    ),
    // promotion:get
    required_string(
        "promotionId",
        "Promotion ID",
        "The ID of the promotion to retrieve",
        show(&["promotion"], &["get"]),
    ),
    // promotion:getAll
    return_all(show(&["promotion"], &["getAll"])),
    limit(&["promotion"], &["getAll"]),
    // promotion:update
    required_string(
        "promotionId",
        "Promotion ID",
        "The ID of the promotion to update",
        show(&["promotion"], &["update"]),
    ),
    collection(
        "updateFields",
        "Update Fields",
        "Add Field",
        UPDATE_FIELDS,
        show(&["promotion"], &["update"]),
    ),
];
