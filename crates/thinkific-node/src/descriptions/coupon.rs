// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Coupon resource property tables

use super::{collection, child_number, child_string, limit, required_string, return_all, show};
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
            description: Some("Create a new coupon"),
            action: Some("Create a coupon"),
        },
        PropertyOption {
            name: "Delete",
            value: "delete",
            description: Some("Delete a coupon"),
            action: Some("Delete a coupon"),
        },
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get a coupon by ID"),
            action: Some("Get a coupon"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many coupons"),
            action: Some("Get many coupons"),
        },
        PropertyOption {
            name: "Update",
            value: "update",
            description: Some("Update a coupon"),
            action: Some("Update a coupon"),
        },
        PropertyOption {
            name: "Validate",
            value: "validate",
            description: Some("Check if a coupon code is valid"),
            action: Some("Validate a coupon"),
        },
    ],
    display: Some(show(&["coupon"], &[])),
    ..Property::DEFAULT
}];

static OPTIONAL_COUPON_FIELDS: &[Property] = &[
    child_number(
        "duration_in_months",
        "Duration in Months",
        "Duration in months for subscription discounts",
    ),
    child_string("note", "Note", "Internal note about the coupon"),
    child_number(
        "quantity",
        "Quantity",
        "Number of times the coupon can be used (0 for unlimited)",
    ),
];

static UPDATE_FIELDS: &[Property] = &[
    child_string("code", "Code", "The coupon code"),
    child_number(
        "duration_in_months",
        "Duration in Months",
        "Duration in months for subscription discounts",
    ),
    child_string("note", "Note", "Internal note about the coupon"),
    child_number(
        "quantity",
        "Quantity",
        "Number of times the coupon can be used (0 for unlimited)",
    ),
];

static GET_ALL_FILTERS: &[Property] = &[child_string(
    "promotion_id",
    "Promotion ID",
    "Filter coupons by promotion ID",
)];

pub static FIELDS: &[Property] = &[
    // coupon:create
    required_string(
        "code",
        "Code",
        "The coupon code",
        show(&["coupon"], &["create"]),
    ),
    required_string(
        "promotionId",
        "Promotion ID",
        "The ID of the promotion this coupon is associated with",
        show(&["coupon"], &["create"]),
    ),
    collection(
        "additionalFields",
        "Additional Fields",
        "Add Field",
        OPTIONAL_COUPON_FIELDS,
        show(&["coupon"], &["create"]),
    ),
    // coupon:delete
    required_string(
        "couponId",
        "Coupon ID",
        "The ID of the coupon to delete",
        show(&["coupon"], &["delete"]),
    ),
    // coupon:get
    required_string(
        "couponId",
        "Coupon ID",
        "The ID of the coupon to retrieve",
        show(&["coupon"], &["get"]),
    ),
    // coupon:getAll
    return_all(show(&["coupon"], &["getAll"])),
    limit(&["coupon"], &["getAll"]),
    collection(
        "filters",
        "Filters",
        "Add Filter",
        GET_ALL_FILTERS,
        show(&["coupon"], &["getAll"]),
    ),
    // coupon:update
    required_string(
        "couponId",
        "Coupon ID",
        "The ID of the coupon to update",
        show(&["coupon"], &["update"]),
    ),
    collection(
        "updateFields",
        "Update Fields",
        "Add Field",
        UPDATE_FIELDS,
        show(&["coupon"], &["update"]),
    ),
    // coupon:validate
    required_string(
        "couponCode",
        "Coupon Code",
        "The coupon code to validate",
        show(&["coupon"], &["validate"]),
    ),
    required_string(
        "productId",
        "Product ID",
        "The product ID to check the coupon against",
        show(&["coupon"], &["validate"]),
    ),
];
