// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Order resource property tables

use super::{collection, child_number, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub static OPERATIONS: &[Property] = &[Property {
    name: "operation",
    display_name: "Operation",
    kind: PropertyKind::Options,
    default: Some("\"getAll\""),
    options: &[
        PropertyOption {
            name: "Create External",
            value: "createExternal",
            description: Some("Create an external order (bypasses Thinkific checkout)"),
            action: Some("Create an external order"),
        },
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get an order by ID"),
            action: Some("Get an order"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many orders"),
            action: Some("Get many orders"),
        },
        PropertyOption {
            name: "Refund",
            value: "refund",
            description: Some("Refund an order"),
            action: Some("Refund an order"),
        },
    ],
    display: Some(show(&["order"], &[])),
    ..Property::DEFAULT
}];

static CREATE_EXTERNAL_ADDITIONAL_FIELDS: &[Property] = &[
    child_number("amount_cents", "Amount (Cents)", "The order amount in cents"),
    child_string("billing_name", "Billing Name", "The billing name for the order"),
    child_string("coupon_code", "Coupon Code", "A coupon code to apply to the order"),
];

static GET_ALL_FILTERS: &[Property] = &[
    child_string("product_id", "Product ID", "Filter orders by product ID"),
    Property {
        name: "status",
        display_name: "Status",
        kind: PropertyKind::Options,
        default: Some("\"\""),
        description: Some("Filter orders by status"),
        options: &[
            PropertyOption::new("Paid", "paid"),
            PropertyOption::new("Pending", "pending"),
            PropertyOption::new("Refunded", "refunded"),
        ],
        ..Property::DEFAULT
    },
    child_string("user_id", "User ID", "Filter orders by user ID"),
];

pub static FIELDS: &[Property] = &[
    // order:createExternal
    required_string(
        "userId",
        "User ID",
        "The ID of the user placing the order",
        show(&["order"], &["createExternal"]),
    ),
    required_string(
        "productId",
        "Product ID",
        "The ID of the product being purchased",
        show(&["order"], &["createExternal"]),
    ),
    Property {
        name: "paymentProvider",
        display_name: "Payment Provider",
        required: true,
        default: Some("\"\""),
        placeholder: Some("stripe"),
        description: Some("The name of the external payment provider"),
        display: Some(show(&["order"], &["createExternal"])),
        ..Property::DEFAULT
    },
    collection(
        "additionalFields",
        "Additional Fields",
        "Add Field",
        CREATE_EXTERNAL_ADDITIONAL_FIELDS,
        show(&["order"], &["createExternal"]),
    ),
    // order:get
    required_string(
        "orderId",
        "Order ID",
        "The ID of the order to retrieve",
        show(&["order"], &["get"]),
    ),
    // order:getAll
    return_all(show(&["order"], &["getAll"])),
    limit(&["order"], &["getAll"]),
    collection(
        "filters",
        "Filters",
        "Add Filter",
        GET_ALL_FILTERS,
        show(&["order"], &["getAll"]),
    ),
    // order:refund
    required_string(
        "orderId",
        "Order ID",
        "The ID of the order to refund",
        show(&["order"], &["refund"]),
    ),
];
