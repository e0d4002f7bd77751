// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Product resource property tables

use super::{collection, child_string, limit, required_string, return_all, show};
use thinkific_schema::{Property, PropertyKind, PropertyOption};

pub static OPERATIONS: &[Property] = &[Property {
    name: "operation",
    display_name: "Operation",
    kind: PropertyKind::Options,
    default: Some("\"getAll\""),
    options: &[
        PropertyOption {
            name: "Get",
            value: "get",
            description: Some("Get a product by ID"),
            action: Some("Get a product"),
        },
        PropertyOption {
            name: "Get Courses",
            value: "getCourses",
            description: Some("Get courses included in a product"),
            action: Some("Get product courses"),
        },
        PropertyOption {
            name: "Get Many",
            value: "getAll",
            description: Some("Get many products"),
            action: Some("Get many products"),
        },
        PropertyOption {
            name: "Get Prices",
            value: "getPrices",
            description: Some("Get prices for a product"),
            action: Some("Get product prices"),
        },
    ],
    display: Some(show(&["product"], &[])),
    ..Property::DEFAULT
}];

static GET_ALL_FILTERS: &[Property] = &[child_string(
    "query",
    "Query",
    "Search query to filter products by name",
)];

pub static FIELDS: &[Property] = &[
    // product:get
    required_string(
        "productId",
        "Product ID",
        "The ID of the product to retrieve",
        show(&["product"], &["get"]),
    ),
    // product:getCourses
    required_string(
        "productId",
        "Product ID",
        "The ID of the product to get courses for",
        show(&["product"], &["getCourses"]),
    ),
    return_all(show(&["product"], &["getCourses"])),
    limit(&["product"], &["getCourses"]),
    // product:getAll
    return_all(show(&["product"], &["getAll"])),
    limit(&["product"], &["getAll"]),
    collection(
        "filters",
        "Filters",
        "Add Filter",
        GET_ALL_FILTERS,
        show(&["product"], &["getAll"]),
    ),
    // product:getPrices
    required_string(
        "productId",
        "Product ID",
        "The ID of the product to get prices for",
        show(&["product"], &["getPrices"]),
    ),
];
