// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Static property tables for the node's declarative schema
//!
//! One module per resource (plus the trigger). Every table is `'static`
//! data; the const helpers below cover the shapes that repeat across
//! resources (required id fields, the returnAll/limit pair).

use thinkific_schema::{DisplayRule, NumberRange, Property, PropertyKind};

pub mod coupon;
pub mod course;
pub mod enrollment;
pub mod group;
pub mod order;
pub mod product;
pub mod promotion;
pub mod trigger;
pub mod user;
pub mod webhook;

/// The top-level resource dropdown
pub static RESOURCE: &[Property] = &[Property {
    name: "resource",
    display_name: "Resource",
    kind: PropertyKind::Options,
    default: Some("\"user\""),
    options: &[
        thinkific_schema::PropertyOption::new("Coupon", "coupon"),
        thinkific_schema::PropertyOption::new("Course", "course"),
        thinkific_schema::PropertyOption::new("Enrollment", "enrollment"),
        thinkific_schema::PropertyOption::new("Group", "group"),
        thinkific_schema::PropertyOption::new("Order", "order"),
        thinkific_schema::PropertyOption::new("Product", "product"),
        thinkific_schema::PropertyOption::new("Promotion", "promotion"),
        thinkific_schema::PropertyOption::new("User", "user"),
        thinkific_schema::PropertyOption::new("Webhook", "webhook"),
    ],
    ..Property::DEFAULT
}];

/// Every property table of the action node, in display order
pub static ALL_PROPERTY_GROUPS: &[&[Property]] = &[
    RESOURCE,
    user::OPERATIONS,
    user::FIELDS,
    course::OPERATIONS,
    course::FIELDS,
    enrollment::OPERATIONS,
    enrollment::FIELDS,
    product::OPERATIONS,
    product::FIELDS,
    order::OPERATIONS,
    order::FIELDS,
    promotion::OPERATIONS,
    promotion::FIELDS,
    coupon::OPERATIONS,
    coupon::FIELDS,
    group::OPERATIONS,
    group::FIELDS,
    webhook::OPERATIONS,
    webhook::FIELDS,
];

const RETURN_ALL_WHEN_FALSE: &[(&str, &str)] = &[("returnAll", "false")];

pub(crate) const fn show(
    resources: &'static [&'static str],
    operations: &'static [&'static str],
) -> DisplayRule {
    DisplayRule {
        resources,
        operations,
        when: &[],
    }
}

pub(crate) const fn required_string(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    display: DisplayRule,
) -> Property {
    Property {
        name,
        display_name,
        kind: PropertyKind::String,
        required: true,
        default: Some("\"\""),
        description: Some(description),
        display: Some(display),
        ..Property::DEFAULT
    }
}

pub(crate) const fn return_all(display: DisplayRule) -> Property {
    Property {
        name: "returnAll",
        display_name: "Return All",
        kind: PropertyKind::Boolean,
        default: Some("false"),
        description: Some("Whether to return all results or only up to a given limit"),
        display: Some(display),
        ..Property::DEFAULT
    }
}

pub(crate) const fn limit(
    resources: &'static [&'static str],
    operations: &'static [&'static str],
) -> Property {
    Property {
        name: "limit",
        display_name: "Limit",
        kind: PropertyKind::Number,
        default: Some("50"),
        range: Some(NumberRange { min: 1, max: 100 }),
        description: Some("Max number of results to return"),
        display: Some(DisplayRule {
            resources,
            operations,
            when: RETURN_ALL_WHEN_FALSE,
        }),
        ..Property::DEFAULT
    }
}

pub(crate) const fn collection(
    name: &'static str,
    display_name: &'static str,
    placeholder: &'static str,
    children: &'static [Property],
    display: DisplayRule,
) -> Property {
    Property {
        name,
        display_name,
        kind: PropertyKind::Collection,
        default: Some("{}"),
        placeholder: Some(placeholder),
        children,
        display: Some(display),
        ..Property::DEFAULT
    }
}

pub(crate) const fn child_string(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> Property {
    Property {
        name,
        display_name,
        kind: PropertyKind::String,
        default: Some("\"\""),
        description: Some(description),
        ..Property::DEFAULT
    }
}

pub(crate) const fn child_number(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> Property {
    Property {
        name,
        display_name,
        kind: PropertyKind::Number,
        default: Some("0"),
        description: Some(description),
        ..Property::DEFAULT
    }
}

pub(crate) const fn child_date_time(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> Property {
    Property {
        name,
        display_name,
        kind: PropertyKind::DateTime,
        default: Some("\"\""),
        description: Some(description),
        ..Property::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use thinkific_schema::visible_properties;

    fn params(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn all_properties() -> impl Iterator<Item = &'static Property> {
        ALL_PROPERTY_GROUPS.iter().flat_map(|group| group.iter())
    }

    #[test]
    fn test_resource_dropdown_covers_all_nine() {
        let values: Vec<&str> = RESOURCE[0].options.iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec![
                "coupon",
                "course",
                "enrollment",
                "group",
                "order",
                "product",
                "promotion",
                "user",
                "webhook",
            ]
        );
    }

    #[test]
    fn test_every_resource_has_an_operation_dropdown() {
        for resource in RESOURCE[0].options.iter().map(|o| o.value) {
            let dropdowns: Vec<_> = all_properties()
                .filter(|p| p.name == "operation")
                .filter(|p| p.is_visible(resource, "getAll", &params(json!({}))))
                .collect();
            assert_eq!(dropdowns.len(), 1, "resource {} needs one dropdown", resource);
            assert!(!dropdowns[0].options.is_empty());
        }
    }

    #[test]
    fn test_limit_hidden_when_return_all() {
        let visible = visible_properties(
            user::FIELDS,
            "user",
            "getAll",
            &params(json!({ "returnAll": true })),
        );
        assert!(visible.iter().all(|p| p.name != "limit"));

        let visible = visible_properties(
            user::FIELDS,
            "user",
            "getAll",
            &params(json!({ "returnAll": false })),
        );
        assert!(visible.iter().any(|p| p.name == "limit"));
    }

    #[test]
    fn test_limit_bounds() {
        for property in all_properties().filter(|p| p.name == "limit") {
            let range = property.range.expect("limit declares a range");
            assert_eq!(range.min, 1);
            assert_eq!(range.max, 100);
            assert_eq!(property.default_value(), Some(json!(50)));
        }
    }

    #[test]
    fn test_operation_defaults_parse() {
        for property in all_properties().filter(|p| p.name == "operation") {
            let default = property.default_value().expect("dropdowns declare defaults");
            let default = default.as_str().expect("operation defaults are strings");
            assert!(
                property.options.iter().any(|o| o.value == default),
                "default '{}' must be a declared option",
                default
            );
        }
    }

    #[test]
    fn test_user_create_shows_email_and_additional_fields() {
        let visible = visible_properties(user::FIELDS, "user", "create", &params(json!({})));
        let names: Vec<&str> = visible.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["email", "additionalFields"]);
    }

    #[test]
    fn test_fields_hidden_for_other_resources() {
        let visible = visible_properties(user::FIELDS, "course", "get", &params(json!({})));
        assert!(visible.is_empty());
    }
}
