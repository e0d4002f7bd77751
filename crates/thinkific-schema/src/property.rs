// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Property descriptors for node input fields
//!
//! Properties are declared as `'static` data tables: each integration lists
//! its input fields once, and the host renders them generically. Conditional
//! visibility is expressed as data (`DisplayRule`) and evaluated here instead
//! of being hand-branched per field.

use serde::Serialize;
use serde_json::{Map, Value};
use strum::VariantNames;

/// The kind of input a property renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, VariantNames)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PropertyKind {
    /// Free-form text input
    String,
    /// Numeric input, optionally constrained by a [`NumberRange`]
    Number,
    /// Checkbox
    Boolean,
    /// ISO 8601 date/time input
    DateTime,
    /// Single-choice dropdown backed by [`Property::options`]
    Options,
    /// Multi-choice dropdown backed by [`Property::options`]
    MultiOptions,
    /// Group of optional child properties ([`Property::children`])
    Collection,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::DateTime => "dateTime",
            PropertyKind::Options => "options",
            PropertyKind::MultiOptions => "multiOptions",
            PropertyKind::Collection => "collection",
        }
    }
}

/// One choice in an options/multiOptions dropdown
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PropertyOption {
    /// Display label
    pub name: &'static str,
    /// Value written into the parameter when selected
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Short imperative label for UI action lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
}

impl PropertyOption {
    pub const fn new(name: &'static str, value: &'static str) -> Self {
        PropertyOption {
            name,
            value,
            description: None,
            action: None,
        }
    }
}

/// Inclusive numeric validation bounds
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

/// Conditional visibility for a property.
///
/// A property is shown when the selected resource is in `resources`, the
/// selected operation is in `operations`, and every `(field, value)` pair in
/// `when` matches the current parameter values. Empty slices match anything.
/// `when` values are JSON literals (e.g. `"false"`, `"\"fixed\""`).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayRule {
    pub resources: &'static [&'static str],
    pub operations: &'static [&'static str],
    pub when: &'static [(&'static str, &'static str)],
}

impl DisplayRule {
    pub const NONE: DisplayRule = DisplayRule {
        resources: &[],
        operations: &[],
        when: &[],
    };

    pub fn matches(&self, resource: &str, operation: &str, params: &Map<String, Value>) -> bool {
        if !self.resources.is_empty() && !self.resources.contains(&resource) {
            return false;
        }
        if !self.operations.is_empty() && !self.operations.contains(&operation) {
            return false;
        }
        for (field, literal) in self.when {
            let expected = parse_literal(literal);
            match params.get(*field) {
                Some(value) if *value == expected => {}
                _ => return false,
            }
        }
        true
    }
}

/// A single declared input field.
///
/// Tables construct these with struct-update syntax from
/// [`Property::DEFAULT`], so each entry only names what differs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Property {
    /// Parameter name as it appears in input records
    pub name: &'static str,
    /// Display label
    pub display_name: &'static str,
    pub kind: PropertyKind,
    pub required: bool,
    /// Masked in the UI and never logged
    pub secret: bool,
    /// Default value as a JSON literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<NumberRange>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [PropertyOption],
    /// Child properties for collections
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub children: &'static [Property],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayRule>,
}

impl Property {
    pub const DEFAULT: Property = Property {
        name: "",
        display_name: "",
        kind: PropertyKind::String,
        required: false,
        secret: false,
        default: None,
        description: None,
        placeholder: None,
        range: None,
        options: &[],
        children: &[],
        display: None,
    };

    /// Parsed default value, if one is declared
    pub fn default_value(&self) -> Option<Value> {
        self.default.map(parse_literal)
    }

    /// Whether this property should be shown for the given selection
    pub fn is_visible(&self, resource: &str, operation: &str, params: &Map<String, Value>) -> bool {
        match &self.display {
            Some(rule) => rule.matches(resource, operation, params),
            None => true,
        }
    }
}

/// Filter a property table down to what is visible for the current selection
pub fn visible_properties<'a>(
    properties: &'a [Property],
    resource: &str,
    operation: &str,
    params: &Map<String, Value>,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| p.is_visible(resource, operation, params))
        .collect()
}

// Literals that are not valid JSON fall back to a plain string, so tables can
// write `default: Some("percentage")` as shorthand for the quoted form.
fn parse_literal(literal: &str) -> Value {
    serde_json::from_str(literal).unwrap_or_else(|_| Value::String(literal.to_string()))
}
