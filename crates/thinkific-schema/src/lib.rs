// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Declarative node-schema metadata for the Thinkific integration
//!
//! This crate defines the metadata types consumed by the host platform when
//! rendering an integration node:
//! - Property descriptors (field kinds, dropdown options, collections,
//!   numeric ranges) with conditional-visibility rules
//! - Node and credential descriptors, registered via the `inventory` crate
//!   for runtime discovery
//! - The error category/severity taxonomy shared with the node runtime
//!
//! Everything here is pure data plus visibility-predicate evaluation; no I/O
//! happens in this crate.

pub mod descriptor;
pub mod error;
pub mod property;

pub use descriptor::{
    CredentialDescriptor, CredentialTest, NodeDescriptor, find_credential, find_node,
    get_all_credentials, get_all_nodes,
};
pub use error::{ErrorCategory, ErrorSeverity};
pub use property::{
    DisplayRule, NumberRange, Property, PropertyKind, PropertyOption, visible_properties,
};
