// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Thinkific integration node
//!
//! CRUD-style operations against the Thinkific public API v1 (users,
//! courses, enrollments, products, orders, promotions, coupons, groups,
//! webhooks) plus a webhook-based trigger, packaged for a
//! workflow-automation host:
//!
//! - [`credentials`] - the two secrets and their header mapping
//! - [`client`] - one authenticated request helper and one pagination helper
//! - [`resources`] - per-resource action dispatch
//! - [`descriptions`] - the declarative field schema, as static data tables
//! - [`node`] - the host-facing execution entry point
//! - [`trigger`] - webhook subscription lifecycle and delivery passthrough
//!
//! Entities round-trip to the vendor on every call; nothing is cached
//! locally. The only persisted state is the trigger's webhook id, held in
//! host-provided per-node storage.

pub mod client;
pub mod credentials;
pub mod descriptions;
pub mod error;
pub mod node;
pub mod params;
pub mod resources;
pub mod trigger;
pub mod utils;

pub use client::{BASE_URL, Client, PAGE_SIZE};
pub use credentials::ThinkificCredentials;
pub use error::NodeError;
pub use node::{ExecuteOptions, execute, init};
pub use trigger::{MemoryStaticData, StaticData, WebhookEvent, WebhookTrigger};
