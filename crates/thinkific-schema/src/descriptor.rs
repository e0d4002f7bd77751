// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Node and credential descriptors, collected at runtime via `inventory`
//!
//! Integrations declare their descriptors as statics and register them with
//! `inventory::submit!`; the host enumerates them through the lookup
//! functions below when loading nodes.

use crate::property::Property;

/// Declarative description of one integration node
#[derive(Debug, Clone)]
pub struct NodeDescriptor {
    /// Machine name the host addresses the node by
    pub name: &'static str,
    /// Display name for UI
    pub display_name: &'static str,
    /// Description of what the node does
    pub description: &'static str,
    /// Palette group, e.g. "transform" or "trigger"
    pub group: &'static str,
    /// Ordered property tables making up the node's input schema
    pub property_groups: &'static [&'static [Property]],
}

impl NodeDescriptor {
    /// Iterate every property across all groups, in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &'static Property> {
        self.property_groups.iter().flat_map(|group| group.iter())
    }
}

inventory::collect!(&'static NodeDescriptor);

/// The liveness-check request declared by a credential type
#[derive(Debug, Clone)]
pub struct CredentialTest {
    pub method: &'static str,
    pub path: &'static str,
    pub query: &'static [(&'static str, &'static str)],
}

/// Declarative description of one credential type
#[derive(Debug, Clone)]
pub struct CredentialDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub documentation_url: &'static str,
    pub properties: &'static [Property],
    pub test: CredentialTest,
}

inventory::collect!(&'static CredentialDescriptor);

/// Get all registered node descriptors
pub fn get_all_nodes() -> impl Iterator<Item = &'static NodeDescriptor> {
    inventory::iter::<&'static NodeDescriptor>.into_iter().copied()
}

/// Find a node descriptor by machine name
pub fn find_node(name: &str) -> Option<&'static NodeDescriptor> {
    get_all_nodes().find(|n| n.name == name)
}

/// Get all registered credential descriptors
pub fn get_all_credentials() -> impl Iterator<Item = &'static CredentialDescriptor> {
    inventory::iter::<&'static CredentialDescriptor>
        .into_iter()
        .copied()
}

/// Find a credential descriptor by name
pub fn find_credential(name: &str) -> Option<&'static CredentialDescriptor> {
    get_all_credentials().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyKind;

    static TEST_PROPERTIES: &[Property] = &[
        Property {
            name: "token",
            display_name: "Token",
            secret: true,
            required: true,
            ..Property::DEFAULT
        },
        Property {
            name: "region",
            display_name: "Region",
            kind: PropertyKind::Options,
            ..Property::DEFAULT
        },
    ];

    static TEST_NODE: NodeDescriptor = NodeDescriptor {
        name: "descriptorTestNode",
        display_name: "Descriptor Test",
        description: "Registration round-trip fixture",
        group: "transform",
        property_groups: &[TEST_PROPERTIES],
    };

    inventory::submit! { &TEST_NODE }

    static TEST_CREDENTIAL: CredentialDescriptor = CredentialDescriptor {
        name: "descriptorTestCredential",
        display_name: "Descriptor Test Credential",
        documentation_url: "https://example.com/docs",
        properties: TEST_PROPERTIES,
        test: CredentialTest {
            method: "GET",
            path: "/ping",
            query: &[("limit", "1")],
        },
    };

    inventory::submit! { &TEST_CREDENTIAL }

    #[test]
    fn test_find_node_registered() {
        let node = find_node("descriptorTestNode").expect("node should be registered");
        assert_eq!(node.display_name, "Descriptor Test");
        assert_eq!(node.properties().count(), 2);
    }

    #[test]
    fn test_find_node_unknown() {
        assert!(find_node("nope").is_none());
    }

    #[test]
    fn test_find_credential_registered() {
        let cred = find_credential("descriptorTestCredential").expect("credential registered");
        assert_eq!(cred.test.method, "GET");
        assert_eq!(cred.test.path, "/ping");
        assert!(cred.properties[0].secret);
    }
}
