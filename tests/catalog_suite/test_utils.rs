//! Common test utilities for the catalog suite

use lode::{CatalogClient, NodeStore, VersionId, VersionSpec};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique name generation across tests
static NAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a fresh in-memory client
pub fn client() -> CatalogClient {
    CatalogClient::in_memory().unwrap()
}

/// Create a unique entity name
pub fn unique_name(prefix: &str) -> String {
    let counter = NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}", prefix, counter)
}

/// Create a node and chain `count` versions onto it, returning the version
/// ids oldest first.
pub fn node_with_chain(client: &CatalogClient, name: &str, count: usize) -> Vec<VersionId> {
    client.node_create(name, None, vec![]).unwrap();
    (0..count)
        .map(|_| {
            client
                .node_create_version(name, VersionSpec::new(), &[])
                .unwrap()
                .rich()
                .id()
        })
        .collect()
}
