//! Atomicity tests
//!
//! A failed write leaves the catalog exactly as it was: no orphan
//! versions, no half-built DAG rows, no claimed names. These tests
//! inject failures through a backend wrapper that can be told to refuse
//! writes, then check that nothing leaked.

use super::test_utils::*;
use lode::{Catalog, CatalogClient, CatalogConfig, NodeStore, VersionSpec};
use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{Entity, EntityVersion};
use lode_core::statement::StatementBatch;
use lode_core::traits::Backend;
use lode_core::types::{EntityKind, ItemId, SuccessorId, VersionId};
use lode_core::version::VersionSuccessor;
use lode_core::{Error, Result};
use lode_storage::MemoryBackend;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ============================================================================
// Failure-injecting backend wrapper
// ============================================================================

/// Delegates to a real in-memory backend until told to refuse writes.
/// Reads keep working so tests can inspect the state left behind.
struct FlakyBackend {
    inner: MemoryBackend,
    refuse_writes: AtomicBool,
}

impl FlakyBackend {
    fn new() -> Self {
        Self {
            inner: MemoryBackend::new(),
            refuse_writes: AtomicBool::new(false),
        }
    }

    fn refuse_writes(&self, refuse: bool) {
        self.refuse_writes.store(refuse, Ordering::SeqCst);
    }
}

impl Backend for FlakyBackend {
    fn execute(&self, batch: StatementBatch) -> Result<()> {
        if self.refuse_writes.load(Ordering::SeqCst) {
            return Err(Error::storage("backend unavailable"));
        }
        self.inner.execute(batch)
    }

    fn item(&self, id: ItemId) -> Result<Option<Entity>> {
        self.inner.item(id)
    }

    fn item_by_name(&self, kind: EntityKind, name: &str) -> Result<Option<Entity>> {
        self.inner.item_by_name(kind, name)
    }

    fn version(&self, id: VersionId) -> Result<Option<EntityVersion>> {
        self.inner.version(id)
    }

    fn successor(&self, id: SuccessorId) -> Result<Option<VersionSuccessor>> {
        self.inner.successor(id)
    }

    fn dag(&self, item_id: ItemId) -> Result<Option<VersionHistoryDag>> {
        self.inner.dag(item_id)
    }

    fn max_assigned_id(&self) -> Result<u64> {
        self.inner.max_assigned_id()
    }
}

fn flaky_client() -> (Arc<FlakyBackend>, CatalogClient) {
    let backend = Arc::new(FlakyBackend::new());
    let catalog =
        Catalog::with_backend(backend.clone(), CatalogConfig::default()).unwrap();
    (backend, CatalogClient::new(catalog))
}

// ============================================================================
// STORAGE FAILURES
// ============================================================================

#[test]
fn test_backend_failure_surfaces_storage_error() {
    let (backend, client) = flaky_client();
    client.node_create("users", None, vec![]).unwrap();

    backend.refuse_writes(true);
    let err = client
        .node_create_version("users", VersionSpec::new(), &[])
        .unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn test_failed_version_write_leaves_history_untouched() {
    let (backend, client) = flaky_client();
    let versions = node_with_chain(&client, "users", 2);

    backend.refuse_writes(true);
    let _ = client.node_create_version("users", VersionSpec::new(), &[]);
    backend.refuse_writes(false);

    // History is exactly the two versions that committed.
    let history = client.node_history("users").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.edges().len(), 1);
    assert_eq!(client.node_leaves("users").unwrap(), vec![versions[1]]);

    // And the item is still writable.
    let v3 = client
        .node_create_version("users", VersionSpec::new(), &[])
        .unwrap();
    assert_eq!(client.node_leaves("users").unwrap(), vec![v3.rich().id()]);
}

#[test]
fn test_failed_create_does_not_claim_the_name() {
    let (backend, client) = flaky_client();

    backend.refuse_writes(true);
    let err = client.node_create("ghost", None, vec![]).unwrap_err();
    assert!(err.is_storage());
    backend.refuse_writes(false);

    // The name was never claimed; a retry owns it cleanly.
    assert!(client.node_get("ghost").is_err());
    client.node_create("ghost", None, vec![]).unwrap();
    assert_eq!(client.node_get("ghost").unwrap().name(), "ghost");
}

// ============================================================================
// REJECTED BATCHES
// ============================================================================

#[test]
fn test_rejected_version_create_leaves_no_orphan_rows() {
    let (_backend, client) = flaky_client();
    node_with_chain(&client, "users", 1);
    let foreign = node_with_chain(&client, "other", 1);

    // Rejected at DAG planning: parent belongs to a different item.
    let err = client
        .node_create_version("users", VersionSpec::new(), &[foreign[0]])
        .unwrap_err();
    assert!(err.is_not_found());

    let history = client.node_history("users").unwrap();
    assert_eq!(history.len(), 1);
    assert!(history.edges().is_empty());
}

#[test]
fn test_interleaved_failures_do_not_corrupt_other_items() {
    let (backend, client) = flaky_client();
    node_with_chain(&client, "healthy", 1);
    node_with_chain(&client, "unlucky", 1);

    backend.refuse_writes(true);
    let _ = client.node_create_version("unlucky", VersionSpec::new(), &[]);
    backend.refuse_writes(false);

    let v2 = client
        .node_create_version("healthy", VersionSpec::new(), &[])
        .unwrap();

    assert_eq!(client.node_history("unlucky").unwrap().len(), 1);
    assert_eq!(client.node_history("healthy").unwrap().len(), 2);
    assert_eq!(client.node_leaves("healthy").unwrap(), vec![v2.rich().id()]);
}
