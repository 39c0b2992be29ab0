//! Configuration and reopen tests
//!
//! The catalog is configured by a `lode.toml` in its data directory:
//! written with defaults on first open, honored and never overwritten on
//! later opens. Rewiring a catalog over an existing backend must continue
//! the id space above everything already assigned.

use lode::{
    Catalog, CatalogClient, CatalogConfig, EdgeStore, ItemId, NodeStore, VersionId, VersionSpec,
};
use lode_storage::MemoryBackend;
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// CONFIG FILE LIFECYCLE
// ============================================================================

#[test]
fn test_first_open_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lode.toml");
    assert!(!config_path.exists());

    let client = CatalogClient::open(dir.path()).unwrap();
    assert!(config_path.exists());
    assert_eq!(client.catalog().config().backend, "memory");
    assert!(client.catalog().config().reference_checks);
}

#[test]
fn test_open_honors_hand_edited_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("lode.toml"),
        "backend = \"memory\"\nreference_checks = false\n",
    )
    .unwrap();

    let client = CatalogClient::open(dir.path()).unwrap();
    assert!(!client.catalog().config().reference_checks);

    // And the setting is live: dangling endpoints pass.
    client
        .edge_create("unchecked", None, vec![], ItemId::new(41), ItemId::new(42))
        .unwrap();
}

#[test]
fn test_open_rejects_unknown_backend() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("lode.toml"), "backend = \"postgres\"\n").unwrap();

    let err = CatalogClient::open(dir.path()).unwrap_err();
    assert!(err.to_string().contains("postgres"));
}

#[test]
fn test_reopen_does_not_overwrite_config() {
    let dir = TempDir::new().unwrap();
    {
        let _client = CatalogClient::open(dir.path()).unwrap();
    }
    std::fs::write(
        dir.path().join("lode.toml"),
        "backend = \"memory\"\nreference_checks = false\n",
    )
    .unwrap();

    let client = CatalogClient::open(dir.path()).unwrap();
    assert!(!client.catalog().config().reference_checks);
}

// ============================================================================
// SHARED OPEN
// ============================================================================

#[test]
fn test_opens_on_one_path_share_the_catalog() {
    let dir = TempDir::new().unwrap();
    let client1 = CatalogClient::open(dir.path()).unwrap();
    let client2 = CatalogClient::open(dir.path()).unwrap();

    assert!(Arc::ptr_eq(client1.catalog(), client2.catalog()));

    client1.node_create("visible", None, vec![]).unwrap();
    assert!(client2.node_get("visible").is_ok());
}

#[test]
fn test_distinct_paths_are_distinct_catalogs() {
    let dir1 = TempDir::new().unwrap();
    let dir2 = TempDir::new().unwrap();
    let client1 = CatalogClient::open(dir1.path()).unwrap();
    let client2 = CatalogClient::open(dir2.path()).unwrap();

    client1.node_create("only-here", None, vec![]).unwrap();
    assert!(client2.node_get("only-here").is_err());
}

// ============================================================================
// ID WATERMARKS ACROSS REWIRES
// ============================================================================

#[test]
fn test_rewired_backend_continues_the_id_space() {
    let backend = Arc::new(MemoryBackend::new());

    let first = CatalogClient::new(
        Catalog::with_backend(backend.clone(), CatalogConfig::default()).unwrap(),
    );
    let node = first.node_create("survivor", None, vec![]).unwrap();
    let old_leaf = first
        .node_create_version("survivor", VersionSpec::new(), &[])
        .unwrap()
        .rich()
        .id();
    drop(first);

    // Same backend, fresh catalog: rows are visible, ids stay above the
    // watermark, and history simply continues.
    let second = CatalogClient::new(
        Catalog::with_backend(backend, CatalogConfig::default()).unwrap(),
    );
    assert_eq!(second.node_get("survivor").unwrap().id(), node.id());

    let other = second.node_create("newcomer", None, vec![]).unwrap();
    assert!(other.id() > node.id());

    let new_leaf = second
        .node_create_version("survivor", VersionSpec::new(), &[])
        .unwrap()
        .rich()
        .id();
    assert!(new_leaf > old_leaf);

    let history = second.node_history("survivor").unwrap();
    assert_eq!(history.parents_of(new_leaf), vec![old_leaf]);
    assert_eq!(second.node_leaves("survivor").unwrap(), vec![new_leaf]);
}

#[test]
fn test_version_ids_never_repeat_after_rewire() {
    let backend = Arc::new(MemoryBackend::new());
    let mut seen: Vec<VersionId> = Vec::new();

    for _ in 0..3 {
        let client = CatalogClient::new(
            Catalog::with_backend(backend.clone(), CatalogConfig::default()).unwrap(),
        );
        if client.node_get("rounds").is_err() {
            client.node_create("rounds", None, vec![]).unwrap();
        }
        for _ in 0..5 {
            let id = client
                .node_create_version("rounds", VersionSpec::new(), &[])
                .unwrap()
                .rich()
                .id();
            assert!(!seen.contains(&id));
            seen.push(id);
        }
    }
    assert_eq!(seen.len(), 15);
}
