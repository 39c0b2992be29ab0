//! Item lifecycle tests
//!
//! Creation, naming, and lookup of items across all six kinds. Versions
//! are covered in `version_dag_tests`; these tests stop at the item row.

use super::test_utils::*;
use lode::{
    EdgeStore, GraphStore, LineageEdgeStore, LineageGraphStore, NodeStore, StructureStore, Tag,
};

// ============================================================================
// CREATION AND LOOKUP
// ============================================================================

#[test]
fn test_create_and_get_round_trip() {
    let client = client();

    let created = client
        .node_create(
            "datasets/users",
            Some("hive:warehouse.users"),
            vec![Tag::new("owner", "data-eng"), Tag::new("pii", true)],
        )
        .unwrap();

    let fetched = client.node_get("datasets/users").unwrap();
    assert_eq!(fetched.id(), created.id());
    assert_eq!(fetched.name(), "datasets/users");
    assert_eq!(fetched.item().source_key(), Some("hive:warehouse.users"));
    assert_eq!(fetched.item().tags().len(), 2);
}

#[test]
fn test_get_by_id_matches_get_by_name() {
    let client = client();
    let created = client.node_create("by-id", None, vec![]).unwrap();

    let by_name = client.node_get("by-id").unwrap();
    let by_id = client.node_get_by_id(created.id()).unwrap();
    assert_eq!(by_name.id(), by_id.id());
    assert_eq!(by_name.name(), by_id.name());
}

#[test]
fn test_unknown_name_is_not_found() {
    let client = client();
    let err = client.node_get("never-created").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_id_of_other_kind_is_not_found() {
    let client = client();
    let node = client.node_create("a-node", None, vec![]).unwrap();

    // The id is live, but it does not name a graph.
    let err = client.graph_get_by_id(node.id()).unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// NAME UNIQUENESS
// ============================================================================

#[test]
fn test_duplicate_name_within_kind_rejected() {
    let client = client();
    client.node_create("taken", None, vec![]).unwrap();

    let err = client.node_create("taken", None, vec![]).unwrap_err();
    assert!(err.is_already_exists());
}

#[test]
fn test_same_name_across_kinds_is_allowed() {
    let client = client();

    let node = client.node_create("shared-name", None, vec![]).unwrap();
    let graph = client.graph_create("shared-name", None, vec![]).unwrap();
    let structure = client.structure_create("shared-name", None, vec![]).unwrap();
    let lineage_edge = client.lineage_edge_create("shared-name", None, vec![]).unwrap();
    let lineage_graph = client.lineage_graph_create("shared-name", None, vec![]).unwrap();
    let edge = client
        .edge_create("shared-name", None, vec![], node.id(), node.id())
        .unwrap();

    // Six distinct items, one name.
    let ids = [
        node.id(),
        graph.id(),
        structure.id(),
        lineage_edge.id(),
        lineage_graph.id(),
        edge.id(),
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in ids.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }

    assert_eq!(client.node_get("shared-name").unwrap().id(), node.id());
    assert_eq!(client.graph_get("shared-name").unwrap().id(), graph.id());
}

#[test]
fn test_failed_duplicate_leaves_original_intact() {
    let client = client();
    let original = client
        .node_create("keep-me", Some("src:original"), vec![])
        .unwrap();

    let _ = client.node_create("keep-me", Some("src:imposter"), vec![]);

    let fetched = client.node_get("keep-me").unwrap();
    assert_eq!(fetched.id(), original.id());
    assert_eq!(fetched.item().source_key(), Some("src:original"));
}

// ============================================================================
// INPUT VALIDATION
// ============================================================================

#[test]
fn test_empty_name_is_invalid() {
    let client = client();
    let err = client.node_create("", None, vec![]).unwrap_err();
    assert!(matches!(err, lode::Error::InvalidArgument(_)));
}

#[test]
fn test_duplicate_tag_keys_are_invalid() {
    let client = client();
    let err = client
        .node_create(
            "tagged",
            None,
            vec![Tag::new("owner", "a"), Tag::new("owner", "b")],
        )
        .unwrap_err();
    assert!(matches!(err, lode::Error::InvalidArgument(_)));
}

#[test]
fn test_unique_names_create_unique_ids() {
    let client = client();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        let node = client.node_create(&unique_name("n"), None, vec![]).unwrap();
        assert!(seen.insert(node.id()));
    }
}
