//! Version history DAG tests
//!
//! How an item's history grows: chains, forks, merges, empty-parent
//! appends, and the leaf set after each. The canonical shape used below:
//!
//! ```text
//!   v1 -> v2 -> v3
//!          \
//!           -> v4
//! ```
//!
//! with leaves {v3, v4}, closed by a merge version v5 with parents
//! [v3, v4].

use super::test_utils::*;
use lode::{NodeStore, VersionId, VersionSpec};

/// Build the canonical fork: v1 -> v2 -> {v3, v4}. Returns [v1, v2, v3, v4].
fn forked_node(client: &lode::CatalogClient, name: &str) -> Vec<VersionId> {
    let chain = node_with_chain(client, name, 2);
    let (v1, v2) = (chain[0], chain[1]);
    let v3 = client
        .node_create_version(name, VersionSpec::new(), &[v2])
        .unwrap()
        .rich()
        .id();
    let v4 = client
        .node_create_version(name, VersionSpec::new(), &[v2])
        .unwrap()
        .rich()
        .id();
    vec![v1, v2, v3, v4]
}

// ============================================================================
// LINEAR GROWTH
// ============================================================================

#[test]
fn test_first_version_is_sole_leaf() {
    let client = client();
    let versions = node_with_chain(&client, "first", 1);

    assert_eq!(client.node_leaves("first").unwrap(), versions);
    let history = client.node_history("first").unwrap();
    assert!(history.parents_of(versions[0]).is_empty());
}

#[test]
fn test_empty_parents_chain_onto_current_leaf() {
    let client = client();
    let versions = node_with_chain(&client, "chain", 3);

    assert_eq!(client.node_leaves("chain").unwrap(), vec![versions[2]]);
    let history = client.node_history("chain").unwrap();
    assert_eq!(history.parents_of(versions[1]), vec![versions[0]]);
    assert_eq!(history.parents_of(versions[2]), vec![versions[1]]);
}

#[test]
fn test_version_ids_ascend_with_creation_order() {
    let client = client();
    let versions = node_with_chain(&client, "ordered", 5);

    for pair in versions.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

// ============================================================================
// FORKS AND MERGES
// ============================================================================

#[test]
fn test_fork_produces_two_leaves() {
    let client = client();
    let v = forked_node(&client, "fork");

    let mut expected = vec![v[2], v[3]];
    expected.sort();
    assert_eq!(client.node_leaves("fork").unwrap(), expected);
}

#[test]
fn test_merge_version_closes_the_fork() {
    let client = client();
    let v = forked_node(&client, "merge");

    let v5 = client
        .node_create_version("merge", VersionSpec::new(), &[v[2], v[3]])
        .unwrap()
        .rich()
        .id();

    assert_eq!(client.node_leaves("merge").unwrap(), vec![v5]);
    let history = client.node_history("merge").unwrap();
    let mut parents = history.parents_of(v5);
    parents.sort();
    let mut expected = vec![v[2], v[3]];
    expected.sort();
    assert_eq!(parents, expected);
}

#[test]
fn test_empty_parents_succeed_every_leaf() {
    let client = client();
    let v = forked_node(&client, "auto-merge");

    // No explicit parents: the new version succeeds both current leaves.
    let v5 = client
        .node_create_version("auto-merge", VersionSpec::new(), &[])
        .unwrap()
        .rich()
        .id();

    assert_eq!(client.node_leaves("auto-merge").unwrap(), vec![v5]);
    let history = client.node_history("auto-merge").unwrap();
    let mut parents = history.parents_of(v5);
    parents.sort();
    let mut expected = vec![v[2], v[3]];
    expected.sort();
    assert_eq!(parents, expected);
}

#[test]
fn test_duplicate_parent_ids_collapse() {
    let client = client();
    let versions = node_with_chain(&client, "dup-parents", 1);

    let v2 = client
        .node_create_version("dup-parents", VersionSpec::new(), &[versions[0], versions[0]])
        .unwrap()
        .rich()
        .id();

    let history = client.node_history("dup-parents").unwrap();
    assert_eq!(history.parents_of(v2), vec![versions[0]]);
}

// ============================================================================
// REJECTED PARENTS
// ============================================================================

#[test]
fn test_parent_from_another_item_rejected() {
    let client = client();
    let other = node_with_chain(&client, "other", 1);
    node_with_chain(&client, "target", 1);

    let err = client
        .node_create_version("target", VersionSpec::new(), &[other[0]])
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_unknown_parent_writes_nothing() {
    let client = client();
    let versions = node_with_chain(&client, "stable", 2);

    let before = client.node_history("stable").unwrap();
    let err = client
        .node_create_version("stable", VersionSpec::new(), &[VersionId::new(9_999)])
        .unwrap_err();
    assert!(err.is_not_found());

    // History is exactly as it was.
    let after = client.node_history("stable").unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after.edges().len(), before.edges().len());
    assert_eq!(client.node_leaves("stable").unwrap(), vec![versions[1]]);
}

#[test]
fn test_histories_of_items_are_disjoint() {
    let client = client();
    let a = node_with_chain(&client, "item-a", 3);
    let b = node_with_chain(&client, "item-b", 2);

    let history_a = client.node_history("item-a").unwrap();
    let history_b = client.node_history("item-b").unwrap();
    assert_eq!(history_a.len(), 3);
    assert_eq!(history_b.len(), 2);
    for id in &a {
        assert!(!history_b.contains(*id));
    }
    for id in &b {
        assert!(!history_a.contains(*id));
    }
}
