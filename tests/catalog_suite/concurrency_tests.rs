//! Concurrency tests
//!
//! Racing writers through the public client. Writes to one item are
//! serialized by the engine, so concurrent empty-parent creates form a
//! chain with a single final leaf; writers on distinct items never block
//! each other's correctness.

use super::test_utils::*;
use lode::{NodeStore, VersionSpec};
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const WRITERS: usize = 8;
const VERSIONS_PER_WRITER: usize = 10;

// ============================================================================
// ONE ITEM, MANY WRITERS
// ============================================================================

#[test]
fn test_racing_writers_on_one_item_chain_to_one_leaf() {
    let client = Arc::new(client());
    client.node_create("contended", None, vec![]).unwrap();

    let barrier = Arc::new(Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let client = Arc::clone(&client);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..VERSIONS_PER_WRITER)
                    .map(|_| {
                        client
                            .node_create_version("contended", VersionSpec::new(), &[])
                            .unwrap()
                            .rich()
                            .id()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all_ids = Vec::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    // Every create landed with a unique id.
    let total = WRITERS * VERSIONS_PER_WRITER;
    assert_eq!(all_ids.len(), total);
    assert_eq!(all_ids.iter().collect::<HashSet<_>>().len(), total);

    // Serialized chaining: the history is one path with a single leaf.
    let leaves = client.node_leaves("contended").unwrap();
    assert_eq!(leaves.len(), 1);
    let history = client.node_history("contended").unwrap();
    assert_eq!(history.len(), total);
    assert_eq!(history.edges().len(), total - 1);
    assert_eq!(history.ancestors(leaves[0]).unwrap().len(), total);
}

#[test]
fn test_racing_name_claims_admit_exactly_one() {
    let client = Arc::new(client());
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let client = Arc::clone(&client);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                client.node_create("contested-name", None, vec![]).is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(client.node_get("contested-name").unwrap().name(), "contested-name");
}

// ============================================================================
// DISTINCT ITEMS
// ============================================================================

#[test]
fn test_racing_writers_on_distinct_items_are_independent() {
    let client = Arc::new(client());
    for writer in 0..WRITERS {
        client
            .node_create(&format!("item-{writer}"), None, vec![])
            .unwrap();
    }

    let barrier = Arc::new(Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let client = Arc::clone(&client);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let name = format!("item-{writer}");
                for _ in 0..VERSIONS_PER_WRITER {
                    client
                        .node_create_version(&name, VersionSpec::new(), &[])
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for writer in 0..WRITERS {
        let name = format!("item-{writer}");
        let history = client.node_history(&name).unwrap();
        assert_eq!(history.len(), VERSIONS_PER_WRITER);
        assert_eq!(client.node_leaves(&name).unwrap().len(), 1);
    }
}

#[test]
fn test_racing_explicit_forks_all_become_leaves() {
    let client = Arc::new(client());
    let root = node_with_chain(&client, "forked", 1)[0];

    let barrier = Arc::new(Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let client = Arc::clone(&client);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                client
                    .node_create_version("forked", VersionSpec::new(), &[root])
                    .unwrap()
                    .rich()
                    .id()
            })
        })
        .collect();

    let mut forks: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    forks.sort();

    // Every fork hangs off the root, and every fork is a leaf.
    assert_eq!(client.node_leaves("forked").unwrap(), forks);
    let history = client.node_history("forked").unwrap();
    for fork in forks {
        assert_eq!(history.parents_of(fork), vec![root]);
    }
}
