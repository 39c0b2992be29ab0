//! Referential integrity tests
//!
//! Cross-entity references are checked at write time: endpoints and
//! members must exist, and most must have the right kind. Missing
//! references are `NotFound`; wrong-kind references are `InvalidArgument`.
//! The checks can be switched off for trusted bulk imports.

use super::test_utils::*;
use lode::{
    Catalog, CatalogClient, CatalogConfig, EdgeStore, Error, GraphStore, ItemId, LineageEdgeStore,
    LineageGraphStore, NodeStore, StructureStore, VersionId, VersionSpec,
};
use lode_storage::MemoryBackend;
use std::sync::Arc;

// ============================================================================
// EDGE ENDPOINTS
// ============================================================================

#[test]
fn test_edge_endpoints_must_exist() {
    let client = client();
    let node = client.node_create("real", None, vec![]).unwrap();

    let err = client
        .edge_create("dangling", None, vec![], node.id(), ItemId::new(9_999))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(client.edge_get("dangling").is_err());
}

#[test]
fn test_edge_endpoints_must_be_nodes() {
    let client = client();
    let node = client.node_create("a-node", None, vec![]).unwrap();
    let graph = client.graph_create("a-graph", None, vec![]).unwrap();

    let err = client
        .edge_create("wrong-kind", None, vec![], node.id(), graph.id())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_edge_version_endpoints_must_be_node_versions() {
    let client = client();
    let from = client.node_create("from", None, vec![]).unwrap();
    let to = client.node_create("to", None, vec![]).unwrap();
    let from_v = client.node_create_version("from", VersionSpec::new(), &[]).unwrap();
    client
        .edge_create("connects", None, vec![], from.id(), to.id())
        .unwrap();

    // Missing endpoint version.
    let err = client
        .edge_create_version(
            "connects",
            VersionSpec::new(),
            from_v.rich().id(),
            VersionId::new(9_999),
            &[],
        )
        .unwrap_err();
    assert!(err.is_not_found());

    // Wrong-kind endpoint version.
    client.structure_create("schema", None, vec![]).unwrap();
    let sv = client
        .structure_create_version("schema", VersionSpec::new(), Default::default(), &[])
        .unwrap();
    let err = client
        .edge_create_version(
            "connects",
            VersionSpec::new(),
            from_v.rich().id(),
            sv.rich().id(),
            &[],
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_self_loop_edge_is_allowed() {
    let client = client();
    let node = client.node_create("reflexive", None, vec![]).unwrap();
    let v = client.node_create_version("reflexive", VersionSpec::new(), &[]).unwrap();

    client
        .edge_create("self-loop", None, vec![], node.id(), node.id())
        .unwrap();
    let ev = client
        .edge_create_version(
            "self-loop",
            VersionSpec::new(),
            v.rich().id(),
            v.rich().id(),
            &[],
        )
        .unwrap();
    assert_eq!(ev.from_node_version_id(), ev.to_node_version_id());
}

// ============================================================================
// GRAPH MEMBERS
// ============================================================================

#[test]
fn test_graph_members_must_be_edge_versions() {
    let client = client();
    client.node_create("n", None, vec![]).unwrap();
    let nv = client.node_create_version("n", VersionSpec::new(), &[]).unwrap();
    client.graph_create("g", None, vec![]).unwrap();

    // A node version is not an edge version.
    let err = client
        .graph_create_version("g", VersionSpec::new(), vec![nv.rich().id()], &[])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    // A missing version is not found.
    let err = client
        .graph_create_version("g", VersionSpec::new(), vec![VersionId::new(9_999)], &[])
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_empty_graph_version_is_allowed() {
    let client = client();
    client.graph_create("empty", None, vec![]).unwrap();
    let gv = client
        .graph_create_version("empty", VersionSpec::new(), vec![], &[])
        .unwrap();
    assert!(gv.edge_version_ids().is_empty());
}

// ============================================================================
// LINEAGE REFERENCES
// ============================================================================

#[test]
fn test_lineage_edge_endpoints_may_be_any_kind() {
    let client = client();
    client.node_create("dataset", None, vec![]).unwrap();
    let nv = client.node_create_version("dataset", VersionSpec::new(), &[]).unwrap();
    client.structure_create("schema", None, vec![]).unwrap();
    let sv = client
        .structure_create_version("schema", VersionSpec::new(), Default::default(), &[])
        .unwrap();

    // A node version derived from a structure version is legitimate lineage.
    client.lineage_edge_create("derived", None, vec![]).unwrap();
    let lev = client
        .lineage_edge_create_version(
            "derived",
            VersionSpec::new(),
            sv.rich().id(),
            nv.rich().id(),
            &[],
        )
        .unwrap();
    assert_eq!(lev.from_rich_version_id(), sv.rich().id());
}

#[test]
fn test_lineage_edge_endpoints_must_exist() {
    let client = client();
    client.node_create("dataset", None, vec![]).unwrap();
    let nv = client.node_create_version("dataset", VersionSpec::new(), &[]).unwrap();

    client.lineage_edge_create("dangling", None, vec![]).unwrap();
    let err = client
        .lineage_edge_create_version(
            "dangling",
            VersionSpec::new(),
            nv.rich().id(),
            VersionId::new(9_999),
            &[],
        )
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_lineage_graph_members_must_be_lineage_edge_versions() {
    let client = client();
    client.node_create("n", None, vec![]).unwrap();
    let nv = client.node_create_version("n", VersionSpec::new(), &[]).unwrap();
    client.lineage_graph_create("run", None, vec![]).unwrap();

    let err = client
        .lineage_graph_create_version("run", VersionSpec::new(), vec![nv.rich().id()], &[])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

// ============================================================================
// DISABLING THE CHECKS
// ============================================================================

#[test]
fn test_disabled_checks_admit_dangling_references() {
    let config = CatalogConfig {
        backend: "memory".to_string(),
        reference_checks: false,
    };
    let catalog = Catalog::with_backend(Arc::new(MemoryBackend::new()), config).unwrap();
    let client = CatalogClient::new(catalog);

    // Bulk-import style: endpoints that were never written.
    client
        .edge_create("trusted", None, vec![], ItemId::new(777), ItemId::new(778))
        .unwrap();
    let ev = client
        .edge_create_version(
            "trusted",
            VersionSpec::new(),
            VersionId::new(901),
            VersionId::new(902),
            &[],
        )
        .unwrap();
    assert_eq!(ev.from_node_version_id(), VersionId::new(901));
}
