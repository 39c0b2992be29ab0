//! Structure schema validation tests
//!
//! A version binding a structure version gets its tags checked against the
//! declared attributes before anything is written. These tests drive the
//! check through node versions; the same path runs for every kind.

use super::test_utils::*;
use lode::{CatalogClient, NodeStore, StructureStore, Tag, ValueType, VersionId, VersionSpec};
use std::collections::BTreeMap;

/// Declare a structure version with `owner: string` and `rows: int`.
fn dataset_schema(client: &CatalogClient) -> VersionId {
    client.structure_create("dataset-schema", None, vec![]).unwrap();
    let mut attributes = BTreeMap::new();
    attributes.insert("owner".to_string(), ValueType::String);
    attributes.insert("rows".to_string(), ValueType::Int);
    client
        .structure_create_version("dataset-schema", VersionSpec::new(), attributes, &[])
        .unwrap()
        .rich()
        .id()
}

// ============================================================================
// CONFORMING TAGS
// ============================================================================

#[test]
fn test_all_declared_attributes_accepted() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::new("owner", "data-eng"))
        .with_tag(Tag::new("rows", 1_204_991i64))
        .with_structure(schema);
    let version = client.node_create_version("users", spec, &[]).unwrap();
    assert_eq!(version.rich().structure_version_id(), Some(schema));
}

#[test]
fn test_subset_of_declared_attributes_accepted() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    // Declared attributes an item does not use may simply be absent.
    let spec = VersionSpec::new()
        .with_tag(Tag::new("owner", "data-eng"))
        .with_structure(schema);
    assert!(client.node_create_version("users", spec, &[]).is_ok());
}

#[test]
fn test_unbound_version_is_never_checked() {
    let client = client();
    dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    // No structure bound: any tags go.
    let spec = VersionSpec::new().with_tag(Tag::new("anything", 1.5f64));
    assert!(client.node_create_version("users", spec, &[]).is_ok());
}

// ============================================================================
// VIOLATIONS
// ============================================================================

#[test]
fn test_wrong_typed_tag_rejected() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::new("rows", "lots"))
        .with_structure(schema);
    let err = client.node_create_version("users", spec, &[]).unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn test_undeclared_key_rejected() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::new("owner", "data-eng"))
        .with_tag(Tag::new("surprise", true))
        .with_structure(schema);
    let err = client.node_create_version("users", spec, &[]).unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn test_empty_tag_map_rejected() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new().with_structure(schema);
    let err = client.node_create_version("users", spec, &[]).unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn test_valueless_tag_rejected() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::label("owner"))
        .with_structure(schema);
    let err = client.node_create_version("users", spec, &[]).unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn test_violation_writes_nothing() {
    let client = client();
    let schema = dataset_schema(&client);
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::new("rows", "lots"))
        .with_structure(schema);
    let _ = client.node_create_version("users", spec, &[]);

    assert!(client.node_leaves("users").unwrap().is_empty());
    assert!(client.node_history("users").unwrap().is_empty());
}

// ============================================================================
// BINDING ERRORS
// ============================================================================

#[test]
fn test_missing_structure_version_is_not_found() {
    let client = client();
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::new("owner", "data-eng"))
        .with_structure(VersionId::new(9_999));
    let err = client.node_create_version("users", spec, &[]).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_binding_a_non_structure_version_is_invalid() {
    let client = client();
    client.node_create("not-a-schema", None, vec![]).unwrap();
    let node_version = client
        .node_create_version("not-a-schema", VersionSpec::new(), &[])
        .unwrap()
        .rich()
        .id();
    client.node_create("users", None, vec![]).unwrap();

    let spec = VersionSpec::new()
        .with_tag(Tag::new("owner", "data-eng"))
        .with_structure(node_version);
    let err = client.node_create_version("users", spec, &[]).unwrap_err();
    assert!(matches!(err, lode::Error::InvalidArgument(_)));
}

// ============================================================================
// SCHEMA EVOLUTION
// ============================================================================

#[test]
fn test_new_structure_version_changes_the_contract() {
    let client = client();
    let v1 = dataset_schema(&client);

    // Second structure version drops `rows` and adds `retention_days`.
    let mut attributes = BTreeMap::new();
    attributes.insert("owner".to_string(), ValueType::String);
    attributes.insert("retention_days".to_string(), ValueType::Int);
    let v2 = client
        .structure_create_version("dataset-schema", VersionSpec::new(), attributes, &[])
        .unwrap()
        .rich()
        .id();

    client.node_create("users", None, vec![]).unwrap();

    // `rows` conforms to v1 but not to v2.
    let rows_tag = || VersionSpec::new().with_tag(Tag::new("rows", 5i64));
    assert!(client
        .node_create_version("users", rows_tag().with_structure(v1), &[])
        .is_ok());
    let err = client
        .node_create_version("users", rows_tag().with_structure(v2), &[])
        .unwrap_err();
    assert!(err.is_schema_violation());

    // `retention_days` conforms to v2 only.
    let retention_tag = || VersionSpec::new().with_tag(Tag::new("retention_days", 90i64));
    assert!(client
        .node_create_version("users", retention_tag().with_structure(v2), &[])
        .is_ok());
}
