//! Lode - Versioned metadata catalog for data provenance
//!
//! Lode tracks the things a data platform knows about: datasets, the
//! connections between them, schemas, and derivation lineage. Every entity
//! is versioned in an append-only history DAG, so the catalog answers not
//! just "what is this dataset" but "what was it, and where did it come
//! from".
//!
//! # Quick Start
//!
//! ```ignore
//! use lode::{CatalogClient, NodeStore, VersionSpec, Tag};
//!
//! // Open (or create) a catalog on disk
//! let catalog = CatalogClient::open("/var/lib/lode")?;
//!
//! // Register a dataset
//! catalog.node_create("datasets/users", Some("hive:users"), vec![])?;
//!
//! // Record a new snapshot of it
//! let version = catalog.node_create_version(
//!     "datasets/users",
//!     VersionSpec::new()
//!         .with_tag(Tag::new("rows", 1_204_991i64))
//!         .with_reference("s3://warehouse/users/2026-08-26"),
//!     &[],
//! )?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the store traits implemented by
//! [`CatalogClient`], which delegates to the engine's kind handles.
//! Internal implementation details (storage backends, locking, id
//! allocation) are not exposed - only the store API is public.

// Re-export the public API from lode-api
pub use lode_api::*;

// Re-export the types applications handle directly
pub use lode_core::dag::VersionHistoryDag;
pub use lode_core::kinds::{
    Edge, EdgeVersion, Graph, GraphVersion, LineageEdge, LineageEdgeVersion, LineageGraph,
    LineageGraphVersion, Node, NodeVersion, Structure, StructureVersion,
};
pub use lode_core::tag::{Tag, TagValue, ValueType};
pub use lode_core::types::{ItemId, VersionId};
pub use lode_core::{Error, Result};
pub use lode_engine::{Catalog, CatalogConfig, VersionSpec};
