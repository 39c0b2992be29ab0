//! Catalog engine for lode
//!
//! This crate orchestrates the layers below it:
//! - Catalog: the main struct with open/config logic
//! - Id allocation: one monotonic space for items, versions, successors
//! - Per-item locks: serializing version creation per item
//! - Kind handles: the typed surfaces for the six entity kinds
//!
//! The engine is the only component that knows about:
//! - Parent selection and DAG update planning
//! - Structure schema enforcement
//! - Cross-entity referential checks

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod id_gen;
pub mod kinds;
pub mod locks;
pub mod schema;

pub use catalog::{BackendKind, Catalog, CatalogConfig, VersionSpec, CONFIG_FILE_NAME};
pub use kinds::{Edges, Graphs, LineageEdges, LineageGraphs, Nodes, Structures};
