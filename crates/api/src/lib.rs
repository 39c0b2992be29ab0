//! Public API layer for the catalog
//!
//! This crate provides the public interface to the metadata catalog:
//! - **Store API**: one trait per entity kind, kind-prefixed method names
//! - **CatalogClient**: the concrete implementation wrapping a catalog
//!
//! ## One Surface Per Kind
//!
//! Each entity kind gets its own trait with the same operation shape:
//! create, get by name or id, create-version, version lookup, leaves, and
//! history. Kinds with payloads (edge endpoints, graph members, structure
//! attributes) extend the shape with their extra arguments; nothing else
//! differs between kinds.
//!
//! ## Architectural Invariant
//!
//! Every trait method **desugars to exactly one engine call**. The client
//! adds no behavior of its own: validation, locking, and persistence all
//! happen below it.
//!
//! ## Module Structure
//!
//! - `store`: kind traits and the `CatalogClient` implementation
//!
//! ## Quick Start
//!
//! ```ignore
//! use lode_api::store::{CatalogClient, NodeStore};
//! use lode_engine::VersionSpec;
//!
//! let client = CatalogClient::open("/path/to/data")?;
//!
//! // Register a dataset and record its first version
//! client.node_create("datasets/users", None, vec![])?;
//! let version = client.node_create_version("datasets/users", VersionSpec::new(), &[])?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

// Re-export store types at crate root for convenience
pub use store::{
    // Implementation
    CatalogClient,
    // Kind traits
    EdgeStore, GraphStore, LineageEdgeStore, LineageGraphStore, NodeStore, StructureStore,
};
