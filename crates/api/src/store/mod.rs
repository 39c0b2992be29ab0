//! Store API - the catalog's full surface
//!
//! The store API is the canonical semantic contract for the catalog. It
//! exposes:
//! - All six entity kinds explicitly (NodeStore, EdgeStore, GraphStore,
//!   StructureStore, LineageEdgeStore, LineageGraphStore)
//! - All versioning (create-version, leaves, history on every kind)
//! - All referential checks (endpoint and member kinds verified at write
//!   time)
//!
//! ## Design Philosophy
//!
//! The store API must:
//! - Be explicit, not friendly: kind-prefixed method names, no overloading
//! - Return typed records, never the untyped sum types
//! - Be stable: additions only, no semantic drift between kinds
//!
//! ## Module Structure
//!
//! - `node`: NodeStore operations
//! - `edge`: EdgeStore operations
//! - `graph`: GraphStore operations
//! - `structure`: StructureStore operations
//! - `lineage_edge`: LineageEdgeStore operations
//! - `lineage_graph`: LineageGraphStore operations
//!
//! ## Usage
//!
//! ```
//! use lode_api::store::{
//!     CatalogClient, EdgeStore, GraphStore, LineageEdgeStore,
//!     LineageGraphStore, NodeStore, StructureStore,
//! };
//! ```

pub mod node;
pub mod edge;
pub mod graph;
pub mod structure;
pub mod lineage_edge;
pub mod lineage_graph;
mod impl_;

// Re-export implementation
pub use impl_::CatalogClient;

// Re-export kind traits
pub use node::NodeStore;
pub use edge::EdgeStore;
pub use graph::GraphStore;
pub use structure::StructureStore;
pub use lineage_edge::LineageEdgeStore;
pub use lineage_graph::LineageGraphStore;
