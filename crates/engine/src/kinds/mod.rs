//! Kind-specific catalog surfaces
//!
//! One handle per entity kind. Each handle resolves names within its kind,
//! narrows sum-typed rows to its record types, and runs the kind's
//! referential checks before delegating to the generic item and version
//! flows on [`Catalog`](crate::catalog::Catalog).
//!
//! Referential checks validate existence and kind of what a payload points
//! at (an edge's endpoint must be a node, a graph version's members must be
//! edge versions). They do not validate ownership: an edge version may pin
//! any node version, not only versions of its declared endpoint nodes.
//! Checks can be switched off via `reference_checks = false` in `lode.toml`
//! for bulk imports.

mod edges;
mod graphs;
mod lineage_edges;
mod lineage_graphs;
mod nodes;
mod structures;

pub use edges::Edges;
pub use graphs::Graphs;
pub use lineage_edges::LineageEdges;
pub use lineage_graphs::LineageGraphs;
pub use nodes::Nodes;
pub use structures::Structures;
