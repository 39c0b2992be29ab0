//! Catalog store implementation
//!
//! This module provides the concrete implementation of all store traits.
//! `CatalogClient` wraps the catalog and its kind handles, providing the
//! canonical API surface for applications.
//!
//! ## Design
//!
//! `CatalogClient` is a thin boundary: every trait method delegates to the
//! matching kind handle, so the client adds naming discipline (kind-prefixed
//! methods, one flat surface) without adding behavior. All validation and
//! locking live below it in the engine.
//!
//! ## Usage
//!
//! ```ignore
//! use lode_api::store::{CatalogClient, NodeStore};
//!
//! let client = CatalogClient::open("/path/to/data")?;
//! let node = client.node_create("datasets/users", None, vec![])?;
//! let version = client.node_create_version("datasets/users", VersionSpec::new(), &[])?;
//! ```

use std::path::Path;
use std::sync::Arc;

use lode_core::Result;
use lode_engine::{Catalog, Edges, Graphs, LineageEdges, LineageGraphs, Nodes, Structures};

// =============================================================================
// CatalogClient
// =============================================================================

/// Catalog store implementation
///
/// This struct provides the concrete implementation of all store traits.
/// It wraps the catalog and holds one handle per entity kind.
///
/// ## Thread Safety
///
/// `CatalogClient` is `Send + Sync` and can be safely shared across threads.
/// Multiple clients on the same catalog are safe; clones share the catalog.
///
/// ## Stateless Design
///
/// `CatalogClient` holds no mutable state. All state lives in the catalog,
/// which makes cloning cheap and concurrent use simple.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    /// The underlying catalog
    catalog: Arc<Catalog>,
    /// Node handle
    nodes: Nodes,
    /// Edge handle
    edges: Edges,
    /// Graph handle
    graphs: Graphs,
    /// Structure handle
    structures: Structures,
    /// Lineage edge handle
    lineage_edges: LineageEdges,
    /// Lineage graph handle
    lineage_graphs: LineageGraphs,
}

impl CatalogClient {
    /// Create a new client wrapping the given catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            nodes: catalog.nodes(),
            edges: catalog.edges(),
            graphs: catalog.graphs(),
            structures: catalog.structures(),
            lineage_edges: catalog.lineage_edges(),
            lineage_graphs: catalog.lineage_graphs(),
            catalog,
        }
    }

    /// Open the catalog at `path` and wrap it in a client
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Catalog::open(path)?))
    }

    /// Create a client over a fresh in-memory catalog
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Catalog::in_memory()?))
    }

    /// Get the underlying catalog reference
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // =========================================================================
    // Accessor methods for use by trait implementations in other files
    // =========================================================================

    /// Get the node handle
    pub(crate) fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// Get the edge handle
    pub(crate) fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Get the graph handle
    pub(crate) fn graphs(&self) -> &Graphs {
        &self.graphs
    }

    /// Get the structure handle
    pub(crate) fn structures(&self) -> &Structures {
        &self.structures
    }

    /// Get the lineage edge handle
    pub(crate) fn lineage_edges(&self) -> &LineageEdges {
        &self.lineage_edges
    }

    /// Get the lineage graph handle
    pub(crate) fn lineage_graphs(&self) -> &LineageGraphs {
        &self.lineage_graphs
    }
}

// =============================================================================
// Tests
// =============================================================================
