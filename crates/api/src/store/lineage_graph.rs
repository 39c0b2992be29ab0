//! Lineage graph store operations

use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{LineageGraph, LineageGraphVersion};
use lode_core::tag::Tag;
use lode_core::types::{ItemId, VersionId};
use lode_core::Result;
use lode_engine::VersionSpec;

/// Lineage graph store operations
///
/// A lineage graph collects lineage edge versions, bundling a set of
/// derivations into one citable snapshot such as the full provenance
/// of a pipeline run.
///
/// ## Contract
///
/// - Names are unique within the kind; lookups are by name or item id
/// - Every member of a lineage graph version must be an existing
///   lineage edge version
/// - Writes are atomic: a failed call leaves no partial rows behind
///
/// ## Error Handling
///
/// | Condition | Error |
/// |-----------|-------|
/// | Name already taken within the kind | `AlreadyExists` |
/// | Unknown name, id, member, or parent version | `NotFound` |
/// | Member exists but is not a lineage edge version | `InvalidArgument` |
/// | Tags violate a bound structure schema | `SchemaViolation` |
pub trait LineageGraphStore {
    /// Create a lineage graph
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: a lineage graph with this name exists
    /// - `InvalidArgument`: empty or oversized name, malformed tags
    fn lineage_graph_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<LineageGraph>;

    /// Retrieve a lineage graph by name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage graph with this name
    fn lineage_graph_get(&self, name: &str) -> Result<LineageGraph>;

    /// Retrieve a lineage graph by item id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage graph with this id
    fn lineage_graph_get_by_id(&self, id: ItemId) -> Result<LineageGraph>;

    /// Create a new version of the named lineage graph
    ///
    /// ## Semantics
    ///
    /// - `lineage_edge_version_ids` may be empty
    ///
    /// ## Errors
    ///
    /// - `NotFound`: unknown lineage graph, member, parent, or structure
    /// - `InvalidArgument`: a member is not a lineage edge version, or
    ///   the member list exceeds the collection limit
    /// - `SchemaViolation`: tags do not conform to the bound schema
    fn lineage_graph_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        lineage_edge_version_ids: Vec<VersionId>,
        parent_ids: &[VersionId],
    ) -> Result<LineageGraphVersion>;

    /// Retrieve a lineage graph version by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage graph version with this id
    fn lineage_graph_version(&self, id: VersionId) -> Result<LineageGraphVersion>;

    /// The current version leaves of the named lineage graph, ascending by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage graph with this name
    fn lineage_graph_leaves(&self, name: &str) -> Result<Vec<VersionId>>;

    /// The full version history DAG of the named lineage graph
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage graph with this name
    fn lineage_graph_history(&self, name: &str) -> Result<VersionHistoryDag>;
}

// =============================================================================
// Implementation
// =============================================================================

use super::impl_::CatalogClient;

impl LineageGraphStore for CatalogClient {
    fn lineage_graph_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<LineageGraph> {
        self.lineage_graphs().create(name, source_key, tags)
    }

    fn lineage_graph_get(&self, name: &str) -> Result<LineageGraph> {
        self.lineage_graphs().get(name)
    }

    fn lineage_graph_get_by_id(&self, id: ItemId) -> Result<LineageGraph> {
        self.lineage_graphs().get_by_id(id)
    }

    fn lineage_graph_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        lineage_edge_version_ids: Vec<VersionId>,
        parent_ids: &[VersionId],
    ) -> Result<LineageGraphVersion> {
        self.lineage_graphs()
            .create_version(name, spec, lineage_edge_version_ids, parent_ids)
    }

    fn lineage_graph_version(&self, id: VersionId) -> Result<LineageGraphVersion> {
        self.lineage_graphs().version(id)
    }

    fn lineage_graph_leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        self.lineage_graphs().leaves(name)
    }

    fn lineage_graph_history(&self, name: &str) -> Result<VersionHistoryDag> {
        self.lineage_graphs().history(name)
    }
}
