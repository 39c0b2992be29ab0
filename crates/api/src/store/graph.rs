//! Graph store operations

use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{Graph, GraphVersion};
use lode_core::tag::Tag;
use lode_core::types::{ItemId, VersionId};
use lode_core::Result;
use lode_engine::VersionSpec;

/// Graph store operations
///
/// A graph collects edge versions. Each graph version pins a set of edge
/// versions, so two versions of one graph can hold entirely different
/// edge sets.
///
/// ## Contract
///
/// - Names are unique within the kind; lookups are by name or item id
/// - Every member of a graph version must be an existing edge version
/// - Writes are atomic: a failed call leaves no partial rows behind
///
/// ## Error Handling
///
/// | Condition | Error |
/// |-----------|-------|
/// | Name already taken within the kind | `AlreadyExists` |
/// | Unknown name, id, member, or parent version | `NotFound` |
/// | Member exists but is not an edge version | `InvalidArgument` |
/// | Tags violate a bound structure schema | `SchemaViolation` |
pub trait GraphStore {
    /// Create a graph
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: a graph with this name exists
    /// - `InvalidArgument`: empty or oversized name, malformed tags
    fn graph_create(&self, name: &str, source_key: Option<&str>, tags: Vec<Tag>) -> Result<Graph>;

    /// Retrieve a graph by name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no graph with this name
    fn graph_get(&self, name: &str) -> Result<Graph>;

    /// Retrieve a graph by item id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no graph with this id
    fn graph_get_by_id(&self, id: ItemId) -> Result<Graph>;

    /// Create a new version of the named graph
    ///
    /// ## Semantics
    ///
    /// - `edge_version_ids` may be empty: an empty graph version is a
    ///   legitimate snapshot
    /// - Duplicate members are kept as given; the list is not deduped
    ///
    /// ## Errors
    ///
    /// - `NotFound`: unknown graph, member version, parent, or structure
    /// - `InvalidArgument`: a member is not an edge version, or the
    ///   member list exceeds the collection limit
    /// - `SchemaViolation`: tags do not conform to the bound schema
    fn graph_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        edge_version_ids: Vec<VersionId>,
        parent_ids: &[VersionId],
    ) -> Result<GraphVersion>;

    /// Retrieve a graph version by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no graph version with this id
    fn graph_version(&self, id: VersionId) -> Result<GraphVersion>;

    /// The current version leaves of the named graph, ascending by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no graph with this name
    fn graph_leaves(&self, name: &str) -> Result<Vec<VersionId>>;

    /// The full version history DAG of the named graph
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no graph with this name
    fn graph_history(&self, name: &str) -> Result<VersionHistoryDag>;
}

// =============================================================================
// Implementation
// =============================================================================

use super::impl_::CatalogClient;

impl GraphStore for CatalogClient {
    fn graph_create(&self, name: &str, source_key: Option<&str>, tags: Vec<Tag>) -> Result<Graph> {
        self.graphs().create(name, source_key, tags)
    }

    fn graph_get(&self, name: &str) -> Result<Graph> {
        self.graphs().get(name)
    }

    fn graph_get_by_id(&self, id: ItemId) -> Result<Graph> {
        self.graphs().get_by_id(id)
    }

    fn graph_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        edge_version_ids: Vec<VersionId>,
        parent_ids: &[VersionId],
    ) -> Result<GraphVersion> {
        self.graphs().create_version(name, spec, edge_version_ids, parent_ids)
    }

    fn graph_version(&self, id: VersionId) -> Result<GraphVersion> {
        self.graphs().version(id)
    }

    fn graph_leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        self.graphs().leaves(name)
    }

    fn graph_history(&self, name: &str) -> Result<VersionHistoryDag> {
        self.graphs().history(name)
    }
}
