//! Edge store operations

use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{Edge, EdgeVersion};
use lode_core::tag::Tag;
use lode_core::types::{ItemId, VersionId};
use lode_core::Result;
use lode_engine::VersionSpec;

/// Edge store operations
///
/// An edge is a directed connection between two nodes. The item pins the
/// node endpoints; each edge version additionally pins one version of
/// each endpoint node, recording which snapshots were connected.
///
/// ## Contract
///
/// - Names are unique within the kind; lookups are by name or item id
/// - Endpoint checks enforce both existence and kind: an edge connects
///   nodes, and an edge version connects node versions
/// - Writes are atomic: a failed call leaves no partial rows behind
///
/// ## Error Handling
///
/// | Condition | Error |
/// |-----------|-------|
/// | Name already taken within the kind | `AlreadyExists` |
/// | Unknown name, id, endpoint, or parent version | `NotFound` |
/// | Endpoint exists but has the wrong kind | `InvalidArgument` |
/// | Tags violate a bound structure schema | `SchemaViolation` |
pub trait EdgeStore {
    /// Create an edge between two nodes
    ///
    /// ## Semantics
    ///
    /// - `from_node_id` and `to_node_id` must name existing node items
    /// - Self-loops (both endpoints the same node) are allowed
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: an edge with this name exists
    /// - `NotFound`: an endpoint id is unassigned
    /// - `InvalidArgument`: an endpoint names a non-node item
    fn edge_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
        from_node_id: ItemId,
        to_node_id: ItemId,
    ) -> Result<Edge>;

    /// Retrieve an edge by name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no edge with this name
    fn edge_get(&self, name: &str) -> Result<Edge>;

    /// Retrieve an edge by item id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no edge with this id
    fn edge_get_by_id(&self, id: ItemId) -> Result<Edge>;

    /// Create a new version of the named edge
    ///
    /// ## Semantics
    ///
    /// - `from_node_version_id` and `to_node_version_id` must name
    ///   existing node versions
    /// - The endpoint versions are not required to belong to the nodes
    ///   the edge item pins; callers that want that discipline enforce
    ///   it themselves
    ///
    /// ## Errors
    ///
    /// - `NotFound`: unknown edge, endpoint version, parent, or structure
    /// - `InvalidArgument`: an endpoint version is not a node version
    /// - `SchemaViolation`: tags do not conform to the bound schema
    fn edge_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        from_node_version_id: VersionId,
        to_node_version_id: VersionId,
        parent_ids: &[VersionId],
    ) -> Result<EdgeVersion>;

    /// Retrieve an edge version by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no edge version with this id
    fn edge_version(&self, id: VersionId) -> Result<EdgeVersion>;

    /// The current version leaves of the named edge, ascending by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no edge with this name
    fn edge_leaves(&self, name: &str) -> Result<Vec<VersionId>>;

    /// The full version history DAG of the named edge
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no edge with this name
    fn edge_history(&self, name: &str) -> Result<VersionHistoryDag>;
}

// =============================================================================
// Implementation
// =============================================================================

use super::impl_::CatalogClient;

impl EdgeStore for CatalogClient {
    fn edge_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
        from_node_id: ItemId,
        to_node_id: ItemId,
    ) -> Result<Edge> {
        self.edges().create(name, source_key, tags, from_node_id, to_node_id)
    }

    fn edge_get(&self, name: &str) -> Result<Edge> {
        self.edges().get(name)
    }

    fn edge_get_by_id(&self, id: ItemId) -> Result<Edge> {
        self.edges().get_by_id(id)
    }

    fn edge_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        from_node_version_id: VersionId,
        to_node_version_id: VersionId,
        parent_ids: &[VersionId],
    ) -> Result<EdgeVersion> {
        self.edges()
            .create_version(name, spec, from_node_version_id, to_node_version_id, parent_ids)
    }

    fn edge_version(&self, id: VersionId) -> Result<EdgeVersion> {
        self.edges().version(id)
    }

    fn edge_leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        self.edges().leaves(name)
    }

    fn edge_history(&self, name: &str) -> Result<VersionHistoryDag> {
        self.edges().history(name)
    }
}
