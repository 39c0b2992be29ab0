//! Lineage edge store operations

use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{LineageEdge, LineageEdgeVersion};
use lode_core::tag::Tag;
use lode_core::types::{ItemId, VersionId};
use lode_core::Result;
use lode_engine::VersionSpec;

/// Lineage edge store operations
///
/// A lineage edge records a derivation between two versions of any
/// kind: a trained model version derived from a dataset version, or a
/// report version derived from a query version. Unlike a plain edge,
/// its endpoints are fixed per version rather than per item, and they
/// may be versions of different kinds.
///
/// ## Contract
///
/// - Names are unique within the kind; lookups are by name or item id
/// - Endpoint versions must exist but may be of any kind
/// - Writes are atomic: a failed call leaves no partial rows behind
///
/// ## Error Handling
///
/// | Condition | Error |
/// |-----------|-------|
/// | Name already taken within the kind | `AlreadyExists` |
/// | Unknown name, id, endpoint, or parent version | `NotFound` |
/// | Empty name, oversized input, duplicate tag keys | `InvalidArgument` |
/// | Tags violate a bound structure schema | `SchemaViolation` |
pub trait LineageEdgeStore {
    /// Create a lineage edge
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: a lineage edge with this name exists
    /// - `InvalidArgument`: empty or oversized name, malformed tags
    fn lineage_edge_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<LineageEdge>;

    /// Retrieve a lineage edge by name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage edge with this name
    fn lineage_edge_get(&self, name: &str) -> Result<LineageEdge>;

    /// Retrieve a lineage edge by item id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage edge with this id
    fn lineage_edge_get_by_id(&self, id: ItemId) -> Result<LineageEdge>;

    /// Create a new version of the named lineage edge
    ///
    /// ## Semantics
    ///
    /// - `from_rich_version_id` and `to_rich_version_id` must name
    ///   existing versions; any kind is acceptable, including versions
    ///   of other lineage edges
    /// - Both endpoints may be the same version
    ///
    /// ## Errors
    ///
    /// - `NotFound`: unknown lineage edge, endpoint, parent, or structure
    /// - `SchemaViolation`: tags do not conform to the bound schema
    fn lineage_edge_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        from_rich_version_id: VersionId,
        to_rich_version_id: VersionId,
        parent_ids: &[VersionId],
    ) -> Result<LineageEdgeVersion>;

    /// Retrieve a lineage edge version by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage edge version with this id
    fn lineage_edge_version(&self, id: VersionId) -> Result<LineageEdgeVersion>;

    /// The current version leaves of the named lineage edge, ascending by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage edge with this name
    fn lineage_edge_leaves(&self, name: &str) -> Result<Vec<VersionId>>;

    /// The full version history DAG of the named lineage edge
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no lineage edge with this name
    fn lineage_edge_history(&self, name: &str) -> Result<VersionHistoryDag>;
}

// =============================================================================
// Implementation
// =============================================================================

use super::impl_::CatalogClient;

impl LineageEdgeStore for CatalogClient {
    fn lineage_edge_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<LineageEdge> {
        self.lineage_edges().create(name, source_key, tags)
    }

    fn lineage_edge_get(&self, name: &str) -> Result<LineageEdge> {
        self.lineage_edges().get(name)
    }

    fn lineage_edge_get_by_id(&self, id: ItemId) -> Result<LineageEdge> {
        self.lineage_edges().get_by_id(id)
    }

    fn lineage_edge_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        from_rich_version_id: VersionId,
        to_rich_version_id: VersionId,
        parent_ids: &[VersionId],
    ) -> Result<LineageEdgeVersion> {
        self.lineage_edges().create_version(
            name,
            spec,
            from_rich_version_id,
            to_rich_version_id,
            parent_ids,
        )
    }

    fn lineage_edge_version(&self, id: VersionId) -> Result<LineageEdgeVersion> {
        self.lineage_edges().version(id)
    }

    fn lineage_edge_leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        self.lineage_edges().leaves(name)
    }

    fn lineage_edge_history(&self, name: &str) -> Result<VersionHistoryDag> {
        self.lineage_edges().history(name)
    }
}
