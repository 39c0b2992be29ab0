//! Node store operations
//!
//! Nodes are the plainest entity kind: a named item whose versions carry
//! only the shared rich-version payload. This trait is the template the
//! other five kind traits follow; they add payload fields and referential
//! checks but keep the same operation set.

use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{Node, NodeVersion};
use lode_core::tag::Tag;
use lode_core::types::{ItemId, VersionId};
use lode_core::Result;
use lode_engine::VersionSpec;

/// Node store operations
///
/// ## Contract
///
/// - Names are unique within the kind; lookups are by name or item id
/// - Versions are immutable once written; history only grows
/// - Writes are atomic: a failed call leaves no partial rows behind
///
/// ## Error Handling
///
/// | Condition | Error |
/// |-----------|-------|
/// | Name already taken within the kind | `AlreadyExists` |
/// | Unknown name, id, or parent version | `NotFound` |
/// | Empty name, oversized input, duplicate tag keys | `InvalidArgument` |
/// | Tags violate a bound structure schema | `SchemaViolation` |
pub trait NodeStore {
    /// Create a node
    ///
    /// ## Semantics
    ///
    /// - The name must be unused within the node kind
    /// - `source_key` is an optional external identifier, not indexed
    /// - Item tags describe the node itself, not any version of it
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: a node with this name exists
    /// - `InvalidArgument`: empty or oversized name, malformed tags
    fn node_create(&self, name: &str, source_key: Option<&str>, tags: Vec<Tag>) -> Result<Node>;

    /// Retrieve a node by name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no node with this name
    fn node_get(&self, name: &str) -> Result<Node>;

    /// Retrieve a node by item id
    ///
    /// An id naming an item of another kind is `NotFound`, same as an
    /// unassigned id.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no node with this id
    fn node_get_by_id(&self, id: ItemId) -> Result<Node>;

    /// Create a new version of the named node
    ///
    /// ## Semantics
    ///
    /// - Explicit `parent_ids` must already be versions of this node
    /// - Empty `parent_ids` appends to the current state: the new version
    ///   succeeds every current leaf, or becomes the first version
    /// - When `spec` binds a structure version, the spec's tags are
    ///   validated against that schema before anything is written
    ///
    /// ## Errors
    ///
    /// - `NotFound`: unknown node, parent version, or structure version
    /// - `SchemaViolation`: tags do not conform to the bound schema
    /// - `InvalidArgument`: malformed tags or oversized reference
    fn node_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        parent_ids: &[VersionId],
    ) -> Result<NodeVersion>;

    /// Retrieve a node version by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no node version with this id
    fn node_version(&self, id: VersionId) -> Result<NodeVersion>;

    /// The current version leaves of the named node, ascending by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no node with this name
    fn node_leaves(&self, name: &str) -> Result<Vec<VersionId>>;

    /// The full version history DAG of the named node
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no node with this name
    fn node_history(&self, name: &str) -> Result<VersionHistoryDag>;
}

// =============================================================================
// Implementation
// =============================================================================

use super::impl_::CatalogClient;

impl NodeStore for CatalogClient {
    fn node_create(&self, name: &str, source_key: Option<&str>, tags: Vec<Tag>) -> Result<Node> {
        self.nodes().create(name, source_key, tags)
    }

    fn node_get(&self, name: &str) -> Result<Node> {
        self.nodes().get(name)
    }

    fn node_get_by_id(&self, id: ItemId) -> Result<Node> {
        self.nodes().get_by_id(id)
    }

    fn node_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        parent_ids: &[VersionId],
    ) -> Result<NodeVersion> {
        self.nodes().create_version(name, spec, parent_ids)
    }

    fn node_version(&self, id: VersionId) -> Result<NodeVersion> {
        self.nodes().version(id)
    }

    fn node_leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        self.nodes().leaves(name)
    }

    fn node_history(&self, name: &str) -> Result<VersionHistoryDag> {
        self.nodes().history(name)
    }
}
