//! Nodes: the plainest kind, and the template the other handles follow.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Entity, EntityVersion, Node, NodeVersion};
use lode_core::tag::Tag;
use lode_core::types::{EntityKind, ItemId, VersionId};
use std::sync::Arc;

use crate::catalog::{Catalog, VersionSpec};

/// Handle over nodes: logical datasets or assets.
#[derive(Clone, Debug)]
pub struct Nodes {
    catalog: Arc<Catalog>,
}

impl Nodes {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        Nodes { catalog }
    }

    /// Create a node. Names are unique within the kind.
    pub fn create(&self, name: &str, source_key: Option<&str>, tags: Vec<Tag>) -> Result<Node> {
        self.catalog
            .create_entity(EntityKind::Node, name, source_key, tags, Node::new)
    }

    /// Retrieve a node by name.
    pub fn get(&self, name: &str) -> Result<Node> {
        match self.catalog.backend().item_by_name(EntityKind::Node, name)? {
            Some(Entity::Node(node)) => Ok(node),
            _ => Err(Error::not_found("node", name)),
        }
    }

    /// Retrieve a node by item id.
    ///
    /// An id naming an item of another kind resolves to `NotFound`, the
    /// same as an unassigned id: there is no such node.
    pub fn get_by_id(&self, id: ItemId) -> Result<Node> {
        match self.catalog.backend().item(id)? {
            Some(Entity::Node(node)) => Ok(node),
            _ => Err(Error::not_found("node", id)),
        }
    }

    /// Create a new version of the named node.
    ///
    /// Explicit `parent_ids` must already be versions of this node. With no
    /// parents, the new version succeeds every current leaf, or becomes the
    /// first version of an unversioned node.
    pub fn create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        parent_ids: &[VersionId],
    ) -> Result<NodeVersion> {
        let node_id = self.get(name)?.id();
        self.catalog
            .create_entity_version(node_id, spec, parent_ids, |rich| {
                NodeVersion::new(rich, node_id)
            })
    }

    /// Retrieve a node version by id.
    pub fn version(&self, id: VersionId) -> Result<NodeVersion> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::Node(version)) => Ok(version),
            _ => Err(Error::not_found("node version", id)),
        }
    }

    /// The current version leaves of the named node, ascending by id.
    pub fn leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        let node_id = self.get(name)?.id();
        self.catalog.leaves(node_id)
    }

    /// The full version history DAG of the named node.
    pub fn history(&self, name: &str) -> Result<VersionHistoryDag> {
        let node_id = self.get(name)?.id();
        self.catalog.version_dag(node_id)
    }
}
