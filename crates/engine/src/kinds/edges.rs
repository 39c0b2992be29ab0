//! Edges: directed connections between two nodes.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Edge, EdgeVersion, Entity, EntityVersion};
use lode_core::tag::Tag;
use lode_core::types::{EntityKind, ItemId, VersionId};
use std::sync::Arc;

use crate::catalog::{Catalog, VersionSpec};

/// Handle over edges: directed node-to-node connections.
#[derive(Clone, Debug)]
pub struct Edges {
    catalog: Arc<Catalog>,
}

impl Edges {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        Edges { catalog }
    }

    /// Create an edge from one node to another.
    ///
    /// With reference checks on, both endpoints must name existing nodes:
    /// a missing item is `NotFound`, an item of another kind is
    /// `InvalidArgument`.
    pub fn create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
        from_node_id: ItemId,
        to_node_id: ItemId,
    ) -> Result<Edge> {
        if self.catalog.config().reference_checks {
            self.require_node(from_node_id)?;
            self.require_node(to_node_id)?;
        }
        self.catalog
            .create_entity(EntityKind::Edge, name, source_key, tags, |item| {
                Edge::new(item, from_node_id, to_node_id)
            })
    }

    fn require_node(&self, id: ItemId) -> Result<()> {
        match self.catalog.backend().item(id)? {
            Some(Entity::Node(_)) => Ok(()),
            Some(other) => Err(Error::invalid_argument(format!(
                "item {id} is a {}, not a node",
                other.kind()
            ))),
            None => Err(Error::not_found("node", id)),
        }
    }

    fn require_node_version(&self, id: VersionId) -> Result<()> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::Node(_)) => Ok(()),
            Some(other) => Err(Error::invalid_argument(format!(
                "version {id} is a {} version, not a node version",
                other.kind()
            ))),
            None => Err(Error::not_found("node version", id)),
        }
    }

    /// Retrieve an edge by name.
    pub fn get(&self, name: &str) -> Result<Edge> {
        match self.catalog.backend().item_by_name(EntityKind::Edge, name)? {
            Some(Entity::Edge(edge)) => Ok(edge),
            _ => Err(Error::not_found("edge", name)),
        }
    }

    /// Retrieve an edge by item id.
    pub fn get_by_id(&self, id: ItemId) -> Result<Edge> {
        match self.catalog.backend().item(id)? {
            Some(Entity::Edge(edge)) => Ok(edge),
            _ => Err(Error::not_found("edge", id)),
        }
    }

    /// Create a new version of the named edge, pinning the node versions it
    /// connects.
    ///
    /// The pinned versions may belong to any node; ownership by the edge's
    /// declared endpoints is not enforced, only that they are node versions.
    pub fn create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        from_node_version_id: VersionId,
        to_node_version_id: VersionId,
        parent_ids: &[VersionId],
    ) -> Result<EdgeVersion> {
        let edge_id = self.get(name)?.id();
        if self.catalog.config().reference_checks {
            self.require_node_version(from_node_version_id)?;
            self.require_node_version(to_node_version_id)?;
        }
        self.catalog
            .create_entity_version(edge_id, spec, parent_ids, |rich| {
                EdgeVersion::new(rich, edge_id, from_node_version_id, to_node_version_id)
            })
    }

    /// Retrieve an edge version by id.
    pub fn version(&self, id: VersionId) -> Result<EdgeVersion> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::Edge(version)) => Ok(version),
            _ => Err(Error::not_found("edge version", id)),
        }
    }

    /// The current version leaves of the named edge, ascending by id.
    pub fn leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        let edge_id = self.get(name)?.id();
        self.catalog.leaves(edge_id)
    }

    /// The full version history DAG of the named edge.
    pub fn history(&self, name: &str) -> Result<VersionHistoryDag> {
        let edge_id = self.get(name)?.id();
        self.catalog.version_dag(edge_id)
    }
}
