//! Graphs: named collections of edge versions.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Entity, EntityVersion, Graph, GraphVersion};
use lode_core::tag::Tag;
use lode_core::types::{EntityKind, ItemId, VersionId};
use std::sync::Arc;

use crate::catalog::{Catalog, VersionSpec};

/// Handle over graphs: snapshots of a topology as a set of edge versions.
#[derive(Clone, Debug)]
pub struct Graphs {
    catalog: Arc<Catalog>,
}

impl Graphs {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        Graphs { catalog }
    }

    /// Create a graph.
    pub fn create(&self, name: &str, source_key: Option<&str>, tags: Vec<Tag>) -> Result<Graph> {
        self.catalog
            .create_entity(EntityKind::Graph, name, source_key, tags, Graph::new)
    }

    /// Retrieve a graph by name.
    pub fn get(&self, name: &str) -> Result<Graph> {
        match self.catalog.backend().item_by_name(EntityKind::Graph, name)? {
            Some(Entity::Graph(graph)) => Ok(graph),
            _ => Err(Error::not_found("graph", name)),
        }
    }

    /// Retrieve a graph by item id.
    pub fn get_by_id(&self, id: ItemId) -> Result<Graph> {
        match self.catalog.backend().item(id)? {
            Some(Entity::Graph(graph)) => Ok(graph),
            _ => Err(Error::not_found("graph", id)),
        }
    }

    /// Create a new version of the named graph from a set of edge versions.
    ///
    /// With reference checks on, every id must name an existing edge
    /// version. Duplicates within the set are kept as supplied; the payload
    /// is the caller's to shape.
    pub fn create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        edge_version_ids: Vec<VersionId>,
        parent_ids: &[VersionId],
    ) -> Result<GraphVersion> {
        let graph_id = self.get(name)?.id();
        self.catalog
            .limits()
            .validate_collection_len(edge_version_ids.len())?;
        if self.catalog.config().reference_checks {
            for id in &edge_version_ids {
                match self.catalog.backend().version(*id)? {
                    Some(EntityVersion::Edge(_)) => {}
                    Some(other) => {
                        return Err(Error::invalid_argument(format!(
                            "version {id} is a {} version, not an edge version",
                            other.kind()
                        )))
                    }
                    None => return Err(Error::not_found("edge version", id)),
                }
            }
        }
        self.catalog
            .create_entity_version(graph_id, spec, parent_ids, |rich| {
                GraphVersion::new(rich, graph_id, edge_version_ids)
            })
    }

    /// Retrieve a graph version by id.
    pub fn version(&self, id: VersionId) -> Result<GraphVersion> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::Graph(version)) => Ok(version),
            _ => Err(Error::not_found("graph version", id)),
        }
    }

    /// The current version leaves of the named graph, ascending by id.
    pub fn leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        let graph_id = self.get(name)?.id();
        self.catalog.leaves(graph_id)
    }

    /// The full version history DAG of the named graph.
    pub fn history(&self, name: &str) -> Result<VersionHistoryDag> {
        let graph_id = self.get(name)?.id();
        self.catalog.version_dag(graph_id)
    }
}
