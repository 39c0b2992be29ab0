//! Lineage graphs: named collections of lineage edge versions.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Entity, EntityVersion, LineageGraph, LineageGraphVersion};
use lode_core::tag::Tag;
use lode_core::types::{EntityKind, ItemId, VersionId};
use std::sync::Arc;

use crate::catalog::{Catalog, VersionSpec};

/// Handle over lineage graphs: snapshots of a derivation topology.
#[derive(Clone, Debug)]
pub struct LineageGraphs {
    catalog: Arc<Catalog>,
}

impl LineageGraphs {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        LineageGraphs { catalog }
    }

    /// Create a lineage graph.
    pub fn create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<LineageGraph> {
        self.catalog.create_entity(
            EntityKind::LineageGraph,
            name,
            source_key,
            tags,
            LineageGraph::new,
        )
    }

    /// Retrieve a lineage graph by name.
    pub fn get(&self, name: &str) -> Result<LineageGraph> {
        match self
            .catalog
            .backend()
            .item_by_name(EntityKind::LineageGraph, name)?
        {
            Some(Entity::LineageGraph(graph)) => Ok(graph),
            _ => Err(Error::not_found("lineage graph", name)),
        }
    }

    /// Retrieve a lineage graph by item id.
    pub fn get_by_id(&self, id: ItemId) -> Result<LineageGraph> {
        match self.catalog.backend().item(id)? {
            Some(Entity::LineageGraph(graph)) => Ok(graph),
            _ => Err(Error::not_found("lineage graph", id)),
        }
    }

    /// Create a new version of the named lineage graph from a set of lineage
    /// edge versions.
    pub fn create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        lineage_edge_version_ids: Vec<VersionId>,
        parent_ids: &[VersionId],
    ) -> Result<LineageGraphVersion> {
        let lineage_graph_id = self.get(name)?.id();
        self.catalog
            .limits()
            .validate_collection_len(lineage_edge_version_ids.len())?;
        if self.catalog.config().reference_checks {
            for id in &lineage_edge_version_ids {
                match self.catalog.backend().version(*id)? {
                    Some(EntityVersion::LineageEdge(_)) => {}
                    Some(other) => {
                        return Err(Error::invalid_argument(format!(
                            "version {id} is a {} version, not a lineage edge version",
                            other.kind()
                        )))
                    }
                    None => return Err(Error::not_found("lineage edge version", id)),
                }
            }
        }
        self.catalog
            .create_entity_version(lineage_graph_id, spec, parent_ids, |rich| {
                LineageGraphVersion::new(rich, lineage_graph_id, lineage_edge_version_ids)
            })
    }

    /// Retrieve a lineage graph version by id.
    pub fn version(&self, id: VersionId) -> Result<LineageGraphVersion> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::LineageGraph(version)) => Ok(version),
            _ => Err(Error::not_found("lineage graph version", id)),
        }
    }

    /// The current version leaves of the named lineage graph, ascending by id.
    pub fn leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        let lineage_graph_id = self.get(name)?.id();
        self.catalog.leaves(lineage_graph_id)
    }

    /// The full version history DAG of the named lineage graph.
    pub fn history(&self, name: &str) -> Result<VersionHistoryDag> {
        let lineage_graph_id = self.get(name)?.id();
        self.catalog.version_dag(lineage_graph_id)
    }
}
