//! Lineage edges: derivation links between any two entity versions.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Entity, EntityVersion, LineageEdge, LineageEdgeVersion};
use lode_core::tag::Tag;
use lode_core::types::{EntityKind, ItemId, VersionId};
use std::sync::Arc;

use crate::catalog::{Catalog, VersionSpec};

/// Handle over lineage edges: "derived from" links across kinds.
#[derive(Clone, Debug)]
pub struct LineageEdges {
    catalog: Arc<Catalog>,
}

impl LineageEdges {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        LineageEdges { catalog }
    }

    /// Create a lineage edge.
    pub fn create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<LineageEdge> {
        self.catalog.create_entity(
            EntityKind::LineageEdge,
            name,
            source_key,
            tags,
            LineageEdge::new,
        )
    }

    /// Retrieve a lineage edge by name.
    pub fn get(&self, name: &str) -> Result<LineageEdge> {
        match self
            .catalog
            .backend()
            .item_by_name(EntityKind::LineageEdge, name)?
        {
            Some(Entity::LineageEdge(edge)) => Ok(edge),
            _ => Err(Error::not_found("lineage edge", name)),
        }
    }

    /// Retrieve a lineage edge by item id.
    pub fn get_by_id(&self, id: ItemId) -> Result<LineageEdge> {
        match self.catalog.backend().item(id)? {
            Some(Entity::LineageEdge(edge)) => Ok(edge),
            _ => Err(Error::not_found("lineage edge", id)),
        }
    }

    /// Create a new version of the named lineage edge connecting two entity
    /// versions.
    ///
    /// Unlike plain edges, the endpoints may be versions of any kind; with
    /// reference checks on they only have to exist.
    pub fn create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        from_rich_version_id: VersionId,
        to_rich_version_id: VersionId,
        parent_ids: &[VersionId],
    ) -> Result<LineageEdgeVersion> {
        let lineage_edge_id = self.get(name)?.id();
        if self.catalog.config().reference_checks {
            for endpoint in [from_rich_version_id, to_rich_version_id] {
                if self.catalog.backend().version(endpoint)?.is_none() {
                    return Err(Error::not_found("version", endpoint));
                }
            }
        }
        self.catalog
            .create_entity_version(lineage_edge_id, spec, parent_ids, |rich| {
                LineageEdgeVersion::new(
                    rich,
                    lineage_edge_id,
                    from_rich_version_id,
                    to_rich_version_id,
                )
            })
    }

    /// Retrieve a lineage edge version by id.
    pub fn version(&self, id: VersionId) -> Result<LineageEdgeVersion> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::LineageEdge(version)) => Ok(version),
            _ => Err(Error::not_found("lineage edge version", id)),
        }
    }

    /// The current version leaves of the named lineage edge, ascending by id.
    pub fn leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        let lineage_edge_id = self.get(name)?.id();
        self.catalog.leaves(lineage_edge_id)
    }

    /// The full version history DAG of the named lineage edge.
    pub fn history(&self, name: &str) -> Result<VersionHistoryDag> {
        let lineage_edge_id = self.get(name)?.id();
        self.catalog.version_dag(lineage_edge_id)
    }
}
