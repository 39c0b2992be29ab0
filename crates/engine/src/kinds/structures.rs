//! Structures: schemas other versions validate their tags against.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Entity, EntityVersion, Structure, StructureVersion};
use lode_core::tag::{Tag, ValueType};
use lode_core::types::{EntityKind, ItemId, VersionId};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::catalog::{Catalog, VersionSpec};

/// Handle over structures: versioned attribute schemas.
#[derive(Clone, Debug)]
pub struct Structures {
    catalog: Arc<Catalog>,
}

impl Structures {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        Structures { catalog }
    }

    /// Create a structure.
    pub fn create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<Structure> {
        self.catalog
            .create_entity(EntityKind::Structure, name, source_key, tags, Structure::new)
    }

    /// Retrieve a structure by name.
    pub fn get(&self, name: &str) -> Result<Structure> {
        match self
            .catalog
            .backend()
            .item_by_name(EntityKind::Structure, name)?
        {
            Some(Entity::Structure(structure)) => Ok(structure),
            _ => Err(Error::not_found("structure", name)),
        }
    }

    /// Retrieve a structure by item id.
    pub fn get_by_id(&self, id: ItemId) -> Result<Structure> {
        match self.catalog.backend().item(id)? {
            Some(Entity::Structure(structure)) => Ok(structure),
            _ => Err(Error::not_found("structure", id)),
        }
    }

    /// Create a new version of the named structure declaring `attributes`.
    ///
    /// An empty attribute map is legal to declare, but no version can
    /// conform to it: binding with an empty tag map is rejected outright,
    /// and any supplied tag key is undeclared.
    pub fn create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        attributes: BTreeMap<String, ValueType>,
        parent_ids: &[VersionId],
    ) -> Result<StructureVersion> {
        let structure_id = self.get(name)?.id();
        for attribute in attributes.keys() {
            self.catalog.limits().validate_tag_key(attribute)?;
        }
        self.catalog
            .create_entity_version(structure_id, spec, parent_ids, |rich| {
                StructureVersion::new(rich, structure_id, attributes)
            })
    }

    /// Retrieve a structure version by id.
    pub fn version(&self, id: VersionId) -> Result<StructureVersion> {
        match self.catalog.backend().version(id)? {
            Some(EntityVersion::Structure(version)) => Ok(version),
            _ => Err(Error::not_found("structure version", id)),
        }
    }

    /// The current version leaves of the named structure, ascending by id.
    pub fn leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        let structure_id = self.get(name)?.id();
        self.catalog.leaves(structure_id)
    }

    /// The full version history DAG of the named structure.
    pub fn history(&self, name: &str) -> Result<VersionHistoryDag> {
        let structure_id = self.get(name)?.id();
        self.catalog.version_dag(structure_id)
    }
}
