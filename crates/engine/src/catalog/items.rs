//! Generic item operations
//!
//! Every entity kind creates and reads items the same way; only the record
//! wrapper differs. The kind handles pass a closure that wraps the freshly
//! built [`Item`] into their entity record, and everything else (limits, tag
//! folding, the uniqueness pre-check, statement execution) lives here.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::item::Item;
use lode_core::kinds::{Entity, EntityVersion};
use lode_core::limits::Limits;
use lode_core::statement::{Statement, StatementBatch};
use lode_core::tag::{Tag, TagValue};
use lode_core::types::{EntityKind, ItemId, SuccessorId, VersionId};
use lode_core::version::VersionSuccessor;
use std::collections::BTreeMap;
use tracing::debug;

use super::Catalog;

/// Fold a tag list into the map an item or version stores.
///
/// Enforces key and string limits, tag self-consistency, and key uniqueness.
pub(crate) fn fold_tags(limits: &Limits, tags: Vec<Tag>) -> Result<BTreeMap<String, Tag>> {
    let mut folded = BTreeMap::new();
    for tag in tags {
        limits.validate_tag_key(tag.key())?;
        if let Some(TagValue::String(s)) = tag.value() {
            limits.validate_tag_string(tag.key(), s)?;
        }
        tag.validate()?;
        let key = tag.key().to_string();
        if folded.contains_key(&key) {
            return Err(Error::invalid_argument(format!("duplicate tag key '{key}'")));
        }
        folded.insert(key, tag);
    }
    Ok(folded)
}

impl Catalog {
    /// Create an item of the given kind and wrap it into its entity record.
    ///
    /// The name pre-check gives a clean error in the common case; the
    /// backend's name index is what actually guarantees uniqueness when two
    /// creates race.
    pub(crate) fn create_entity<R>(
        &self,
        kind: EntityKind,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
        wrap: impl FnOnce(Item) -> R,
    ) -> Result<R>
    where
        R: Clone,
        Entity: From<R>,
    {
        self.limits.validate_name(name)?;
        let tags = fold_tags(&self.limits, tags)?;
        if self.backend.item_by_name(kind, name)?.is_some() {
            return Err(Error::already_exists(kind, name));
        }

        let id = self.ids.next_item_id();
        let item = Item::new(id, kind, name, source_key.map(str::to_string), tags);
        let record = wrap(item);

        let mut batch = StatementBatch::new();
        batch.append(Statement::InsertItem(Entity::from(record.clone())));
        self.backend.execute(batch)?;

        debug!(
            target: "lode::catalog",
            kind = kind.as_str(),
            name,
            id = %id,
            "Item created"
        );
        Ok(record)
    }

    /// Retrieve any entity by item id.
    pub fn entity(&self, id: ItemId) -> Result<Entity> {
        self.backend
            .item(id)?
            .ok_or_else(|| Error::not_found("item", id))
    }

    /// Retrieve any entity by kind and name.
    pub fn entity_by_name(&self, kind: EntityKind, name: &str) -> Result<Entity> {
        self.backend
            .item_by_name(kind, name)?
            .ok_or_else(|| Error::not_found(kind.as_str(), name))
    }

    /// Retrieve any entity version by id.
    pub fn entity_version(&self, id: VersionId) -> Result<EntityVersion> {
        self.backend
            .version(id)?
            .ok_or_else(|| Error::not_found("version", id))
    }

    /// Retrieve a version successor by id.
    pub fn version_successor(&self, id: SuccessorId) -> Result<VersionSuccessor> {
        self.backend
            .successor(id)?
            .ok_or_else(|| Error::not_found("version successor", id))
    }

    /// The full version history DAG of an item.
    ///
    /// An item with no versions yet has an empty DAG; an unknown item is
    /// `NotFound`.
    pub fn version_dag(&self, item_id: ItemId) -> Result<VersionHistoryDag> {
        self.backend
            .dag(item_id)?
            .ok_or_else(|| Error::not_found("item", item_id))
    }

    /// The current leaves of an item's version DAG, ascending by id.
    pub fn leaves(&self, item_id: ItemId) -> Result<Vec<VersionId>> {
        Ok(self.version_dag(item_id)?.leaves())
    }

    /// Every version reachable from `of` through parent edges, `of` included,
    /// ascending by id.
    pub fn ancestors(&self, item_id: ItemId, of: VersionId) -> Result<Vec<VersionId>> {
        self.version_dag(item_id)?.ancestors(of)
    }
}
