//! Item records
//!
//! An item is the named, tagged identity of a versioned entity. Every one of
//! the six entity kinds embeds an `Item`; the kind payloads live in the
//! `kinds` module. Items are immutable after creation except for their
//! version history, which grows through the DAG tables.

use crate::tag::Tag;
use crate::types::{EntityKind, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The named identity shared by all entity kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    kind: EntityKind,
    name: String,
    source_key: Option<String>,
    tags: BTreeMap<String, Tag>,
    created_at: DateTime<Utc>,
}

impl Item {
    /// A new item record stamped with the current time.
    ///
    /// Name and tag validation happens at the engine boundary, not here.
    pub fn new(
        id: ItemId,
        kind: EntityKind,
        name: impl Into<String>,
        source_key: Option<String>,
        tags: BTreeMap<String, Tag>,
    ) -> Self {
        Item {
            id,
            kind,
            name: name.into(),
            source_key,
            tags,
            created_at: Utc::now(),
        }
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The entity kind this item belongs to.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The item name, unique within its kind.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional external correlation key.
    pub fn source_key(&self) -> Option<&str> {
        self.source_key.as_deref()
    }

    /// Item-level tags, keyed by tag key.
    pub fn tags(&self) -> &BTreeMap<String, Tag> {
        &self.tags
    }

    /// Look up one tag by key.
    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tags.get(key)
    }

    /// When the item was registered.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
