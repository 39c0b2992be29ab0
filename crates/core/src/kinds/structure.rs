//! Structures: schemas of typed attributes
//!
//! A structure version declares a map of attribute names to value types.
//! Versions of other entities may bind to a structure version, in which
//! case their tags are validated against these attributes before any write.

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::tag::ValueType;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named schema whose versions declare typed attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    item: Item,
}

impl Structure {
    /// Wrap an item record as a structure.
    pub fn new(item: Item) -> Self {
        Structure { item }
    }

    /// The underlying item record.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// The structure name.
    pub fn name(&self) -> &str {
        self.item.name()
    }
}

/// One immutable version of a structure: a fixed attribute schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureVersion {
    rich: RichVersion,
    structure_id: ItemId,
    attributes: BTreeMap<String, ValueType>,
}

impl StructureVersion {
    /// A structure version declaring the given attributes.
    pub fn new(
        rich: RichVersion,
        structure_id: ItemId,
        attributes: BTreeMap<String, ValueType>,
    ) -> Self {
        StructureVersion {
            rich,
            structure_id,
            attributes,
        }
    }

    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        &self.rich
    }

    /// The owning structure.
    pub fn structure_id(&self) -> ItemId {
        self.structure_id
    }

    /// The declared attributes, keyed by name.
    pub fn attributes(&self) -> &BTreeMap<String, ValueType> {
        &self.attributes
    }

    /// The declared type of one attribute.
    pub fn attribute(&self, name: &str) -> Option<ValueType> {
        self.attributes.get(name).copied()
    }
}
