//! Nodes: logical datasets or assets
//!
//! A node is the plainest entity kind: its entity record is just an `Item`
//! and its version record is just a `RichVersion` pinned to the owning node.

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// A logical dataset or asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    item: Item,
}

impl Node {
    /// Wrap an item record as a node.
    pub fn new(item: Item) -> Self {
        Node { item }
    }

    /// The underlying item record.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// The node name.
    pub fn name(&self) -> &str {
        self.item.name()
    }
}

/// One immutable version of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeVersion {
    rich: RichVersion,
    node_id: ItemId,
}

impl NodeVersion {
    /// A node version owned by `node_id`.
    pub fn new(rich: RichVersion, node_id: ItemId) -> Self {
        NodeVersion { rich, node_id }
    }

    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        &self.rich
    }

    /// The owning node.
    pub fn node_id(&self) -> ItemId {
        self.node_id
    }
}
