//! Edges: directed connections between two nodes
//!
//! The edge entity record pins its two endpoint nodes at the item level;
//! each edge version then pins concrete versions of those nodes.

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::types::{ItemId, VersionId};
use serde::{Deserialize, Serialize};

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    item: Item,
    from_node_id: ItemId,
    to_node_id: ItemId,
}

impl Edge {
    /// An edge from `from_node_id` to `to_node_id`.
    pub fn new(item: Item, from_node_id: ItemId, to_node_id: ItemId) -> Self {
        Edge {
            item,
            from_node_id,
            to_node_id,
        }
    }

    /// The underlying item record.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// The edge name.
    pub fn name(&self) -> &str {
        self.item.name()
    }

    /// The source node.
    pub fn from_node_id(&self) -> ItemId {
        self.from_node_id
    }

    /// The target node.
    pub fn to_node_id(&self) -> ItemId {
        self.to_node_id
    }
}

/// One immutable version of an edge, pinning versions of both endpoint nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeVersion {
    rich: RichVersion,
    edge_id: ItemId,
    from_node_version_id: VersionId,
    to_node_version_id: VersionId,
}

impl EdgeVersion {
    /// An edge version connecting two node versions.
    pub fn new(
        rich: RichVersion,
        edge_id: ItemId,
        from_node_version_id: VersionId,
        to_node_version_id: VersionId,
    ) -> Self {
        EdgeVersion {
            rich,
            edge_id,
            from_node_version_id,
            to_node_version_id,
        }
    }

    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        &self.rich
    }

    /// The owning edge.
    pub fn edge_id(&self) -> ItemId {
        self.edge_id
    }

    /// The pinned version of the source node.
    pub fn from_node_version_id(&self) -> VersionId {
        self.from_node_version_id
    }

    /// The pinned version of the target node.
    pub fn to_node_version_id(&self) -> VersionId {
        self.to_node_version_id
    }
}
