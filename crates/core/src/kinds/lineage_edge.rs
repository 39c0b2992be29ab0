//! Lineage edges: provenance connections between versions of any kind
//!
//! Unlike an `Edge`, which connects two nodes, a lineage edge connects two
//! versions of arbitrary kinds ("this table version was derived from that
//! file version"). Its endpoints are fixed per version, not per item.

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::types::{ItemId, VersionId};
use serde::{Deserialize, Serialize};

/// A provenance connection between versions of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdge {
    item: Item,
}

impl LineageEdge {
    /// Wrap an item record as a lineage edge.
    pub fn new(item: Item) -> Self {
        LineageEdge { item }
    }

    /// The underlying item record.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// The lineage edge name.
    pub fn name(&self) -> &str {
        self.item.name()
    }
}

/// One immutable version of a lineage edge, connecting two entity versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdgeVersion {
    rich: RichVersion,
    lineage_edge_id: ItemId,
    from_rich_version_id: VersionId,
    to_rich_version_id: VersionId,
}

impl LineageEdgeVersion {
    /// A lineage edge version connecting two versions.
    pub fn new(
        rich: RichVersion,
        lineage_edge_id: ItemId,
        from_rich_version_id: VersionId,
        to_rich_version_id: VersionId,
    ) -> Self {
        LineageEdgeVersion {
            rich,
            lineage_edge_id,
            from_rich_version_id,
            to_rich_version_id,
        }
    }

    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        &self.rich
    }

    /// The owning lineage edge.
    pub fn lineage_edge_id(&self) -> ItemId {
        self.lineage_edge_id
    }

    /// The version this lineage departs from.
    pub fn from_rich_version_id(&self) -> VersionId {
        self.from_rich_version_id
    }

    /// The version this lineage arrives at.
    pub fn to_rich_version_id(&self) -> VersionId {
        self.to_rich_version_id
    }
}
