//! Lineage graphs: named collections of lineage edge versions

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::types::{ItemId, VersionId};
use serde::{Deserialize, Serialize};

/// A named collection of lineage edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageGraph {
    item: Item,
}

impl LineageGraph {
    /// Wrap an item record as a lineage graph.
    pub fn new(item: Item) -> Self {
        LineageGraph { item }
    }

    /// The underlying item record.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// The lineage graph name.
    pub fn name(&self) -> &str {
        self.item.name()
    }
}

/// One immutable version of a lineage graph: a fixed set of lineage edge versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageGraphVersion {
    rich: RichVersion,
    lineage_graph_id: ItemId,
    lineage_edge_version_ids: Vec<VersionId>,
}

impl LineageGraphVersion {
    /// A lineage graph version over the given lineage edge versions.
    pub fn new(
        rich: RichVersion,
        lineage_graph_id: ItemId,
        lineage_edge_version_ids: Vec<VersionId>,
    ) -> Self {
        LineageGraphVersion {
            rich,
            lineage_graph_id,
            lineage_edge_version_ids,
        }
    }

    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        &self.rich
    }

    /// The owning lineage graph.
    pub fn lineage_graph_id(&self) -> ItemId {
        self.lineage_graph_id
    }

    /// The lineage edge versions this graph version collects.
    pub fn lineage_edge_version_ids(&self) -> &[VersionId] {
        &self.lineage_edge_version_ids
    }
}
