//! Graphs: named collections of edge versions

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::types::{ItemId, VersionId};
use serde::{Deserialize, Serialize};

/// A named collection of edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    item: Item,
}

impl Graph {
    /// Wrap an item record as a graph.
    pub fn new(item: Item) -> Self {
        Graph { item }
    }

    /// The underlying item record.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    /// The graph name.
    pub fn name(&self) -> &str {
        self.item.name()
    }
}

/// One immutable version of a graph: a fixed set of edge versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphVersion {
    rich: RichVersion,
    graph_id: ItemId,
    edge_version_ids: Vec<VersionId>,
}

impl GraphVersion {
    /// A graph version over the given edge versions.
    pub fn new(rich: RichVersion, graph_id: ItemId, edge_version_ids: Vec<VersionId>) -> Self {
        GraphVersion {
            rich,
            graph_id,
            edge_version_ids,
        }
    }

    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        &self.rich
    }

    /// The owning graph.
    pub fn graph_id(&self) -> ItemId {
        self.graph_id
    }

    /// The edge versions this graph version collects.
    pub fn edge_version_ids(&self) -> &[VersionId] {
        &self.edge_version_ids
    }
}
