//! The six entity kinds and their version records
//!
//! Every kind is a composition: the entity record embeds an `Item` and the
//! version record embeds a `RichVersion`, plus whatever payload the kind
//! carries. `Entity` and `EntityVersion` are the uniform sums the storage
//! layer traffics in; typed access goes through the `as_*`/`into_*`
//! accessors.

mod edge;
mod graph;
mod lineage_edge;
mod lineage_graph;
mod node;
mod structure;

pub use edge::{Edge, EdgeVersion};
pub use graph::{Graph, GraphVersion};
pub use lineage_edge::{LineageEdge, LineageEdgeVersion};
pub use lineage_graph::{LineageGraph, LineageGraphVersion};
pub use node::{Node, NodeVersion};
pub use structure::{Structure, StructureVersion};

use crate::item::Item;
use crate::rich_version::RichVersion;
use crate::types::{EntityKind, ItemId, VersionId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Entity
// ============================================================================

/// Any entity record, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    /// A node record.
    Node(Node),
    /// An edge record.
    Edge(Edge),
    /// A graph record.
    Graph(Graph),
    /// A structure record.
    Structure(Structure),
    /// A lineage edge record.
    LineageEdge(LineageEdge),
    /// A lineage graph record.
    LineageGraph(LineageGraph),
}

impl Entity {
    /// The embedded item record.
    pub fn item(&self) -> &Item {
        match self {
            Entity::Node(n) => n.item(),
            Entity::Edge(e) => e.item(),
            Entity::Graph(g) => g.item(),
            Entity::Structure(s) => s.item(),
            Entity::LineageEdge(le) => le.item(),
            Entity::LineageGraph(lg) => lg.item(),
        }
    }

    /// The entity kind of this record.
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Node(_) => EntityKind::Node,
            Entity::Edge(_) => EntityKind::Edge,
            Entity::Graph(_) => EntityKind::Graph,
            Entity::Structure(_) => EntityKind::Structure,
            Entity::LineageEdge(_) => EntityKind::LineageEdge,
            Entity::LineageGraph(_) => EntityKind::LineageGraph,
        }
    }

    /// The item id.
    pub fn id(&self) -> ItemId {
        self.item().id()
    }

    /// The item name.
    pub fn name(&self) -> &str {
        self.item().name()
    }

    /// Borrow as a node, if this is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entity::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow as an edge, if this is one.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Entity::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// Borrow as a graph, if this is one.
    pub fn as_graph(&self) -> Option<&Graph> {
        match self {
            Entity::Graph(g) => Some(g),
            _ => None,
        }
    }

    /// Borrow as a structure, if this is one.
    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Entity::Structure(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as a lineage edge, if this is one.
    pub fn as_lineage_edge(&self) -> Option<&LineageEdge> {
        match self {
            Entity::LineageEdge(le) => Some(le),
            _ => None,
        }
    }

    /// Borrow as a lineage graph, if this is one.
    pub fn as_lineage_graph(&self) -> Option<&LineageGraph> {
        match self {
            Entity::LineageGraph(lg) => Some(lg),
            _ => None,
        }
    }

    /// Take as a node, if this is one.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Entity::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Take as an edge, if this is one.
    pub fn into_edge(self) -> Option<Edge> {
        match self {
            Entity::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// Take as a graph, if this is one.
    pub fn into_graph(self) -> Option<Graph> {
        match self {
            Entity::Graph(g) => Some(g),
            _ => None,
        }
    }

    /// Take as a structure, if this is one.
    pub fn into_structure(self) -> Option<Structure> {
        match self {
            Entity::Structure(s) => Some(s),
            _ => None,
        }
    }

    /// Take as a lineage edge, if this is one.
    pub fn into_lineage_edge(self) -> Option<LineageEdge> {
        match self {
            Entity::LineageEdge(le) => Some(le),
            _ => None,
        }
    }

    /// Take as a lineage graph, if this is one.
    pub fn into_lineage_graph(self) -> Option<LineageGraph> {
        match self {
            Entity::LineageGraph(lg) => Some(lg),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' (item {})", self.kind(), self.name(), self.id())
    }
}

impl From<Node> for Entity {
    fn from(n: Node) -> Self {
        Entity::Node(n)
    }
}

impl From<Edge> for Entity {
    fn from(e: Edge) -> Self {
        Entity::Edge(e)
    }
}

impl From<Graph> for Entity {
    fn from(g: Graph) -> Self {
        Entity::Graph(g)
    }
}

impl From<Structure> for Entity {
    fn from(s: Structure) -> Self {
        Entity::Structure(s)
    }
}

impl From<LineageEdge> for Entity {
    fn from(le: LineageEdge) -> Self {
        Entity::LineageEdge(le)
    }
}

impl From<LineageGraph> for Entity {
    fn from(lg: LineageGraph) -> Self {
        Entity::LineageGraph(lg)
    }
}

// ============================================================================
// EntityVersion
// ============================================================================

/// Any entity version record, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityVersion {
    /// A node version.
    Node(NodeVersion),
    /// An edge version.
    Edge(EdgeVersion),
    /// A graph version.
    Graph(GraphVersion),
    /// A structure version.
    Structure(StructureVersion),
    /// A lineage edge version.
    LineageEdge(LineageEdgeVersion),
    /// A lineage graph version.
    LineageGraph(LineageGraphVersion),
}

impl EntityVersion {
    /// The shared version metadata.
    pub fn rich(&self) -> &RichVersion {
        match self {
            EntityVersion::Node(v) => v.rich(),
            EntityVersion::Edge(v) => v.rich(),
            EntityVersion::Graph(v) => v.rich(),
            EntityVersion::Structure(v) => v.rich(),
            EntityVersion::LineageEdge(v) => v.rich(),
            EntityVersion::LineageGraph(v) => v.rich(),
        }
    }

    /// The version id.
    pub fn id(&self) -> VersionId {
        self.rich().id()
    }

    /// The owning item.
    pub fn item_id(&self) -> ItemId {
        match self {
            EntityVersion::Node(v) => v.node_id(),
            EntityVersion::Edge(v) => v.edge_id(),
            EntityVersion::Graph(v) => v.graph_id(),
            EntityVersion::Structure(v) => v.structure_id(),
            EntityVersion::LineageEdge(v) => v.lineage_edge_id(),
            EntityVersion::LineageGraph(v) => v.lineage_graph_id(),
        }
    }

    /// The entity kind of this version.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityVersion::Node(_) => EntityKind::Node,
            EntityVersion::Edge(_) => EntityKind::Edge,
            EntityVersion::Graph(_) => EntityKind::Graph,
            EntityVersion::Structure(_) => EntityKind::Structure,
            EntityVersion::LineageEdge(_) => EntityKind::LineageEdge,
            EntityVersion::LineageGraph(_) => EntityKind::LineageGraph,
        }
    }

    /// Borrow as a node version, if this is one.
    pub fn as_node(&self) -> Option<&NodeVersion> {
        match self {
            EntityVersion::Node(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as an edge version, if this is one.
    pub fn as_edge(&self) -> Option<&EdgeVersion> {
        match self {
            EntityVersion::Edge(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as a graph version, if this is one.
    pub fn as_graph(&self) -> Option<&GraphVersion> {
        match self {
            EntityVersion::Graph(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as a structure version, if this is one.
    pub fn as_structure(&self) -> Option<&StructureVersion> {
        match self {
            EntityVersion::Structure(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as a lineage edge version, if this is one.
    pub fn as_lineage_edge(&self) -> Option<&LineageEdgeVersion> {
        match self {
            EntityVersion::LineageEdge(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as a lineage graph version, if this is one.
    pub fn as_lineage_graph(&self) -> Option<&LineageGraphVersion> {
        match self {
            EntityVersion::LineageGraph(v) => Some(v),
            _ => None,
        }
    }

    /// Take as a node version, if this is one.
    pub fn into_node(self) -> Option<NodeVersion> {
        match self {
            EntityVersion::Node(v) => Some(v),
            _ => None,
        }
    }

    /// Take as an edge version, if this is one.
    pub fn into_edge(self) -> Option<EdgeVersion> {
        match self {
            EntityVersion::Edge(v) => Some(v),
            _ => None,
        }
    }

    /// Take as a graph version, if this is one.
    pub fn into_graph(self) -> Option<GraphVersion> {
        match self {
            EntityVersion::Graph(v) => Some(v),
            _ => None,
        }
    }

    /// Take as a structure version, if this is one.
    pub fn into_structure(self) -> Option<StructureVersion> {
        match self {
            EntityVersion::Structure(v) => Some(v),
            _ => None,
        }
    }

    /// Take as a lineage edge version, if this is one.
    pub fn into_lineage_edge(self) -> Option<LineageEdgeVersion> {
        match self {
            EntityVersion::LineageEdge(v) => Some(v),
            _ => None,
        }
    }

    /// Take as a lineage graph version, if this is one.
    pub fn into_lineage_graph(self) -> Option<LineageGraphVersion> {
        match self {
            EntityVersion::LineageGraph(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for EntityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} version {} (item {})",
            self.kind(),
            self.id(),
            self.item_id()
        )
    }
}

impl From<NodeVersion> for EntityVersion {
    fn from(v: NodeVersion) -> Self {
        EntityVersion::Node(v)
    }
}

impl From<EdgeVersion> for EntityVersion {
    fn from(v: EdgeVersion) -> Self {
        EntityVersion::Edge(v)
    }
}

impl From<GraphVersion> for EntityVersion {
    fn from(v: GraphVersion) -> Self {
        EntityVersion::Graph(v)
    }
}

impl From<StructureVersion> for EntityVersion {
    fn from(v: StructureVersion) -> Self {
        EntityVersion::Structure(v)
    }
}

impl From<LineageEdgeVersion> for EntityVersion {
    fn from(v: LineageEdgeVersion) -> Self {
        EntityVersion::LineageEdge(v)
    }
}

impl From<LineageGraphVersion> for EntityVersion {
    fn from(v: LineageGraphVersion) -> Self {
        EntityVersion::LineageGraph(v)
    }
}
