//! Identifier types for the catalog
//!
//! This module defines:
//! - ItemId, VersionId, SuccessorId: newtype ids drawn from one counter
//! - EntityKind: the six versioned entity kinds
//!
//! ## Id Model
//!
//! All ids are `u64` values allocated from a single monotonically increasing
//! counter (see the engine's `IdGenerator`). An id is therefore unique across
//! categories for the life of a catalog: an `ItemId` value is never reused as
//! a `VersionId`, and a freshly created version always has a larger raw id
//! than every version that existed before it. Id `0` is never assigned.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ItemId
// ============================================================================

/// Identifier of an item (a named versioned entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    /// The raw id value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// VersionId
// ============================================================================

/// Identifier of a version of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionId(u64);

impl VersionId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        VersionId(raw)
    }

    /// The raw id value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// SuccessorId
// ============================================================================

/// Identifier of a version successor (one parent-to-child DAG edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SuccessorId(u64);

impl SuccessorId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        SuccessorId(raw)
    }

    /// The raw id value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SuccessorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// EntityKind
// ============================================================================

/// The six kinds of versioned entities the catalog stores.
///
/// Item names are unique within a kind, so the kind participates in every
/// name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A logical dataset or asset.
    Node,
    /// A directed connection between two nodes.
    Edge,
    /// A named collection of edge versions.
    Graph,
    /// A schema of typed attributes used to validate version tags.
    Structure,
    /// A provenance connection between two versions of any kind.
    LineageEdge,
    /// A named collection of lineage edge versions.
    LineageGraph,
}

impl EntityKind {
    /// All kinds, in declaration order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Node,
        EntityKind::Edge,
        EntityKind::Graph,
        EntityKind::Structure,
        EntityKind::LineageEdge,
        EntityKind::LineageGraph,
    ];

    /// Lowercase identifier used in error messages and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Node => "node",
            EntityKind::Edge => "edge",
            EntityKind::Graph => "graph",
            EntityKind::Structure => "structure",
            EntityKind::LineageEdge => "lineage_edge",
            EntityKind::LineageGraph => "lineage_graph",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
