//! Per-item version history DAG
//!
//! Each item owns one `VersionHistoryDag`: an id-keyed set of member
//! versions plus the successor edges between them. There are no object
//! pointers between versions; adjacency is computed from the edge list.
//!
//! ## Invariants
//!
//! - Append-only: members and edges are only ever added, never removed.
//! - Every edge endpoint is a member of the same item's DAG.
//! - Acyclic by construction: version ids come from one monotone counter
//!   and edges always point from an older version to a newer one.

use crate::error::{Error, Result};
use crate::types::{ItemId, VersionId};
use crate::version::VersionSuccessor;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The version history of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHistoryDag {
    item_id: ItemId,
    members: BTreeSet<VersionId>,
    edges: Vec<VersionSuccessor>,
}

impl VersionHistoryDag {
    /// An empty DAG for the given item.
    pub fn new(item_id: ItemId) -> Self {
        VersionHistoryDag {
            item_id,
            members: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// The owning item.
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    /// Record a version as a member of this DAG. Idempotent.
    pub fn add_member(&mut self, version_id: VersionId) {
        self.members.insert(version_id);
    }

    /// Record a successor edge between two member versions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the endpoints coincide or either
    /// endpoint is not a member of this DAG.
    pub fn add_edge(&mut self, successor: VersionSuccessor) -> Result<()> {
        if successor.from_id() == successor.to_id() {
            return Err(Error::invalid_argument(format!(
                "successor {} connects version {} to itself",
                successor.id(),
                successor.from_id()
            )));
        }
        for endpoint in [successor.from_id(), successor.to_id()] {
            if !self.members.contains(&endpoint) {
                return Err(Error::invalid_argument(format!(
                    "successor {} endpoint {} is not in the history of item {}",
                    successor.id(),
                    endpoint,
                    self.item_id
                )));
            }
        }
        self.edges.push(successor);
        Ok(())
    }

    /// Whether the version is a member of this DAG.
    pub fn contains(&self, version_id: VersionId) -> bool {
        self.members.contains(&version_id)
    }

    /// Number of member versions.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the DAG has no versions yet.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member versions in ascending id order.
    pub fn members(&self) -> impl Iterator<Item = VersionId> + '_ {
        self.members.iter().copied()
    }

    /// All successor edges, in insertion order.
    pub fn edges(&self) -> &[VersionSuccessor] {
        &self.edges
    }

    /// The current leaves: members with no outgoing successor, ascending.
    ///
    /// A sole root with no edges is a leaf. An empty DAG has no leaves.
    pub fn leaves(&self) -> Vec<VersionId> {
        let sources: FxHashSet<VersionId> = self.edges.iter().map(|e| e.from_id()).collect();
        self.members
            .iter()
            .copied()
            .filter(|v| !sources.contains(v))
            .collect()
    }

    /// Direct parents of a version, ascending.
    pub fn parents_of(&self, version_id: VersionId) -> Vec<VersionId> {
        let mut parents: Vec<VersionId> = self
            .edges
            .iter()
            .filter(|e| e.to_id() == version_id)
            .map(|e| e.from_id())
            .collect();
        parents.sort_unstable();
        parents.dedup();
        parents
    }

    /// Direct children of a version, ascending.
    pub fn children_of(&self, version_id: VersionId) -> Vec<VersionId> {
        let mut children: Vec<VersionId> = self
            .edges
            .iter()
            .filter(|e| e.from_id() == version_id)
            .map(|e| e.to_id())
            .collect();
        children.sort_unstable();
        children.dedup();
        children
    }

    /// Every version the given one was derived from, including itself,
    /// in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the version is not a member of this DAG.
    pub fn ancestors(&self, version_id: VersionId) -> Result<Vec<VersionId>> {
        if !self.members.contains(&version_id) {
            return Err(Error::not_found(
                format!("version in history of item {}", self.item_id),
                version_id,
            ));
        }
        let mut seen: FxHashSet<VersionId> = FxHashSet::default();
        let mut stack = vec![version_id];
        while let Some(v) = stack.pop() {
            if seen.insert(v) {
                for parent in self.parents_of(v) {
                    stack.push(parent);
                }
            }
        }
        let mut result: Vec<VersionId> = seen.into_iter().collect();
        result.sort_unstable();
        Ok(result)
    }
}
