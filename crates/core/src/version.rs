//! Base version records
//!
//! This module defines:
//! - Version: the identity of one immutable version of an item
//! - VersionSuccessor: one directed parent-to-child edge in a version DAG
//!
//! A version never changes once written. A successor records that its `to`
//! version was derived from its `from` version; both endpoints must exist
//! before a successor may be persisted.

use crate::types::{SuccessorId, VersionId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Version
// ============================================================================

/// The base version record: identity only.
///
/// Payload-carrying records (`RichVersion` and the per-kind version types)
/// embed this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    id: VersionId,
}

impl Version {
    /// A version with the given id.
    pub const fn new(id: VersionId) -> Self {
        Version { id }
    }

    /// The version id.
    pub const fn id(&self) -> VersionId {
        self.id
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "version {}", self.id)
    }
}

// ============================================================================
// VersionSuccessor
// ============================================================================

/// One directed edge in a version history DAG: `from` is the parent,
/// `to` the child derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionSuccessor {
    id: SuccessorId,
    from: VersionId,
    to: VersionId,
}

impl VersionSuccessor {
    /// A successor edge with the given endpoints.
    pub const fn new(id: SuccessorId, from: VersionId, to: VersionId) -> Self {
        VersionSuccessor { id, from, to }
    }

    /// The successor id.
    pub const fn id(&self) -> SuccessorId {
        self.id
    }

    /// The parent version.
    pub const fn from_id(&self) -> VersionId {
        self.from
    }

    /// The child version.
    pub const fn to_id(&self) -> VersionId {
        self.to
    }
}

impl fmt::Display for VersionSuccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "successor {} ({} -> {})", self.id, self.from, self.to)
    }
}
