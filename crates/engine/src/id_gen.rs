//! Catalog-wide id allocation
//!
//! Items, versions, and version successors draw from one monotonic counter,
//! so an id names exactly one row regardless of its category. The counter is
//! seeded from the backend's high-water mark on open, which keeps allocation
//! monotonic across restarts.

use lode_core::types::{ItemId, SuccessorId, VersionId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source shared by every allocation site in a catalog.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// A generator whose first id is `floor`, clamped to 1 so id 0 is never
    /// handed out.
    pub fn new(floor: u64) -> Self {
        IdGenerator {
            next: AtomicU64::new(floor.max(1)),
        }
    }

    fn next_raw(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Allocate an id for a new item.
    pub fn next_item_id(&self) -> ItemId {
        ItemId::new(self.next_raw())
    }

    /// Allocate an id for a new version.
    pub fn next_version_id(&self) -> VersionId {
        VersionId::new(self.next_raw())
    }

    /// Allocate an id for a new version successor.
    pub fn next_successor_id(&self) -> SuccessorId {
        SuccessorId::new(self.next_raw())
    }
}
