//! Per-item mutation locks
//!
//! Version creation reads an item's DAG, decides parents, and writes the
//! update as one batch. Two writers doing that concurrently against the same
//! item could both pick the same leaves, so each item carries a mutex that
//! serializes its mutations. Different items never contend.
//!
//! Uses `parking_lot::Mutex` so a panicking writer cannot poison the lock
//! for everyone else.

use dashmap::DashMap;
use lode_core::types::ItemId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Lazily-populated map from item id to its mutation lock.
#[derive(Debug, Default)]
pub struct ItemLockRegistry {
    locks: DashMap<ItemId, Arc<Mutex<()>>>,
}

impl ItemLockRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        ItemLockRegistry::default()
    }

    /// The lock for `item_id`, created on first use.
    ///
    /// Returns the `Arc` rather than a guard so the caller controls how long
    /// the critical section lasts:
    ///
    /// ```text
    /// let lock = registry.acquire(item_id);
    /// let _guard = lock.lock();
    /// // read DAG, build batch, execute
    /// ```
    pub fn acquire(&self, item_id: ItemId) -> Arc<Mutex<()>> {
        self.locks
            .entry(item_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
