//! Backend abstraction
//!
//! This module defines the `Backend` trait that separates the engine from
//! the storage implementation. The in-memory backend lives in the storage
//! crate; alternative backends only need to honor this contract.

use crate::dag::VersionHistoryDag;
use crate::error::Result;
use crate::kinds::{Entity, EntityVersion};
use crate::statement::StatementBatch;
use crate::types::{EntityKind, ItemId, SuccessorId, VersionId};
use crate::version::VersionSuccessor;

/// Storage abstraction for the catalog.
///
/// Implementations must be safe to call concurrently from multiple threads
/// (`Send + Sync`). All reads return owned clones; the engine never holds
/// references into backend tables.
///
/// ## Atomicity
///
/// `execute` is all-or-nothing: the backend validates every statement of the
/// batch (against committed state plus the other statements of the same
/// batch) before applying any of them. A failed batch leaves the backend
/// exactly as it was and surfaces the first validation error.
pub trait Backend: Send + Sync {
    /// Execute an ordered statement batch atomically.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` for name collisions, `NotFound` for successor
    /// or DAG rows referencing versions that exist neither in committed
    /// state nor elsewhere in the batch, and `Storage` for id collisions or
    /// internal failures. On any error nothing is applied.
    fn execute(&self, batch: StatementBatch) -> Result<()>;

    /// Fetch an item with its kind payload by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn item(&self, id: ItemId) -> Result<Option<Entity>>;

    /// Fetch an item by kind and name.
    ///
    /// Names are unique within a kind, so this resolves at most one item.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn item_by_name(&self, kind: EntityKind, name: &str) -> Result<Option<Entity>>;

    /// Fetch a version with its kind payload by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn version(&self, id: VersionId) -> Result<Option<EntityVersion>>;

    /// Fetch a successor edge by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn successor(&self, id: SuccessorId) -> Result<Option<VersionSuccessor>>;

    /// Compose the version history DAG of an item.
    ///
    /// Returns `Some` with an empty DAG for an item that exists but has no
    /// versions yet, and `None` for an unknown item.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn dag(&self, item_id: ItemId) -> Result<Option<VersionHistoryDag>>;

    /// The highest raw id ever assigned in this backend, 0 when empty.
    ///
    /// Used to seed the id generator above every persisted id on open.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn max_assigned_id(&self) -> Result<u64>;
}
