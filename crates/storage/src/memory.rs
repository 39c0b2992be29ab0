//! In-memory backend
//!
//! `MemoryBackend` keeps one table per concern behind a single
//! `parking_lot::RwLock`. Batch execution takes the write lock once,
//! validates every statement, and only then applies them, so a batch is
//! atomic and isolated with respect to every other batch and read.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::{Entity, EntityVersion};
use lode_core::statement::{Statement, StatementBatch};
use lode_core::traits::Backend;
use lode_core::types::{EntityKind, ItemId, SuccessorId, VersionId};
use lode_core::version::VersionSuccessor;
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Table-per-concern rows, mirroring the relational layout the statement
/// vocabulary was designed for.
#[derive(Debug, Default)]
struct Tables {
    items: BTreeMap<ItemId, Entity>,
    names: BTreeMap<(EntityKind, String), ItemId>,
    versions: BTreeMap<VersionId, EntityVersion>,
    successors: BTreeMap<SuccessorId, VersionSuccessor>,
    dag_members: BTreeMap<ItemId, BTreeSet<VersionId>>,
    dag_edges: BTreeMap<ItemId, BTreeSet<SuccessorId>>,
    max_id: u64,
}

/// Rows a batch will create, collected up front so statements may reference
/// each other regardless of their position in the batch.
#[derive(Default)]
struct PendingRows {
    items: FxHashSet<ItemId>,
    names: FxHashSet<(EntityKind, String)>,
    versions: FxHashSet<VersionId>,
    successors: FxHashSet<SuccessorId>,
}

/// The built-in in-memory backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: RwLock<Tables>,
}

impl MemoryBackend {
    /// An empty backend.
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Collect the rows this batch creates and reject duplicate ids and
    /// name collisions, both within the batch and against committed state.
    fn collect_pending(tables: &Tables, batch: &StatementBatch) -> Result<PendingRows> {
        let mut pending = PendingRows::default();
        for statement in batch.statements() {
            match statement {
                Statement::InsertItem(entity) => {
                    let id = entity.id();
                    if tables.items.contains_key(&id) || !pending.items.insert(id) {
                        return Err(Error::storage(format!("duplicate item id {id}")));
                    }
                    let name_key = (entity.kind(), entity.name().to_string());
                    if tables.names.contains_key(&name_key) || !pending.names.insert(name_key) {
                        return Err(Error::already_exists(entity.kind(), entity.name()));
                    }
                }
                Statement::InsertVersion(version) => {
                    let id = version.id();
                    if tables.versions.contains_key(&id) || !pending.versions.insert(id) {
                        return Err(Error::storage(format!("duplicate version id {id}")));
                    }
                }
                Statement::InsertSuccessor(successor) => {
                    let id = successor.id();
                    if tables.successors.contains_key(&id) || !pending.successors.insert(id) {
                        return Err(Error::storage(format!("duplicate successor id {id}")));
                    }
                }
                Statement::AddDagMember { .. } | Statement::AddDagEdge { .. } => {}
            }
        }
        Ok(pending)
    }

    /// Check every reference a statement makes against committed state plus
    /// the rows the batch itself creates.
    fn check_references(
        tables: &Tables,
        pending: &PendingRows,
        batch: &StatementBatch,
    ) -> Result<()> {
        let item_exists = |id: &ItemId| tables.items.contains_key(id) || pending.items.contains(id);
        let version_exists =
            |id: &VersionId| tables.versions.contains_key(id) || pending.versions.contains(id);
        let successor_exists =
            |id: &SuccessorId| tables.successors.contains_key(id) || pending.successors.contains(id);

        for statement in batch.statements() {
            match statement {
                Statement::InsertSuccessor(successor) => {
                    for endpoint in [successor.from_id(), successor.to_id()] {
                        if !version_exists(&endpoint) {
                            return Err(Error::not_found("version", endpoint));
                        }
                    }
                }
                Statement::AddDagMember { item_id, version_id } => {
                    if !item_exists(item_id) {
                        return Err(Error::not_found("item", item_id));
                    }
                    if !version_exists(version_id) {
                        return Err(Error::not_found("version", version_id));
                    }
                }
                Statement::AddDagEdge { item_id, successor_id } => {
                    if !item_exists(item_id) {
                        return Err(Error::not_found("item", item_id));
                    }
                    if !successor_exists(successor_id) {
                        return Err(Error::not_found("version successor", successor_id));
                    }
                }
                Statement::InsertItem(_) | Statement::InsertVersion(_) => {}
            }
        }
        Ok(())
    }

    /// Apply a validated batch. Infallible by construction.
    fn apply(tables: &mut Tables, batch: StatementBatch) {
        for statement in batch.into_statements() {
            match statement {
                Statement::InsertItem(entity) => {
                    let id = entity.id();
                    tables.max_id = tables.max_id.max(id.as_u64());
                    tables
                        .names
                        .insert((entity.kind(), entity.name().to_string()), id);
                    tables.items.insert(id, entity);
                    // An item starts with an empty history.
                    tables.dag_members.entry(id).or_default();
                    tables.dag_edges.entry(id).or_default();
                }
                Statement::InsertVersion(version) => {
                    tables.max_id = tables.max_id.max(version.id().as_u64());
                    tables.versions.insert(version.id(), version);
                }
                Statement::InsertSuccessor(successor) => {
                    tables.max_id = tables.max_id.max(successor.id().as_u64());
                    tables.successors.insert(successor.id(), successor);
                }
                Statement::AddDagMember { item_id, version_id } => {
                    tables
                        .dag_members
                        .entry(item_id)
                        .or_default()
                        .insert(version_id);
                }
                Statement::AddDagEdge { item_id, successor_id } => {
                    tables
                        .dag_edges
                        .entry(item_id)
                        .or_default()
                        .insert(successor_id);
                }
            }
        }
    }
}

impl Backend for MemoryBackend {
    fn execute(&self, batch: StatementBatch) -> Result<()> {
        // One write-lock acquisition covers validation and application, so
        // concurrent batches never interleave.
        let mut tables = self.tables.write();
        if let Err(e) = Self::collect_pending(&tables, &batch)
            .and_then(|pending| Self::check_references(&tables, &pending, &batch))
        {
            warn!(target: "lode::storage", error = %e, "batch rejected");
            return Err(e);
        }
        debug!(
            target: "lode::storage",
            statements = batch.len(),
            "applying batch"
        );
        Self::apply(&mut tables, batch);
        Ok(())
    }

    fn item(&self, id: ItemId) -> Result<Option<Entity>> {
        Ok(self.tables.read().items.get(&id).cloned())
    }

    fn item_by_name(&self, kind: EntityKind, name: &str) -> Result<Option<Entity>> {
        let tables = self.tables.read();
        Ok(tables
            .names
            .get(&(kind, name.to_string()))
            .and_then(|id| tables.items.get(id))
            .cloned())
    }

    fn version(&self, id: VersionId) -> Result<Option<EntityVersion>> {
        Ok(self.tables.read().versions.get(&id).cloned())
    }

    fn successor(&self, id: SuccessorId) -> Result<Option<VersionSuccessor>> {
        Ok(self.tables.read().successors.get(&id).cloned())
    }

    fn dag(&self, item_id: ItemId) -> Result<Option<VersionHistoryDag>> {
        let tables = self.tables.read();
        let Some(members) = tables.dag_members.get(&item_id) else {
            return Ok(None);
        };
        let mut dag = VersionHistoryDag::new(item_id);
        for member in members {
            dag.add_member(*member);
        }
        if let Some(edge_ids) = tables.dag_edges.get(&item_id) {
            for successor_id in edge_ids {
                let successor = tables.successors.get(successor_id).ok_or_else(|| {
                    Error::storage(format!(
                        "dag of item {item_id} references missing successor {successor_id}"
                    ))
                })?;
                dag.add_edge(*successor)
                    .map_err(|e| Error::storage(e.to_string()))?;
            }
        }
        Ok(Some(dag))
    }

    fn max_assigned_id(&self) -> Result<u64> {
        Ok(self.tables.read().max_id)
    }
}
