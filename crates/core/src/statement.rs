//! Write statements and ordered batches
//!
//! Every mutation the engine performs is expressed as an ordered list of
//! row-level `Statement`s collected into one `StatementBatch`. The batch is
//! handed to the backend in a single `execute` call; the backend applies
//! all statements or none of them.
//!
//! Batches compose by merging: the item DAG update, the version insert, and
//! any kind-specific rows are built as separate batches by their owning
//! modules and merged, order preserved, into the batch that executes.

use crate::kinds::{Entity, EntityVersion};
use crate::types::{ItemId, SuccessorId, VersionId};
use crate::version::VersionSuccessor;

/// One row-level write.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Insert a new item with its kind payload and initialize its empty DAG.
    InsertItem(Entity),
    /// Insert a new version with its kind payload.
    InsertVersion(EntityVersion),
    /// Insert a successor edge between two versions.
    InsertSuccessor(VersionSuccessor),
    /// Record a version as a member of an item's history.
    AddDagMember {
        /// The item whose history grows.
        item_id: ItemId,
        /// The member version.
        version_id: VersionId,
    },
    /// Record a successor edge in an item's history.
    AddDagEdge {
        /// The item whose history grows.
        item_id: ItemId,
        /// The successor edge.
        successor_id: SuccessorId,
    },
}

impl Statement {
    /// Short name for logs.
    pub fn op_name(&self) -> &'static str {
        match self {
            Statement::InsertItem(_) => "insert_item",
            Statement::InsertVersion(_) => "insert_version",
            Statement::InsertSuccessor(_) => "insert_successor",
            Statement::AddDagMember { .. } => "add_dag_member",
            Statement::AddDagEdge { .. } => "add_dag_edge",
        }
    }
}

/// An ordered list of statements that executes atomically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementBatch {
    statements: Vec<Statement>,
}

impl StatementBatch {
    /// An empty batch.
    pub fn new() -> Self {
        StatementBatch {
            statements: Vec::new(),
        }
    }

    /// Append one statement at the end of the batch.
    pub fn append(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Append every statement of `other` after this batch's statements,
    /// preserving both orders.
    pub fn merge(&mut self, other: StatementBatch) {
        self.statements.extend(other.statements);
    }

    /// The statements in execution order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Consume the batch, yielding the statements in execution order.
    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the batch holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
