//! Core types for the Lode catalog
//!
//! This crate defines the data model every other layer builds on:
//!
//! - Identifier newtypes and the six entity kinds (`types`)
//! - Tags and typed tag values (`tag`)
//! - The version model: base versions, successors, per-item DAGs
//!   (`version`, `dag`)
//! - Item and rich version records (`item`, `rich_version`)
//! - The per-kind entity and version records (`kinds`)
//! - Write statements and atomic batches (`statement`)
//! - The storage seam (`traits::Backend`)
//! - The error taxonomy (`error`) and input limits (`limits`)
//!
//! No I/O happens here; persistence lives behind the `Backend` trait.

#![warn(missing_docs)]

pub mod dag;
pub mod error;
pub mod item;
pub mod kinds;
pub mod limits;
pub mod rich_version;
pub mod statement;
pub mod tag;
pub mod traits;
pub mod types;
pub mod version;

pub use dag::VersionHistoryDag;
pub use error::{Error, Result};
pub use item::Item;
pub use kinds::{
    Edge, EdgeVersion, Entity, EntityVersion, Graph, GraphVersion, LineageEdge,
    LineageEdgeVersion, LineageGraph, LineageGraphVersion, Node, NodeVersion, Structure,
    StructureVersion,
};
pub use limits::Limits;
pub use rich_version::RichVersion;
pub use statement::{Statement, StatementBatch};
pub use tag::{Tag, TagValue, ValueType};
pub use traits::Backend;
pub use types::{EntityKind, ItemId, SuccessorId, VersionId};
pub use version::{Version, VersionSuccessor};
