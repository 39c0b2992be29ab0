//! Generic version creation
//!
//! All six kinds create versions through one flow: fold and validate tags,
//! check the structure schema if one is bound, then under the item's lock
//! read the DAG, pick parents, and write the whole update as a single batch.
//! The kind handles supply a closure wrapping the [`RichVersion`] into their
//! version record.
//!
//! Parent selection:
//! - explicit parents must already be DAG members, else `NotFound`
//! - no parents means "append to the current state": the new version gets
//!   every current leaf as a parent, or becomes the sole root of an empty DAG
//!
//! Because each item's mutations are serialized, concurrent no-parent writers
//! chain after one another instead of forking, and the DAG keeps one leaf
//! unless callers fork on purpose with explicit parents.

use lode_core::dag::VersionHistoryDag;
use lode_core::error::{Error, Result};
use lode_core::kinds::EntityVersion;
use lode_core::rich_version::RichVersion;
use lode_core::statement::{Statement, StatementBatch};
use lode_core::tag::Tag;
use lode_core::types::{ItemId, VersionId};
use lode_core::version::VersionSuccessor;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use tracing::debug;

use super::items::fold_tags;
use super::Catalog;
use crate::id_gen::IdGenerator;
use crate::schema::check_structure_tags;

/// Most versions have zero or one parent; two covers a merge.
type Parents = SmallVec<[VersionId; 2]>;

/// The caller-supplied payload of a new version.
///
/// ```text
/// let spec = VersionSpec::new()
///     .with_tag(Tag::new("rows", 42i64))
///     .with_reference("s3://bucket/table")
///     .with_parameter("region", "eu-west-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersionSpec {
    tags: Vec<Tag>,
    structure_version_id: Option<VersionId>,
    reference: Option<String>,
    parameters: BTreeMap<String, String>,
}

impl VersionSpec {
    /// An empty payload.
    pub fn new() -> Self {
        VersionSpec::default()
    }

    /// Add one tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Add several tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Bind the version to a structure version; its tags will be validated
    /// against that schema before anything is written.
    pub fn with_structure(mut self, structure_version_id: VersionId) -> Self {
        self.structure_version_id = Some(structure_version_id);
        self
    }

    /// Point at the underlying data (URI, path).
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Add one access parameter for the reference.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// Decide parents and emit the DAG statements for one new version.
///
/// Statement order follows how the update reads: successors and their edges
/// first, then the membership row. The backend resolves references across the
/// whole batch, so the version insert the caller appends afterwards is free
/// to come last.
fn plan_dag_update(
    dag: &VersionHistoryDag,
    ids: &IdGenerator,
    new_version_id: VersionId,
    parent_ids: &[VersionId],
) -> Result<(Parents, StatementBatch)> {
    let mut parents = Parents::new();
    if parent_ids.is_empty() {
        parents.extend(dag.leaves());
    } else {
        for parent in parent_ids {
            if !dag.contains(*parent) {
                return Err(Error::not_found("parent version", parent));
            }
            if !parents.contains(parent) {
                parents.push(*parent);
            }
        }
    }

    let item_id = dag.item_id();
    let mut batch = StatementBatch::new();
    for parent in &parents {
        let successor_id = ids.next_successor_id();
        batch.append(Statement::InsertSuccessor(VersionSuccessor::new(
            successor_id,
            *parent,
            new_version_id,
        )));
        batch.append(Statement::AddDagEdge {
            item_id,
            successor_id,
        });
    }
    batch.append(Statement::AddDagMember {
        item_id,
        version_id: new_version_id,
    });
    Ok((parents, batch))
}

impl Catalog {
    /// Create a version of the item and wrap it into its version record.
    ///
    /// Validation that needs no lock (tags, limits, schema) runs first; the
    /// store is append-only, so a structure version that resolves before the
    /// lock is taken still exists after. The item lock then covers the
    /// read-DAG/pick-parents/execute window.
    pub(crate) fn create_entity_version<R>(
        &self,
        item_id: ItemId,
        spec: VersionSpec,
        parent_ids: &[VersionId],
        wrap: impl FnOnce(RichVersion) -> R,
    ) -> Result<R>
    where
        R: Clone,
        EntityVersion: From<R>,
    {
        let VersionSpec {
            tags,
            structure_version_id,
            reference,
            parameters,
        } = spec;

        let tags = fold_tags(&self.limits, tags)?;
        if let Some(reference) = reference.as_deref() {
            self.limits.validate_reference(reference)?;
        }

        if let Some(svid) = structure_version_id {
            let schema = match self.backend.version(svid)? {
                Some(EntityVersion::Structure(schema)) => schema,
                Some(other) => {
                    return Err(Error::invalid_argument(format!(
                        "version {svid} is a {} version, not a structure version",
                        other.kind()
                    )))
                }
                None => return Err(Error::not_found("structure version", svid)),
            };
            check_structure_tags(&schema, &tags)?;
        }

        let lock = self.locks.acquire(item_id);
        let _guard = lock.lock();

        let dag = self
            .backend
            .dag(item_id)?
            .ok_or_else(|| Error::not_found("item", item_id))?;

        let version_id = self.ids.next_version_id();
        let (parents, mut batch) = plan_dag_update(&dag, &self.ids, version_id, parent_ids)?;

        let rich = RichVersion::new(version_id, tags, structure_version_id, reference, parameters);
        let record = wrap(rich);
        batch.append(Statement::InsertVersion(EntityVersion::from(record.clone())));
        self.backend.execute(batch)?;

        debug!(
            target: "lode::catalog",
            item = %item_id,
            version = %version_id,
            parents = parents.len(),
            "Version created"
        );
        Ok(record)
    }
}
