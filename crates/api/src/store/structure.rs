//! Structure store operations

use std::collections::BTreeMap;

use lode_core::dag::VersionHistoryDag;
use lode_core::kinds::{Structure, StructureVersion};
use lode_core::tag::{Tag, ValueType};
use lode_core::types::{ItemId, VersionId};
use lode_core::Result;
use lode_engine::VersionSpec;

/// Structure store operations
///
/// A structure is a versioned schema: each structure version declares
/// attribute names and the tag value types they require. Versions of
/// other entities can bind a structure version, and their tags are then
/// validated against it at write time.
///
/// ## Contract
///
/// - Names are unique within the kind; lookups are by name or item id
/// - A structure version's attribute map is immutable; schema evolution
///   means writing a new structure version
/// - Writes are atomic: a failed call leaves no partial rows behind
///
/// ## Error Handling
///
/// | Condition | Error |
/// |-----------|-------|
/// | Name already taken within the kind | `AlreadyExists` |
/// | Unknown name, id, or parent version | `NotFound` |
/// | Invalid attribute name | `InvalidArgument` |
/// | Tags violate a bound structure schema | `SchemaViolation` |
pub trait StructureStore {
    /// Create a structure
    ///
    /// ## Errors
    ///
    /// - `AlreadyExists`: a structure with this name exists
    /// - `InvalidArgument`: empty or oversized name, malformed tags
    fn structure_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<Structure>;

    /// Retrieve a structure by name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no structure with this name
    fn structure_get(&self, name: &str) -> Result<Structure>;

    /// Retrieve a structure by item id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no structure with this id
    fn structure_get_by_id(&self, id: ItemId) -> Result<Structure>;

    /// Create a new version of the named structure
    ///
    /// ## Semantics
    ///
    /// - `attributes` maps declared tag keys to required value types;
    ///   an empty map declares a schema no tag map can satisfy
    /// - Attribute names follow the same rules as tag keys
    /// - A structure version can itself bind another structure version
    ///   through `spec`, schemas validating schemas
    ///
    /// ## Errors
    ///
    /// - `NotFound`: unknown structure, parent, or bound structure version
    /// - `InvalidArgument`: invalid attribute name or oversized map
    /// - `SchemaViolation`: the spec's tags do not conform to a schema
    ///   bound through `spec`
    fn structure_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        attributes: BTreeMap<String, ValueType>,
        parent_ids: &[VersionId],
    ) -> Result<StructureVersion>;

    /// Retrieve a structure version by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no structure version with this id
    fn structure_version(&self, id: VersionId) -> Result<StructureVersion>;

    /// The current version leaves of the named structure, ascending by id
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no structure with this name
    fn structure_leaves(&self, name: &str) -> Result<Vec<VersionId>>;

    /// The full version history DAG of the named structure
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no structure with this name
    fn structure_history(&self, name: &str) -> Result<VersionHistoryDag>;
}

// =============================================================================
// Implementation
// =============================================================================

use super::impl_::CatalogClient;

impl StructureStore for CatalogClient {
    fn structure_create(
        &self,
        name: &str,
        source_key: Option<&str>,
        tags: Vec<Tag>,
    ) -> Result<Structure> {
        self.structures().create(name, source_key, tags)
    }

    fn structure_get(&self, name: &str) -> Result<Structure> {
        self.structures().get(name)
    }

    fn structure_get_by_id(&self, id: ItemId) -> Result<Structure> {
        self.structures().get_by_id(id)
    }

    fn structure_create_version(
        &self,
        name: &str,
        spec: VersionSpec,
        attributes: BTreeMap<String, ValueType>,
        parent_ids: &[VersionId],
    ) -> Result<StructureVersion> {
        self.structures().create_version(name, spec, attributes, parent_ids)
    }

    fn structure_version(&self, id: VersionId) -> Result<StructureVersion> {
        self.structures().version(id)
    }

    fn structure_leaves(&self, name: &str) -> Result<Vec<VersionId>> {
        self.structures().leaves(name)
    }

    fn structure_history(&self, name: &str) -> Result<VersionHistoryDag> {
        self.structures().history(name)
    }
}
