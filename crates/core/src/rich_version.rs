//! Rich version records
//!
//! A `RichVersion` composes the base `Version` identity with the metadata
//! every entity version carries: tags, an optional binding to a structure
//! version that its tags were validated against, an optional reference to
//! the underlying data, and access parameters for that reference.

use crate::tag::Tag;
use crate::types::VersionId;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The metadata payload shared by every entity version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichVersion {
    version: Version,
    tags: BTreeMap<String, Tag>,
    structure_version_id: Option<VersionId>,
    reference: Option<String>,
    parameters: BTreeMap<String, String>,
}

impl RichVersion {
    /// A new rich version record.
    ///
    /// Tag validation and schema checks happen at the engine boundary before
    /// this record is persisted.
    pub fn new(
        id: VersionId,
        tags: BTreeMap<String, Tag>,
        structure_version_id: Option<VersionId>,
        reference: Option<String>,
        parameters: BTreeMap<String, String>,
    ) -> Self {
        RichVersion {
            version: Version::new(id),
            tags,
            structure_version_id,
            reference,
            parameters,
        }
    }

    /// The version id.
    pub fn id(&self) -> VersionId {
        self.version.id()
    }

    /// The base version record.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Version-scoped tags, keyed by tag key.
    pub fn tags(&self) -> &BTreeMap<String, Tag> {
        &self.tags
    }

    /// Look up one tag by key.
    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tags.get(key)
    }

    /// The structure version this version was validated against, if any.
    pub fn structure_version_id(&self) -> Option<VersionId> {
        self.structure_version_id
    }

    /// Optional pointer to the underlying data (URI, path).
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Access parameters for the reference.
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}
