//! Tag validation against structure schemas
//!
//! When a version binds to a structure version, its tags must conform to the
//! declared attributes before anything is written: every declared key that
//! appears must carry a value of the declared type, and no undeclared key may
//! appear. Declared attributes the tags omit are allowed.

use lode_core::error::{Error, Result};
use lode_core::kinds::StructureVersion;
use lode_core::tag::Tag;
use std::collections::BTreeMap;

/// Check `tags` against the attributes declared by `schema`.
///
/// Violations, in the order they are detected:
/// - the tag map is empty (binding to a schema and supplying nothing is
///   treated as a mistake, not vacuous conformance)
/// - a tag key the schema does not declare
/// - a valueless tag for a declared key
/// - a value whose type differs from the declared type
pub fn check_structure_tags(schema: &StructureVersion, tags: &BTreeMap<String, Tag>) -> Result<()> {
    let schema_id = schema.rich().id();
    if tags.is_empty() {
        return Err(Error::schema_violation(format!(
            "structure version {schema_id} declares attributes but no tags were supplied"
        )));
    }
    for (key, tag) in tags {
        let Some(declared) = schema.attribute(key) else {
            return Err(Error::schema_violation(format!(
                "tag key '{key}' is not declared by structure version {schema_id}"
            )));
        };
        let Some(value) = tag.value() else {
            return Err(Error::schema_violation(format!(
                "tag '{key}' must carry a {declared} value to conform to structure version {schema_id}"
            )));
        };
        if value.value_type() != declared {
            return Err(Error::schema_violation(format!(
                "tag '{key}' is {} but structure version {schema_id} declares {declared}",
                value.value_type()
            )));
        }
    }
    Ok(())
}
