//! Size limits for names, tags, and reference payloads
//!
//! This module defines the size limits the engine enforces at its API
//! boundary. Violations result in `InvalidArgument` errors before any
//! statement is built.

use crate::error::{Error, Result};

/// Size limits for catalog inputs
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum item name length in bytes (default: 1024)
    pub max_name_bytes: usize,

    /// Maximum tag key length in bytes (default: 256)
    pub max_tag_key_bytes: usize,

    /// Maximum tag string value length in bytes (default: 64KB)
    pub max_tag_string_bytes: usize,

    /// Maximum reference length in bytes (default: 4096)
    pub max_reference_bytes: usize,

    /// Maximum version ids per graph or lineage graph version (default: 100k)
    pub max_collection_ids: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_name_bytes: 1024,
            max_tag_key_bytes: 256,
            max_tag_string_bytes: 64 * 1024, // 64KB
            max_reference_bytes: 4096,
            max_collection_ids: 100_000,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// Useful for unit tests that exercise limit enforcement without
    /// building large inputs.
    pub fn with_small_limits() -> Self {
        Limits {
            max_name_bytes: 16,
            max_tag_key_bytes: 8,
            max_tag_string_bytes: 32,
            max_reference_bytes: 32,
            max_collection_ids: 4,
        }
    }

    /// Validate an item name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the name is empty or too long.
    pub fn validate_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid_argument("item name must not be empty"));
        }
        if name.len() > self.max_name_bytes {
            return Err(Error::invalid_argument(format!(
                "item name is {} bytes, limit is {}",
                name.len(),
                self.max_name_bytes
            )));
        }
        Ok(())
    }

    /// Validate a tag key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the key is empty or too long.
    pub fn validate_tag_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_argument("tag key must not be empty"));
        }
        if key.len() > self.max_tag_key_bytes {
            return Err(Error::invalid_argument(format!(
                "tag key '{}' is {} bytes, limit is {}",
                &key[..key.len().min(32)],
                key.len(),
                self.max_tag_key_bytes
            )));
        }
        Ok(())
    }

    /// Validate a tag string value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the string exceeds the limit.
    pub fn validate_tag_string(&self, key: &str, s: &str) -> Result<()> {
        if s.len() > self.max_tag_string_bytes {
            return Err(Error::invalid_argument(format!(
                "tag '{}' value is {} bytes, limit is {}",
                key,
                s.len(),
                self.max_tag_string_bytes
            )));
        }
        Ok(())
    }

    /// Validate a version reference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the reference exceeds the limit.
    pub fn validate_reference(&self, reference: &str) -> Result<()> {
        if reference.len() > self.max_reference_bytes {
            return Err(Error::invalid_argument(format!(
                "reference is {} bytes, limit is {}",
                reference.len(),
                self.max_reference_bytes
            )));
        }
        Ok(())
    }

    /// Validate a collection of version ids (graph and lineage graph payloads).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the collection exceeds the limit.
    pub fn validate_collection_len(&self, len: usize) -> Result<()> {
        if len > self.max_collection_ids {
            return Err(Error::invalid_argument(format!(
                "version collection has {} ids, limit is {}",
                len, self.max_collection_ids
            )));
        }
        Ok(())
    }
}
