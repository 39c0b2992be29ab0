//! Error types for the catalog
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::tag::ValueType;
use crate::types::EntityKind;
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced item, version, or successor does not exist
    #[error("{what} not found: {key}")]
    NotFound {
        /// What was looked up ("node", "structure version", ...)
        what: String,
        /// The name or id that failed to resolve
        key: String,
    },

    /// An item with this name already exists within the kind
    #[error("{kind} named '{name}' already exists")]
    AlreadyExists {
        /// Kind of the conflicting item
        kind: EntityKind,
        /// The contested name
        name: String,
    },

    /// A tag value does not inhabit its declared type
    #[error("tag '{key}' has type {actual}, expected {expected}")]
    TypeMismatch {
        /// Tag key
        key: String,
        /// Declared type
        expected: ValueType,
        /// Type of the actual value
        actual: ValueType,
    },

    /// Version tags do not satisfy the bound structure schema
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// Malformed input (empty name, oversized tag, wrong-kind reference, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Storage layer failure; the whole batch was rejected
    #[error("storage error: {0}")]
    Storage(String),

    /// Unreadable or invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// A lookup that resolved nothing.
    pub fn not_found(what: impl Into<String>, key: impl fmt::Display) -> Self {
        Error::NotFound {
            what: what.into(),
            key: key.to_string(),
        }
    }

    /// A name collision within a kind.
    pub fn already_exists(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    /// A tag value that disagrees with its declared type.
    pub fn type_mismatch(key: impl Into<String>, expected: ValueType, actual: ValueType) -> Self {
        Error::TypeMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// A structure schema check failure.
    pub fn schema_violation(msg: impl Into<String>) -> Self {
        Error::SchemaViolation(msg.into())
    }

    /// Malformed input.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// A storage layer failure.
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// A configuration failure.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True when this is a `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True when this is an `AlreadyExists`.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }

    /// True when this is a `SchemaViolation`.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Error::SchemaViolation(_))
    }

    /// True when this is a `Storage` error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
