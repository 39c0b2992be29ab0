//! Tags and tag values
//!
//! This module defines:
//! - ValueType: the declared type of a tag value or structure attribute
//! - TagValue: a typed tag value
//! - Tag: a key with an optional typed value
//!
//! ## Type Rules
//!
//! - Four value types only: Bool, Int, Float, String
//! - No implicit coercions: `Int(1)` is never equal to `Float(1.0)`
//! - Float equality follows IEEE-754: `NaN != NaN`, `-0.0 == 0.0`
//! - A tag may carry no value at all (a bare label)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ValueType
// ============================================================================

/// Declared type of a tag value or a structure attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point (IEEE-754)
    Float,
    /// UTF-8 string
    String,
}

impl ValueType {
    /// The type name as used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TagValue
// ============================================================================

/// A typed tag value.
///
/// ## Type Equality
///
/// Different variants are never equal, even when the contained values would
/// compare equal after conversion: `Int(1) != Float(1.0)`. Float equality is
/// IEEE-754, so `Float(f64::NAN) != Float(f64::NAN)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TagValue {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for TagValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TagValue::Bool(a), TagValue::Bool(b)) => a == b,
            (TagValue::Int(a), TagValue::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (TagValue::Float(a), TagValue::Float(b)) => a == b,
            (TagValue::String(a), TagValue::String(b)) => a == b,
            // Different types are never equal
            _ => false,
        }
    }
}

impl TagValue {
    /// The `ValueType` this value inhabits.
    pub fn value_type(&self) -> ValueType {
        match self {
            TagValue::Bool(_) => ValueType::Bool,
            TagValue::Int(_) => ValueType::Int,
            TagValue::Float(_) => ValueType::Float,
            TagValue::String(_) => ValueType::String,
        }
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, TagValue::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, TagValue::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, TagValue::Float(_))
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, TagValue::String(_))
    }

    /// Get as bool if this is a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TagValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        TagValue::Bool(b)
    }
}

impl From<i64> for TagValue {
    fn from(i: i64) -> Self {
        TagValue::Int(i)
    }
}

impl From<f64> for TagValue {
    fn from(f: f64) -> Self {
        TagValue::Float(f)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::String(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::String(s)
    }
}

// ============================================================================
// Tag
// ============================================================================

/// A metadata tag: a key with an optional typed value.
///
/// Tags annotate both items and versions. A tag without a value acts as a
/// bare label. When both `value` and `value_type` are present they must
/// agree; `validate` enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    key: String,
    value: Option<TagValue>,
    value_type: Option<ValueType>,
}

impl Tag {
    /// A tag whose declared type is inferred from the value.
    pub fn new(key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        let value = value.into();
        let value_type = value.value_type();
        Tag {
            key: key.into(),
            value: Some(value),
            value_type: Some(value_type),
        }
    }

    /// A bare label: no value, no declared type.
    pub fn label(key: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: None,
            value_type: None,
        }
    }

    /// A tag with an explicit declared type, possibly without a value.
    pub fn typed(key: impl Into<String>, value: Option<TagValue>, value_type: ValueType) -> Self {
        Tag {
            key: key.into(),
            value,
            value_type: Some(value_type),
        }
    }

    /// The tag key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The tag value, if any.
    pub fn value(&self) -> Option<&TagValue> {
        self.value.as_ref()
    }

    /// The declared value type, if any.
    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when a value is present alongside a declared
    /// type it does not inhabit.
    pub fn validate(&self) -> Result<()> {
        if let (Some(value), Some(declared)) = (&self.value, self.value_type) {
            let actual = value.value_type();
            if actual != declared {
                return Err(Error::type_mismatch(&self.key, declared, actual));
            }
        }
        Ok(())
    }
}
