//! Catalog configuration via `lode.toml`
//!
//! A config file in the data directory instead of a builder: on first open a
//! default `lode.toml` is created, and changing settings means editing the
//! file and reopening. Unknown fields fall back to their defaults so old
//! files keep working.

use lode_core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the catalog data directory.
pub const CONFIG_FILE_NAME: &str = "lode.toml";

/// Storage backend selected by the `backend` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Process-local tables, nothing on disk.
    Memory,
}

/// Catalog configuration loaded from `lode.toml`.
///
/// # Example
///
/// ```toml
/// # Storage backend: "memory"
/// backend = "memory"
///
/// # Validate cross-entity references on write (default: true)
/// reference_checks = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Storage backend name: `"memory"`.
    #[serde(default = "default_backend_str")]
    pub backend: String,
    /// Reject writes whose cross-entity references are missing or of the
    /// wrong kind. Disable for bulk imports where the source is trusted.
    #[serde(default = "default_reference_checks")]
    pub reference_checks: bool,
}

fn default_backend_str() -> String {
    "memory".to_string()
}

fn default_reference_checks() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: default_backend_str(),
            reference_checks: default_reference_checks(),
        }
    }
}

impl CatalogConfig {
    /// Parse the backend string into a `BackendKind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string names no known backend.
    pub fn backend_kind(&self) -> Result<BackendKind> {
        match self.backend.as_str() {
            "memory" => Ok(BackendKind::Memory),
            other => Err(Error::config(format!(
                "Invalid backend '{other}' in lode.toml. Expected \"memory\"."
            ))),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lode catalog configuration
#
# Storage backend: "memory"
#   "memory" = process-local tables, contents are lost when the catalog closes
backend = "memory"

# Reference checks: validate cross-entity references on write (default: true)
#   Disable for bulk imports where the source already guarantees integrity.
reference_checks = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// names an unknown backend.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: CatalogConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the backend value eagerly
        config.backend_kind()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
