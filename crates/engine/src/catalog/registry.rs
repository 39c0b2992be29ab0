//! Global catalog registry for singleton management
//!
//! Ensures only one Catalog instance exists per filesystem path.
//! Uses weak references to allow cleanup when all references are dropped.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Weak;

use super::Catalog;

// =============================================================================
// Global Catalog Registry
// =============================================================================
//
// Opening the same data directory twice returns the same Catalog instance.
// Two independent instances over one directory would each seed their own id
// counter and hand out per-item locks nobody else honors, so the registry is
// what makes path-based opens safe across threads.
//
// Weak references let a catalog be dropped once every caller is done with it;
// the next open at that path builds a fresh instance.

/// Global registry of open catalogs (path -> weak reference).
pub static OPEN_CATALOGS: Lazy<Mutex<HashMap<PathBuf, Weak<Catalog>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));
