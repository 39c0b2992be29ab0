//! Catalog integration test suite
//!
//! This suite exercises the catalog end to end through the public `lode`
//! surface: `CatalogClient` and the six store traits. Unit tests in the
//! member crates cover each layer in isolation; these tests cover the
//! behavior applications observe.
//!
//! ## Test Areas
//!
//! ### Core Semantics (fast, must pass)
//!
//! - `item_tests.rs` - item lifecycle, naming, lookup
//! - `version_dag_tests.rs` - history growth, forks, merges, leaves
//! - `schema_tests.rs` - structure binding and tag validation
//! - `reference_tests.rs` - endpoint and member checks across kinds
//!
//! ### Durability of Failure (fast, must pass)
//!
//! - `atomicity_tests.rs` - failed writes leave nothing behind
//!
//! ### Concurrency (medium)
//!
//! - `concurrency_tests.rs` - racing writers, serialized chaining
//!
//! ### Operational Surface (fast)
//!
//! - `config_tests.rs` - config files, backend rewiring, id watermarks
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test catalog_suite
//!
//! # Run one area
//! cargo test --test catalog_suite schema
//! cargo test --test catalog_suite concurrency
//! ```

// =============================================================================
// Core Semantics
// =============================================================================

mod item_tests;
mod version_dag_tests;
mod schema_tests;
mod reference_tests;

// =============================================================================
// Durability of Failure
// =============================================================================

mod atomicity_tests;

// =============================================================================
// Concurrency
// =============================================================================

mod concurrency_tests;

// =============================================================================
// Operational Surface
// =============================================================================

mod config_tests;

// =============================================================================
// Common test utilities
// =============================================================================

pub mod test_utils;
