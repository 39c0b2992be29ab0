//! Storage backends for the lode catalog.
//!
//! A backend implements [`lode_core::traits::Backend`]: atomic execution of
//! statement batches plus point reads for items, versions, successors, and
//! per-item version DAGs. The crate currently ships one backend,
//! [`MemoryBackend`], which holds every table in process memory.

#![warn(missing_docs)]

pub mod memory;

pub use memory::MemoryBackend;
