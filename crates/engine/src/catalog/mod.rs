//! Catalog struct and open logic
//!
//! This module provides the main Catalog struct that orchestrates:
//! - Backend construction from `lode.toml`
//! - Id counter seeding from the backend's high-water mark
//! - Per-item lock registry
//! - Generic item and version operations shared by every entity kind
//!
//! Kind-specific surfaces (nodes, edges, graphs, structures, lineage edges,
//! lineage graphs) live in [`crate::kinds`] and delegate to the generic
//! operations defined here.

pub mod config;
mod items;
mod registry;
mod versions;

pub use config::{BackendKind, CatalogConfig, CONFIG_FILE_NAME};
pub use registry::OPEN_CATALOGS;
pub use versions::VersionSpec;

use crate::id_gen::IdGenerator;
use crate::kinds::{Edges, Graphs, LineageEdges, LineageGraphs, Nodes, Structures};
use crate::locks::ItemLockRegistry;
use lode_core::error::Result;
use lode_core::limits::Limits;
use lode_core::traits::Backend;
use lode_storage::MemoryBackend;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Catalog Struct
// ============================================================================

/// A versioned metadata catalog.
///
/// The catalog stores named entities of six kinds, each owning an append-only
/// DAG of immutable versions. Create one with [`Catalog::open`] for a
/// directory-backed instance or [`Catalog::in_memory`] for tests and
/// ephemeral use, then work through the kind handles:
///
/// ```text
/// use lode_engine::{Catalog, VersionSpec};
///
/// let catalog = Catalog::in_memory()?;
/// let nodes = catalog.nodes();
/// nodes.create("traffic", None, vec![])?;
/// nodes.create_version("traffic", VersionSpec::new(), &[])?;
/// ```
pub struct Catalog {
    /// Data directory path (empty for in-memory catalogs)
    data_dir: PathBuf,

    /// Statement execution and point reads
    backend: Arc<dyn Backend>,

    /// One monotonic id space shared by items, versions, and successors
    ids: IdGenerator,

    /// Per-item mutation locks serializing version creation
    locks: ItemLockRegistry,

    /// Configuration (mirrors lode.toml)
    config: CatalogConfig,

    /// Structural limits applied before any statement is built
    limits: Limits,
}

impl Catalog {
    /// Open the catalog at the given path.
    ///
    /// Reads `lode.toml` from the data directory to pick the backend. If no
    /// config file exists, creates one with defaults.
    ///
    /// # Thread Safety
    ///
    /// Opening the same path from multiple threads returns the same
    /// `Arc<Catalog>`:
    ///
    /// ```text
    /// let a = Catalog::open("/data")?;
    /// let b = Catalog::open("/data")?;  // Same Arc as a
    /// assert!(Arc::ptr_eq(&a, &b));
    /// ```
    ///
    /// Two independent instances over one directory would each seed their
    /// own id counter, so the registry is load-bearing, not a convenience.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        // The file is only created when absent; a hand-edited config is
        // parsed and left untouched.
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        CatalogConfig::write_default_if_missing(&config_path)?;
        let cfg = CatalogConfig::from_file(&config_path)?;

        Self::open_registered(data_dir, cfg)
    }

    /// Open the catalog at the given path with an explicit configuration.
    ///
    /// This is the programmatic alternative to editing `lode.toml` by hand.
    /// The supplied config is written to `lode.toml` so that subsequent
    /// [`Catalog::open`] calls pick up the same settings. If a catalog is
    /// already open at this path, the existing instance is returned and the
    /// supplied config only affects the file.
    pub fn open_with_config<P: AsRef<Path>>(path: P, cfg: CatalogConfig) -> Result<Arc<Self>> {
        let data_dir = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        // Validate before writing anything.
        cfg.backend_kind()?;
        cfg.write_to_file(&data_dir.join(CONFIG_FILE_NAME))?;

        Self::open_registered(data_dir, cfg)
    }

    /// Return the registered instance for this path, or assemble and
    /// register a new one.
    fn open_registered(data_dir: PathBuf, cfg: CatalogConfig) -> Result<Arc<Self>> {
        // Canonicalize for consistent registry keys.
        let canonical_path = data_dir.canonicalize()?;

        // Hold the registry lock across check and construction so two
        // threads opening the same path cannot both build an instance.
        let mut registry = OPEN_CATALOGS.lock();
        if let Some(weak) = registry.get(&canonical_path) {
            if let Some(catalog) = weak.upgrade() {
                info!(target: "lode::catalog", path = ?canonical_path, "Returning existing catalog instance");
                return Ok(catalog);
            }
        }

        let catalog = Self::assemble(canonical_path.clone(), cfg)?;
        registry.insert(canonical_path, Arc::downgrade(&catalog));
        Ok(catalog)
    }

    /// Create a catalog that lives entirely in process memory.
    ///
    /// No files are created and nothing survives the last `Arc` being
    /// dropped. In-memory catalogs are never registered: each call returns
    /// an independent instance, which is what tests want.
    pub fn in_memory() -> Result<Arc<Self>> {
        Self::with_backend(Arc::new(MemoryBackend::new()), CatalogConfig::default())
    }

    /// Wire a catalog onto an existing backend.
    ///
    /// The id counter is seeded from the backend's high-water mark, so a
    /// backend that already holds rows keeps allocating past them. The
    /// instance is not registered under any path.
    pub fn with_backend(backend: Arc<dyn Backend>, cfg: CatalogConfig) -> Result<Arc<Self>> {
        cfg.backend_kind()?;
        let floor = backend.max_assigned_id()?.saturating_add(1);
        Ok(Arc::new(Catalog {
            data_dir: PathBuf::new(),
            backend,
            ids: IdGenerator::new(floor),
            locks: ItemLockRegistry::new(),
            config: cfg,
            limits: Limits::default(),
        }))
    }

    /// Build a new instance for `data_dir` per the already-validated config.
    fn assemble(data_dir: PathBuf, cfg: CatalogConfig) -> Result<Arc<Self>> {
        let backend: Arc<dyn Backend> = match cfg.backend_kind()? {
            BackendKind::Memory => Arc::new(MemoryBackend::new()),
        };
        let floor = backend.max_assigned_id()?.saturating_add(1);

        info!(
            target: "lode::catalog",
            path = ?data_dir,
            backend = %cfg.backend,
            reference_checks = cfg.reference_checks,
            next_id = floor,
            "Catalog open"
        );

        Ok(Arc::new(Catalog {
            data_dir,
            backend,
            ids: IdGenerator::new(floor),
            locks: ItemLockRegistry::new(),
            config: cfg,
            limits: Limits::default(),
        }))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The data directory, empty for in-memory catalogs.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether this catalog has no backing directory.
    pub fn is_in_memory(&self) -> bool {
        self.data_dir.as_os_str().is_empty()
    }

    /// The active configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The structural limits this catalog enforces.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub(crate) fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub(crate) fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    pub(crate) fn locks(&self) -> &ItemLockRegistry {
        &self.locks
    }

    // ========================================================================
    // Kind Handles
    // ========================================================================

    /// Handle over nodes.
    pub fn nodes(self: &Arc<Self>) -> Nodes {
        Nodes::new(Arc::clone(self))
    }

    /// Handle over edges.
    pub fn edges(self: &Arc<Self>) -> Edges {
        Edges::new(Arc::clone(self))
    }

    /// Handle over graphs.
    pub fn graphs(self: &Arc<Self>) -> Graphs {
        Graphs::new(Arc::clone(self))
    }

    /// Handle over structures.
    pub fn structures(self: &Arc<Self>) -> Structures {
        Structures::new(Arc::clone(self))
    }

    /// Handle over lineage edges.
    pub fn lineage_edges(self: &Arc<Self>) -> LineageEdges {
        LineageEdges::new(Arc::clone(self))
    }

    /// Handle over lineage graphs.
    pub fn lineage_graphs(self: &Arc<Self>) -> LineageGraphs {
        LineageGraphs::new(Arc::clone(self))
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("data_dir", &self.data_dir)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
