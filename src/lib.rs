//! asset_vfs - Asset virtual filesystem with bundle containers
//!
//! # Features
//! - Logical names resolved to loose resources or bundled containers
//! - Ref-counted containers with dependency graphs
//! - Deduplicated async fetches (one fetch per container, however many waiters)
//! - Load progress aggregated across every interpretation of a name
//! - Editor bypass serving bundled names from an authoring index
//! - Async runtime abstraction (Tokio, custom)
//!
//! # Quick Start
//!
//! ```
//! use asset_vfs::{
//!     AccessMode, AssetManager, MappingTables, MemoryBundle, MemoryBundleSource,
//!     MemoryResourceSource, ResourceCache, VfsConfig,
//! };
//!
//! let tables = MappingTables::new()
//!     .with_bundle("enemy", "b1", ["Assets/AssetBundles/b1/enemy.prefab"]);
//! let bundles = MemoryBundleSource::new().with(
//!     "b1",
//!     MemoryBundle::new().with_object("Assets/AssetBundles/b1/enemy.prefab", 42u32),
//! );
//! let resources = ResourceCache::new(MemoryResourceSource::new());
//!
//! let manager = AssetManager::new(VfsConfig::default(), tables, bundles, resources);
//! let enemy = manager.load::<u32>("enemy", AccessMode::Unknown);
//! assert_eq!(enemy.as_deref(), Some(&42));
//! ```
//!
//! # Feature Flags
//!
//! - `runtime-tokio`: Enable the Tokio spawner and `tokio::fs` reads

// Core modules
pub mod bundle;
pub mod cache;
pub mod manager;
pub mod resolver;
pub mod resource;
pub mod runtime;

// Support modules
pub mod backend;
pub mod config;
pub mod editor;
pub mod location;
pub mod mapping;
pub mod object;

// Error types
mod error;
pub use error::{Result, VfsError};

// Re-export facade and configuration
pub use config::VfsConfig;
pub use manager::{AssetManager, PROGRESS_SENTINEL};
pub use mapping::{BundleMapping, MappingTables};

// Re-export resolution types
pub use location::{AccessMode, AssetKind, AssetLocation, Origin};
pub use resolver::PathResolver;

// Re-export object types
pub use object::{AssetObject, RawAsset};

// Re-export store types
pub use backend::BundleBackend;
pub use bundle::{
    BundleContent, BundleEntry, BundleSource, ContainerStatus, ContainerStore, LoadState,
    MemoryBundle, MemoryBundleSource,
};
pub use cache::metrics::{AssetMetrics, AssetMetricsHandle};
pub use cache::ResourceCache;
pub use editor::{AuthoringIndex, EditorBypass, MemoryAuthoringIndex};
pub use resource::{FsResourceSource, MemoryResourceSource, ResourceSource, ResourceStore};

// Re-export runtime types
pub use runtime::mock::MockSpawner;
#[cfg(feature = "runtime-tokio")]
pub use runtime::tokio_impl::TokioSpawner;
pub use runtime::{AsyncSpawner, JoinHandle};

// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
