//! Loose resource storage
//!
//! Loose resources are individually addressable assets that do not live in a
//! container. The facade only talks to them through [`ResourceStore`];
//! [`ResourceCache`](crate::cache::ResourceCache) is the bundled implementation,
//! reading through a [`ResourceSource`].

pub mod source;

use std::any::TypeId;

use crate::{AssetObject, Result};

pub use source::{FsResourceSource, MemoryResourceSource};

/// Store of loose, ungrouped assets
///
/// Progress values are in `[0, 1]`, or `-1.0` when the store knows nothing
/// about the requested path.
#[async_trait::async_trait]
pub trait ResourceStore: Send + Sync {
    /// Non-blocking cache probe
    fn get_cached(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject>;

    /// Blocking fetch-and-cache
    fn load(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject>;

    /// Async fetch-and-cache
    async fn load_async(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject>;

    /// Drop the cached object for `path`
    fn unload(&self, path: &str);

    /// Progress of one path, `-1.0` if unknown
    fn progress(&self, path: &str) -> f32;

    /// Aggregate progress, `-1.0` if nothing is tracked
    fn overall_progress(&self) -> f32;
}

/// Raw access to loose resources, without caching
#[async_trait::async_trait]
pub trait ResourceSource: Send + Sync + 'static {
    /// Read the object stored at `path`
    fn read(&self, path: &str) -> Result<AssetObject>;

    /// Async read; defaults to the blocking read
    async fn read_async(&self, path: &str) -> Result<AssetObject> {
        self.read(path)
    }
}
