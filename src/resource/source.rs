//! Built-in resource sources

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::ResourceSource;
use crate::object::RawAsset;
use crate::runtime::yield_now;
use crate::{AssetObject, Result, VfsError};

type ObjectFactory = Arc<dyn Fn() -> AssetObject + Send + Sync>;

/// In-memory resource source
///
/// Every read builds a fresh object, so a reload after unload is observable.
/// Async reads suspend once before completing.
#[derive(Default, Clone)]
pub struct MemoryResourceSource {
    entries: Arc<RwLock<HashMap<String, ObjectFactory>>>,
}

impl MemoryResourceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under `path`; reads hand out clones of it
    pub fn insert<T>(&self, path: impl Into<String>, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries
            .write()
            .insert(path.into(), Arc::new(move || AssetObject::new(value.clone())));
    }

    pub fn with<T>(self, path: impl Into<String>, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.insert(path, value);
        self
    }

    pub fn remove(&self, path: &str) {
        self.entries.write().remove(path);
    }
}

#[async_trait::async_trait]
impl ResourceSource for MemoryResourceSource {
    fn read(&self, path: &str) -> Result<AssetObject> {
        let factory = self
            .entries
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        Ok(factory())
    }

    async fn read_async(&self, path: &str) -> Result<AssetObject> {
        yield_now().await;
        self.read(path)
    }
}

/// Reads loose resources as [`RawAsset`] bytes from a directory
#[derive(Debug, Clone)]
pub struct FsResourceSource {
    root: PathBuf,
}

impl FsResourceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait::async_trait]
impl ResourceSource for FsResourceSource {
    fn read(&self, path: &str) -> Result<AssetObject> {
        let bytes = std::fs::read(self.root.join(path))?;
        Ok(AssetObject::new(RawAsset::new(path, bytes)))
    }

    #[cfg(feature = "runtime-tokio")]
    async fn read_async(&self, path: &str) -> Result<AssetObject> {
        let bytes = tokio::fs::read(self.root.join(path)).await?;
        Ok(AssetObject::new(RawAsset::new(path, bytes)))
    }
}
