//! Bundle storage primitives
//!
//! A [`BundleSource`] knows how to fetch one container's content and which
//! containers it depends on. The store above it handles caching, dedup and
//! reference counting.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::runtime::yield_now;
use crate::{AssetObject, Result, VfsError};

/// One object inside a fetched container
#[derive(Debug, Clone)]
pub struct BundleEntry {
    /// In-container asset path
    pub path: String,
    pub object: AssetObject,
}

/// Fetched, not yet expanded, container content
#[derive(Debug, Clone, Default)]
pub struct BundleContent {
    entries: Vec<BundleEntry>,
}

impl BundleContent {
    pub fn new(entries: Vec<BundleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Backing store for containers
#[async_trait::async_trait]
pub trait BundleSource: Send + Sync + 'static {
    /// Names of the containers `container` depends on, same origin
    fn dependencies(&self, container: &str) -> Vec<String>;

    /// Fetch container content, blocking the caller
    fn fetch_blocking(&self, key: &str, container: &str) -> Result<BundleContent>;

    /// Fetch container content asynchronously; defaults to the blocking fetch
    async fn fetch(&self, key: &str, container: &str) -> Result<BundleContent> {
        self.fetch_blocking(key, container)
    }
}

type ObjectFactory = Arc<dyn Fn() -> AssetObject + Send + Sync>;

/// Builder for one in-memory container
#[derive(Default, Clone)]
pub struct MemoryBundle {
    dependencies: Vec<String>,
    entries: Vec<(String, ObjectFactory)>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object; every fetch hands out a fresh clone of `value`
    pub fn with_object<T>(mut self, path: impl Into<String>, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries
            .push((path.into(), Arc::new(move || AssetObject::new(value.clone()))));
        self
    }

    pub fn with_dependency(mut self, container: impl Into<String>) -> Self {
        self.dependencies.push(container.into());
        self
    }
}

/// In-memory [`BundleSource`], keyed by container name
///
/// Serves every origin the same content. Async fetches suspend once before
/// completing.
#[derive(Default, Clone)]
pub struct MemoryBundleSource {
    bundles: Arc<RwLock<HashMap<String, MemoryBundle>>>,
    failing: Arc<RwLock<HashSet<String>>>,
}

impl MemoryBundleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, container: impl Into<String>, bundle: MemoryBundle) {
        self.bundles.write().insert(container.into(), bundle);
    }

    pub fn with(self, container: impl Into<String>, bundle: MemoryBundle) -> Self {
        self.insert(container, bundle);
        self
    }

    /// Make fetches of `key` fail until [`MemoryBundleSource::restore`]
    pub fn fail(&self, key: impl Into<String>) {
        self.failing.write().insert(key.into());
    }

    pub fn restore(&self, key: &str) {
        self.failing.write().remove(key);
    }
}

#[async_trait::async_trait]
impl BundleSource for MemoryBundleSource {
    fn dependencies(&self, container: &str) -> Vec<String> {
        self.bundles
            .read()
            .get(container)
            .map(|bundle| bundle.dependencies.clone())
            .unwrap_or_default()
    }

    fn fetch_blocking(&self, key: &str, container: &str) -> Result<BundleContent> {
        if self.failing.read().contains(key) {
            return Err(anyhow::anyhow!("fetch of {key} refused").into());
        }
        let bundles = self.bundles.read();
        let bundle = bundles
            .get(container)
            .ok_or_else(|| VfsError::NotFound(key.to_string()))?;
        let entries = bundle
            .entries
            .iter()
            .map(|(path, factory)| BundleEntry {
                path: path.clone(),
                object: factory(),
            })
            .collect();
        Ok(BundleContent::new(entries))
    }

    async fn fetch(&self, key: &str, container: &str) -> Result<BundleContent> {
        yield_now().await;
        self.fetch_blocking(key, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MemoryBundleSource {
        MemoryBundleSource::new().with(
            "b1",
            MemoryBundle::new()
                .with_object("a.prefab", 1u32)
                .with_object("b.prefab", 2u32)
                .with_dependency("shared"),
        )
    }

    #[test]
    fn test_dependencies() {
        let source = source();
        assert_eq!(source.dependencies("b1"), ["shared"]);
        assert!(source.dependencies("unknown").is_empty());
    }

    #[test]
    fn test_fetch_builds_entries() {
        let content = source().fetch_blocking("/bundles/b1", "b1").unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content.entries()[1].path, "b.prefab");
    }

    #[test]
    fn test_fetch_failures() {
        let source = source();
        assert!(matches!(
            source.fetch_blocking("/bundles/zz", "zz"),
            Err(VfsError::NotFound(_))
        ));

        source.fail("/bundles/b1");
        assert!(matches!(
            source.fetch_blocking("/bundles/b1", "b1"),
            Err(VfsError::Source(_))
        ));
        source.restore("/bundles/b1");
        assert!(futures::executor::block_on(source.fetch("/bundles/b1", "b1")).is_ok());
    }
}
