//! Authoring-time bypass for bundled assets
//!
//! While editing, bundled assets are not packaged yet. [`EditorBypass`] serves
//! bundled locations straight from an [`AuthoringIndex`]: no containers, no
//! reference counting, no dependency graph. Async loads complete on first poll
//! and directory loads do nothing.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::backend::BundleBackend;
use crate::location::AssetLocation;
use crate::AssetObject;

/// The authoring asset database
pub trait AuthoringIndex: Send + Sync {
    /// Concrete paths registered for `logical_name` inside `container`, in order
    fn resolve_paths(&self, container: &str, logical_name: &str) -> Vec<String>;

    /// Load the asset stored at `path`
    fn load_at_path(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject>;
}

/// [`BundleBackend`] over an [`AuthoringIndex`]
#[derive(Clone)]
pub struct EditorBypass {
    index: Arc<dyn AuthoringIndex>,
}

impl EditorBypass {
    pub fn new(index: impl AuthoringIndex + 'static) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    pub fn index(&self) -> &dyn AuthoringIndex {
        self.index.as_ref()
    }
}

#[async_trait::async_trait]
impl BundleBackend for EditorBypass {
    fn load_object(
        &self,
        name: &str,
        location: &AssetLocation,
        ty: Option<TypeId>,
    ) -> Option<AssetObject> {
        let paths = self.index.resolve_paths(location.container_name(), name);
        let Some(path) = paths.first() else {
            log::debug!(
                "No authoring path for {name:?} in container {:?}",
                location.container_name()
            );
            return None;
        };
        self.index.load_at_path(path, ty)
    }

    async fn load_object_async(
        &self,
        name: &str,
        location: &AssetLocation,
        ty: Option<TypeId>,
    ) -> Option<AssetObject> {
        self.load_object(name, location, ty)
    }

    fn load_dir(&self, _location: &AssetLocation, _bundles_prefix: &str) -> usize {
        0
    }

    async fn load_dir_async(&self, _location: &AssetLocation, _bundles_prefix: &str) -> usize {
        0
    }
}

type ObjectFactory = Arc<dyn Fn() -> AssetObject + Send + Sync>;

/// In-memory [`AuthoringIndex`]
#[derive(Default, Clone)]
pub struct MemoryAuthoringIndex {
    paths: Arc<RwLock<HashMap<(String, String), Vec<String>>>>,
    assets: Arc<RwLock<HashMap<String, ObjectFactory>>>,
}

impl MemoryAuthoringIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` at `path` and map `(container, logical_name)` to it
    pub fn insert<T>(
        &self,
        container: impl Into<String>,
        logical_name: impl Into<String>,
        path: impl Into<String>,
        value: T,
    ) where
        T: Clone + Send + Sync + 'static,
    {
        let path = path.into();
        self.paths
            .write()
            .entry((container.into(), logical_name.into()))
            .or_default()
            .push(path.clone());
        self.assets
            .write()
            .insert(path, Arc::new(move || AssetObject::new(value.clone())));
    }

    pub fn with<T>(
        self,
        container: impl Into<String>,
        logical_name: impl Into<String>,
        path: impl Into<String>,
        value: T,
    ) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.insert(container, logical_name, path, value);
        self
    }
}

impl AuthoringIndex for MemoryAuthoringIndex {
    fn resolve_paths(&self, container: &str, logical_name: &str) -> Vec<String> {
        self.paths
            .read()
            .get(&(container.to_string(), logical_name.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn load_at_path(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject> {
        let factory = self.assets.read().get(path).cloned()?;
        Some(factory()).filter(|object| object.matches(ty))
    }
}
