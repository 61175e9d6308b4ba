//! Asset facade
//!
//! [`AssetManager`] is the single entry point callers use: it resolves a
//! logical name, dispatches to the loose-resource store or to the active
//! bundle backend, and aggregates load progress across every interpretation of
//! a name. Ordinary misses never surface as errors; they come back as `None`,
//! `0` or `-1.0` and are logged.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::backend::BundleBackend;
use crate::bundle::{BundleSource, ContainerStore};
use crate::cache::metrics::AssetMetricsHandle;
use crate::config::VfsConfig;
use crate::editor::{AuthoringIndex, EditorBypass};
use crate::location::{AccessMode, AssetKind, AssetLocation, Origin};
use crate::mapping::MappingTables;
use crate::resolver::PathResolver;
use crate::resource::ResourceStore;
use crate::runtime::{AsyncSpawner, JoinHandle};
use crate::AssetObject;

/// Starting value of progress aggregation; anything still at or above 2.0
/// afterwards means no store tracked the name.
pub const PROGRESS_SENTINEL: f32 = 2.1;

/// Public asset facade
///
/// Clones share every store.
#[derive(Clone)]
pub struct AssetManager {
    config: Arc<VfsConfig>,
    resolver: Arc<PathResolver>,
    bundles: ContainerStore,
    resources: Arc<dyn ResourceStore>,
    editor: Option<EditorBypass>,
    editor_mode: Arc<AtomicBool>,
}

impl AssetManager {
    pub fn new(
        config: VfsConfig,
        tables: MappingTables,
        bundle_source: impl BundleSource,
        resources: impl ResourceStore + 'static,
    ) -> Self {
        Self::with_stores(config, tables, ContainerStore::new(bundle_source), resources)
    }

    /// Build over an existing container store, e.g. one sharing metrics with the
    /// resource cache
    pub fn with_stores(
        config: VfsConfig,
        tables: MappingTables,
        bundles: ContainerStore,
        resources: impl ResourceStore + 'static,
    ) -> Self {
        let resolver = PathResolver::new(tables, &config);
        let editor_mode = Arc::new(AtomicBool::new(config.editor_mode));
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            bundles,
            resources: Arc::new(resources),
            editor: None,
            editor_mode,
        }
    }

    /// Install the authoring index used while in editor mode
    pub fn with_authoring_index(mut self, index: impl AuthoringIndex + 'static) -> Self {
        self.editor = Some(EditorBypass::new(index));
        self
    }

    /// Editor mode is only effective with an authoring index installed
    pub fn is_editor_mode(&self) -> bool {
        self.editor.is_some() && self.editor_mode.load(Ordering::Acquire)
    }

    pub fn set_editor_mode(&self, enabled: bool) {
        if enabled && self.editor.is_none() {
            log::warn!("Editor mode requested without an authoring index; bundles stay deployed");
        }
        self.editor_mode.store(enabled, Ordering::Release);
    }

    fn bundle_backend(&self) -> &dyn BundleBackend {
        match &self.editor {
            Some(editor) if self.editor_mode.load(Ordering::Acquire) => editor,
            _ => &self.bundles,
        }
    }

    /// Resolve `name` without loading anything
    pub fn location(&self, name: &str, mode: AccessMode) -> AssetLocation {
        self.resolver.resolve(name, mode)
    }

    /// Load `name` as a `T`, blocking until it is available
    pub fn load<T: Any + Send + Sync>(&self, name: &str, mode: AccessMode) -> Option<Arc<T>> {
        self.load_object(name, Some(TypeId::of::<T>()), mode)?
            .downcast::<T>()
    }

    /// Untyped load; `ty` narrows the object when a path holds several
    pub fn load_object(
        &self,
        name: &str,
        ty: Option<TypeId>,
        mode: AccessMode,
    ) -> Option<AssetObject> {
        let location = self.resolver.resolve(name, mode);
        if !location.is_legal() {
            return None;
        }
        match location.kind() {
            AssetKind::None => None,
            AssetKind::LooseResource => self.resources.load(location.primary_path()?, ty),
            AssetKind::Bundled => self.bundle_backend().load_object(name, &location, ty),
        }
    }

    /// Load every member of a bundled directory, blocking
    ///
    /// Returns how many members are ready.
    pub fn load_dir(&self, name: &str, mode: AccessMode) -> usize {
        let location = self.resolver.resolve(name, mode);
        if !location.is_legal() {
            return 0;
        }
        match location.kind() {
            AssetKind::None => 0,
            AssetKind::LooseResource => {
                log::warn!("Directory load of loose resource {name:?} is not supported");
                0
            }
            AssetKind::Bundled => self
                .bundle_backend()
                .load_dir(&location, &self.config.bundles_prefix),
        }
    }

    pub async fn load_async<T: Any + Send + Sync>(
        &self,
        name: &str,
        mode: AccessMode,
    ) -> Option<Arc<T>> {
        self.load_object_async(name, Some(TypeId::of::<T>()), mode)
            .await?
            .downcast::<T>()
    }

    pub async fn load_object_async(
        &self,
        name: &str,
        ty: Option<TypeId>,
        mode: AccessMode,
    ) -> Option<AssetObject> {
        let location = self.resolver.resolve(name, mode);
        if !location.is_legal() {
            return None;
        }
        match location.kind() {
            AssetKind::None => None,
            AssetKind::LooseResource => {
                let path = location.primary_path()?;
                self.resources.load_async(path, ty).await
            }
            AssetKind::Bundled => {
                self.bundle_backend()
                    .load_object_async(name, &location, ty)
                    .await
            }
        }
    }

    /// Async directory load; completes once, after the last member
    pub async fn load_dir_async(&self, name: &str, mode: AccessMode) -> usize {
        let location = self.resolver.resolve(name, mode);
        if !location.is_legal() {
            return 0;
        }
        match location.kind() {
            AssetKind::None => 0,
            AssetKind::LooseResource => {
                log::warn!("Directory load of loose resource {name:?} is not supported");
                0
            }
            AssetKind::Bundled => {
                self.bundle_backend()
                    .load_dir_async(&location, &self.config.bundles_prefix)
                    .await
            }
        }
    }

    /// Run an async load on `spawner` and hand the result to `callback`
    ///
    /// The callback runs exactly once, after the load settles, unless the
    /// spawner drops the task.
    pub fn spawn_load<S, F>(
        &self,
        spawner: &S,
        name: impl Into<String>,
        ty: Option<TypeId>,
        mode: AccessMode,
        callback: F,
    ) -> JoinHandle
    where
        S: AsyncSpawner,
        F: FnOnce(Option<AssetObject>) + Send + 'static,
    {
        let manager = self.clone();
        let name = name.into();
        log::debug!("Spawning load of {name:?} on {}", spawner.runtime_name());
        spawner.spawn(async move {
            let object = manager.load_object_async(&name, ty, mode).await;
            callback(object);
        })
    }

    /// Release `name` under every interpretation
    ///
    /// Local and remote bundle keys are released once each, plus the
    /// loose-resource path. No-op in editor mode.
    pub fn unload(&self, name: &str, unload_all_related: bool) {
        if self.is_editor_mode() {
            return;
        }
        for key in self.bundle_keys(name, true) {
            self.bundles.unload(&key, unload_all_related);
        }
        if let Some(path) = self.resolver.resolve_resource(name).primary_path() {
            self.resources.unload(path);
        }
    }

    /// Release the bundle interpretations of `name` once in-flight fetches settle
    pub async fn unload_async(&self, name: &str, unload_all_related: bool) {
        if self.is_editor_mode() {
            return;
        }
        for key in self.bundle_keys(name, true) {
            self.bundles.unload_async(&key, unload_all_related).await;
        }
    }

    /// Load progress of `name` in `[0, 1]`, or `-1.0` if nothing tracks it
    ///
    /// Takes the minimum over every tracked bundle key and the loose resource.
    pub fn load_progress(&self, name: &str) -> f32 {
        if self.is_editor_mode() {
            return 1.0;
        }
        let mut progress = PROGRESS_SENTINEL;
        for key in self.bundle_keys(name, false) {
            progress = min_tracked(progress, self.bundles.progress(&key));
        }
        if let Some(path) = self.resolver.resolve_resource(name).primary_path() {
            progress = min_tracked(progress, self.resources.progress(path));
        }
        normalize(progress)
    }

    /// Aggregate progress of both stores, `-1.0` when both are empty
    pub fn overall_progress(&self) -> f32 {
        if self.is_editor_mode() {
            return 1.0;
        }
        let progress = min_tracked(PROGRESS_SENTINEL, self.bundles.overall_progress());
        normalize(min_tracked(progress, self.resources.overall_progress()))
    }

    /// Container keys `name` maps to, local then remote, without duplicates
    ///
    /// Directories contribute one key per member; `with_directory_key` adds the
    /// directory's own container too.
    fn bundle_keys(&self, name: &str, with_directory_key: bool) -> Vec<String> {
        let mut keys = Vec::new();
        for origin in [Origin::Local, Origin::Remote] {
            let location = self.resolver.resolve_bundle(name, origin);
            if !location.is_legal() {
                continue;
            }
            if !location.is_directory() {
                keys.push(location.container_key().to_string());
                continue;
            }
            if with_directory_key {
                keys.push(location.container_key().to_string());
            }
            keys.extend(
                location
                    .directory_members(&self.config.bundles_prefix)
                    .into_iter()
                    .map(|(_, member)| member.container_key().to_string()),
            );
        }
        let mut seen = HashSet::new();
        keys.retain(|key| seen.insert(key.clone()));
        keys
    }

    pub fn containers(&self) -> &ContainerStore {
        &self.bundles
    }

    pub fn resources(&self) -> &dyn ResourceStore {
        self.resources.as_ref()
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Metrics of the container store
    pub fn metrics(&self) -> &AssetMetricsHandle {
        self.bundles.metrics()
    }

    pub fn config(&self) -> &VfsConfig {
        &self.config
    }
}

fn min_tracked(current: f32, value: f32) -> f32 {
    if value > -1.0 {
        current.min(value)
    } else {
        current
    }
}

fn normalize(progress: f32) -> f32 {
    if progress >= 2.0 {
        -1.0
    } else {
        progress
    }
}
