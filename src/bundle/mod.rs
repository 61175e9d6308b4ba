//! Container store
//!
//! [`ContainerStore`] owns every loaded container, keyed by container key
//! (`root + name`). Acquiring a container fetches it together with its
//! dependency graph; releasing it decrements a reference count and frees the
//! content once the count reaches zero.
//!
//! Concurrent acquisitions of one key never issue a second underlying fetch:
//! the in-flight fetch is stored as a shared future and every waiter awaits a
//! clone of it.

pub mod container;
pub mod source;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures::future::{self, BoxFuture, FutureExt};
use parking_lot::Mutex;

use crate::cache::metrics::AssetMetricsHandle;
use crate::location::{AssetKind, AssetLocation};
use crate::{AssetObject, Result, VfsError};
use container::{Container, FetchOutcome, SharedFetch};

pub use container::{ContainerStatus, LoadState};
pub use source::{BundleContent, BundleEntry, BundleSource, MemoryBundle, MemoryBundleSource};

/// Objects made addressable by expanding one container
struct ExpandedObjects {
    container: String,
    objects: Vec<AssetObject>,
}

#[derive(Default)]
struct StoreState {
    containers: HashMap<String, Container>,
    /// Asset path to the objects each expanded container holds at that path
    objects: HashMap<String, Vec<ExpandedObjects>>,
    next_generation: u64,
}

impl StoreState {
    /// Add one reference to `key`, creating the container if needed
    fn acquire(&mut self, key: &str, name: &str, root: &str) {
        let generation = self.next_generation;
        let container = self
            .containers
            .entry(key.to_string())
            .or_insert_with(|| Container::new(name, root, generation));
        if container.generation == generation {
            self.next_generation += 1;
        }
        container.ref_count += 1;
    }

    fn release(&mut self, key: &str, unload_all_related: bool, visited: &mut Vec<String>) -> bool {
        if visited.iter().any(|k| k == key) {
            return false;
        }
        visited.push(key.to_string());

        let Some(container) = self.containers.get_mut(key) else {
            log::debug!("No loader for container {key:?}, nothing to unload");
            return false;
        };
        container.ref_count = container.ref_count.saturating_sub(1);
        if container.ref_count > 0 {
            return false;
        }

        let Some(container) = self.containers.remove(key) else {
            return false;
        };
        self.objects.retain(|_, owners| {
            owners.retain(|expanded| expanded.container != key);
            !owners.is_empty()
        });
        log::debug!("Freed container {key:?}");

        if unload_all_related {
            for dependency in container.dependencies.unwrap_or_default() {
                self.release(&dependency, true, visited);
            }
        }
        true
    }
}

/// Work needed to bring one container to the ready state
struct FetchPlan {
    name: String,
    generation: u64,
    dependencies: Vec<String>,
    needs_content: bool,
}

/// Owns loaded containers and their expanded objects
///
/// Clones share the same state.
#[derive(Clone)]
pub struct ContainerStore {
    source: Arc<dyn BundleSource>,
    state: Arc<Mutex<StoreState>>,
    metrics: AssetMetricsHandle,
}

impl ContainerStore {
    pub fn new(source: impl BundleSource) -> Self {
        Self::with_metrics(source, AssetMetricsHandle::new())
    }

    /// Share a metrics handle with other stores
    pub fn with_metrics(source: impl BundleSource, metrics: AssetMetricsHandle) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(StoreState::default())),
            metrics,
        }
    }

    pub fn metrics(&self) -> &AssetMetricsHandle {
        &self.metrics
    }

    /// Snapshot of the container at `key`, without loading it
    pub fn get_loader(&self, key: &str) -> Option<ContainerStatus> {
        self.state
            .lock()
            .containers
            .get(key)
            .map(|container| container.status(key))
    }

    /// Whether `key` is loaded with all of its dependencies
    pub fn is_ready(&self, key: &str) -> bool {
        self.state
            .lock()
            .containers
            .get(key)
            .is_some_and(Container::is_ready)
    }

    /// Keys of every container the store currently holds
    pub fn loaded_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.state.lock().containers.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Acquire the container behind `location` and fetch it, blocking
    ///
    /// Dependencies are fetched first, recursively. If an async fetch of the
    /// same key is in flight, this blocks until it completes.
    pub fn load(&self, name: &str, location: &AssetLocation) -> Result<()> {
        let key = Self::bundled_key(location)?;
        log::debug!("Loading container {key:?} for {name:?}");
        self.state
            .lock()
            .acquire(key, location.container_name(), location.container_root());
        self.ensure_blocking(key, &mut Vec::new())
            .map_err(|err| VfsError::Fetch(key.to_string(), err.to_string()))
    }

    /// Acquire the container behind `location` and fetch it asynchronously
    ///
    /// The reference is taken when this is called, not when the future is
    /// first polled.
    pub fn load_async(
        &self,
        name: &str,
        location: &AssetLocation,
    ) -> impl Future<Output = Result<()>> + Send + 'static {
        let fetch = match Self::bundled_key(location) {
            Ok(key) => {
                log::debug!("Loading container {key:?} for {name:?} (async)");
                self.state
                    .lock()
                    .acquire(key, location.container_name(), location.container_root());
                Ok((key.to_string(), self.ensure_shared(key, Arc::new(Vec::new()))))
            }
            Err(err) => Err(err),
        };
        async move {
            let (key, fetch) = fetch?;
            fetch
                .await
                .map_err(|err| VfsError::Fetch(key, err.to_string()))
        }
    }

    /// Make every object of a ready container addressable by path
    ///
    /// Returns false when the container is missing or not ready yet.
    pub fn expand(&self, key: &str) -> bool {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let Some(container) = state.containers.get_mut(key) else {
            return false;
        };
        if !container.is_ready() {
            return false;
        }
        if container.expanded {
            return true;
        }
        let Some(content) = container.content.clone() else {
            return false;
        };
        container.expanded = true;

        for entry in content.entries() {
            let owners = state.objects.entry(entry.path.clone()).or_default();
            match owners.iter_mut().find(|expanded| expanded.container == key) {
                Some(expanded) => expanded.objects.push(entry.object.clone()),
                None => owners.push(ExpandedObjects {
                    container: key.to_string(),
                    objects: vec![entry.object.clone()],
                }),
            }
        }
        self.metrics.record_expansion(content.len());
        log::debug!("Expanded {} objects from {key:?}", content.len());
        true
    }

    /// An expanded object at `path`, optionally of one type
    pub fn get_object(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject> {
        let object = self
            .state
            .lock()
            .objects
            .get(path)
            .and_then(|owners| {
                owners
                    .iter()
                    .flat_map(|expanded| &expanded.objects)
                    .find(|object| object.matches(ty))
                    .cloned()
            });
        if object.is_some() {
            self.metrics.record_cache_hit();
        } else {
            self.metrics.record_cache_miss();
        }
        object
    }

    /// Typed variant of [`ContainerStore::get_object`]
    pub fn get_object_as<T: Any + Send + Sync>(&self, path: &str) -> Option<Arc<T>> {
        self.get_object(path, Some(TypeId::of::<T>()))?.downcast::<T>()
    }

    /// Release one reference to `key`
    ///
    /// At zero the content and its expanded objects are freed; with
    /// `unload_all_related` the same release is applied to every dependency.
    /// Returns whether `key` itself was freed.
    pub fn unload(&self, key: &str, unload_all_related: bool) -> bool {
        self.state
            .lock()
            .release(key, unload_all_related, &mut Vec::new())
    }

    /// Like [`ContainerStore::unload`], after any in-flight fetch of `key` settles
    pub async fn unload_async(&self, key: &str, unload_all_related: bool) -> bool {
        let pending = self
            .state
            .lock()
            .containers
            .get(key)
            .and_then(|container| container.pending.clone());
        if let Some(pending) = pending {
            let _ = pending.await;
        }
        self.unload(key, unload_all_related)
    }

    /// Progress of `key` in `[0, 1]`, or `-1.0` if no loader exists
    pub fn progress(&self, key: &str) -> f32 {
        self.state
            .lock()
            .containers
            .get(key)
            .map_or(-1.0, Container::progress)
    }

    /// Mean progress over all containers, `-1.0` when the store is empty
    pub fn overall_progress(&self) -> f32 {
        let state = self.state.lock();
        if state.containers.is_empty() {
            return -1.0;
        }
        let total: f32 = state.containers.values().map(Container::progress).sum();
        total / state.containers.len() as f32
    }

    fn bundled_key(location: &AssetLocation) -> Result<&str> {
        if location.kind() != AssetKind::Bundled || !location.is_legal() {
            return Err(VfsError::NotFound(format!(
                "not a bundled location: {location:?}"
            )));
        }
        Ok(location.container_key())
    }

    /// Discover and acquire dependencies on first use, then reset progress
    fn prepare_fetch(&self, key: &str) -> Option<FetchPlan> {
        let (name, root, known) = {
            let state = self.state.lock();
            let container = state.containers.get(key)?;
            (
                container.name.clone(),
                container.root.clone(),
                container.dependencies.clone(),
            )
        };

        let dependencies = match known {
            Some(dependencies) => dependencies,
            None => {
                let discovered: Vec<(String, String)> = self
                    .source
                    .dependencies(&name)
                    .into_iter()
                    .map(|dependency| (format!("{root}{dependency}"), dependency))
                    .collect();
                let mut state = self.state.lock();
                for (dep_key, dep_name) in &discovered {
                    state.acquire(dep_key, dep_name, &root);
                }
                let keys: Vec<String> = discovered.into_iter().map(|(key, _)| key).collect();
                state.containers.get_mut(key)?.dependencies = Some(keys.clone());
                keys
            }
        };

        let mut state = self.state.lock();
        let container = state.containers.get_mut(key)?;
        container.dependencies_loaded = 0;
        container.state = LoadState::Fetching;
        Some(FetchPlan {
            name,
            generation: container.generation,
            dependencies,
            needs_content: container.content.is_none(),
        })
    }

    fn mark_dependency_loaded(&self, key: &str, generation: u64) {
        let mut state = self.state.lock();
        if let Some(container) = state.containers.get_mut(key) {
            if container.generation == generation {
                container.dependencies_loaded =
                    (container.dependencies_loaded + 1).min(container.dependency_count());
            }
        }
    }

    fn finish_fetch(
        &self,
        key: &str,
        generation: u64,
        content: Option<Result<BundleContent>>,
        dependency_error: Option<VfsError>,
    ) -> FetchOutcome {
        let mut state = self.state.lock();
        let container = match state.containers.get_mut(key) {
            Some(container) if container.generation == generation => container,
            _ => {
                log::debug!("Container {key:?} was unloaded before its fetch completed");
                return Err(Arc::new(VfsError::NotFound(key.to_string())));
            }
        };
        container.pending = None;

        if let Some(content) = content {
            match content {
                Ok(content) => container.content = Some(Arc::new(content)),
                Err(err) => {
                    log::warn!("Failed to fetch container {key:?}: {err}");
                    container.state = LoadState::Failed(err.to_string());
                    return Err(Arc::new(err));
                }
            }
        }
        if let Some(err) = dependency_error {
            log::warn!("Container {key:?} is missing a dependency: {err}");
            container.state = LoadState::Failed(err.to_string());
            return Err(Arc::new(err));
        }

        container.state = LoadState::Loaded;
        Ok(())
    }

    fn fetch_content_blocking(&self, key: &str, name: &str) -> Result<BundleContent> {
        let started = Instant::now();
        self.metrics.record_fetch(key);
        let content = self.source.fetch_blocking(key, name);
        self.metrics.record_fetch_time(key, started.elapsed());
        content
    }

    async fn fetch_content(&self, key: &str, name: &str) -> Result<BundleContent> {
        let started = Instant::now();
        self.metrics.record_fetch(key);
        let content = self.source.fetch(key, name).await;
        self.metrics.record_fetch_time(key, started.elapsed());
        content
    }

    /// Bring an acquired container to the ready state on the calling thread
    fn ensure_blocking(&self, key: &str, chain: &mut Vec<String>) -> FetchOutcome {
        let pending = {
            let state = self.state.lock();
            let container = state
                .containers
                .get(key)
                .ok_or_else(|| Arc::new(VfsError::NotFound(key.to_string())))?;
            if container.is_ready() {
                return Ok(());
            }
            container.pending.clone()
        };
        if let Some(pending) = pending {
            return futures::executor::block_on(pending);
        }

        let plan = self
            .prepare_fetch(key)
            .ok_or_else(|| Arc::new(VfsError::NotFound(key.to_string())))?;

        chain.push(key.to_string());
        let mut dependency_error = None;
        for dependency in &plan.dependencies {
            if chain.contains(dependency) {
                log::warn!("Dependency cycle through {dependency:?} while loading {key:?}");
                self.mark_dependency_loaded(key, plan.generation);
                continue;
            }
            match self.ensure_blocking(dependency, chain) {
                Ok(()) => self.mark_dependency_loaded(key, plan.generation),
                Err(err) => {
                    dependency_error.get_or_insert(VfsError::Dependency {
                        container: key.to_string(),
                        dependency: format!("{dependency} ({err})"),
                    });
                }
            }
        }
        chain.pop();

        let content = plan
            .needs_content
            .then(|| self.fetch_content_blocking(key, &plan.name));
        self.finish_fetch(key, plan.generation, content, dependency_error)
    }

    /// The in-flight fetch of an acquired container, starting one if needed
    fn ensure_shared(&self, key: &str, chain: Arc<Vec<String>>) -> SharedFetch {
        let mut state = self.state.lock();
        let Some(container) = state.containers.get_mut(key) else {
            let err = Arc::new(VfsError::NotFound(key.to_string()));
            return future::ready(Err(err)).boxed().shared();
        };
        if container.is_ready() {
            return future::ready(Ok(())).boxed().shared();
        }
        if let Some(pending) = &container.pending {
            return pending.clone();
        }

        let fetch = self.clone().fetch_task(key.to_string(), chain).shared();
        container.state = LoadState::Fetching;
        container.pending = Some(fetch.clone());
        fetch
    }

    fn fetch_task(self, key: String, chain: Arc<Vec<String>>) -> BoxFuture<'static, FetchOutcome> {
        async move {
            let Some(FetchPlan {
                name,
                generation,
                dependencies,
                needs_content,
            }) = self.prepare_fetch(&key)
            else {
                return Err(Arc::new(VfsError::NotFound(key.clone())));
            };

            let mut next_chain = (*chain).clone();
            next_chain.push(key.clone());
            let next_chain = Arc::new(next_chain);

            let mut dependency_loads = Vec::with_capacity(dependencies.len());
            for dependency in dependencies {
                if next_chain.contains(&dependency) {
                    log::warn!("Dependency cycle through {dependency:?} while loading {key:?}");
                    self.mark_dependency_loaded(&key, generation);
                    continue;
                }
                let fetch = self.ensure_shared(&dependency, Arc::clone(&next_chain));
                let store = self.clone();
                let parent = key.clone();
                dependency_loads.push(async move {
                    match fetch.await {
                        Ok(()) => {
                            store.mark_dependency_loaded(&parent, generation);
                            None
                        }
                        Err(err) => Some(VfsError::Dependency {
                            container: parent,
                            dependency: format!("{dependency} ({err})"),
                        }),
                    }
                });
            }

            let own = async {
                if needs_content {
                    Some(self.fetch_content(&key, &name).await)
                } else {
                    None
                }
            };
            let (content, dependency_errors) =
                futures::join!(own, future::join_all(dependency_loads));
            let dependency_error = dependency_errors.into_iter().flatten().next();

            self.finish_fetch(&key, generation, content, dependency_error)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn source() -> MemoryBundleSource {
        MemoryBundleSource::new()
            .with(
                "b1",
                MemoryBundle::new()
                    .with_object("Assets/b1/enemy.prefab", String::from("enemy"))
                    .with_object("Assets/b1/enemy.prefab", 7u32)
                    .with_dependency("shared"),
            )
            .with(
                "shared",
                MemoryBundle::new().with_object("Assets/shared/mat.asset", 1.5f32),
            )
    }

    fn location(name: &str) -> AssetLocation {
        AssetLocation::bundled(
            vec![format!("Assets/{name}/enemy.prefab")],
            "/bundles/",
            name,
        )
    }

    #[test]
    fn test_get_loader_does_not_load() {
        let store = ContainerStore::new(source());
        assert!(store.get_loader("/bundles/b1").is_none());
        assert_eq!(store.progress("/bundles/b1"), -1.0);
        assert_eq!(store.overall_progress(), -1.0);
    }

    #[test]
    fn test_load_fetches_dependencies() {
        let store = ContainerStore::new(source());
        store.load("enemy", &location("b1")).unwrap();

        let status = store.get_loader("/bundles/b1").unwrap();
        assert!(status.is_ready());
        assert_eq!(status.state, LoadState::Loaded);
        assert_eq!(status.dependencies, ["/bundles/shared"]);
        assert_eq!(status.dependencies_loaded, 1);
        assert!(store.is_ready("/bundles/shared"));
        assert_eq!(store.loaded_keys(), ["/bundles/b1", "/bundles/shared"]);
        assert_eq!(store.metrics().fetch_count("/bundles/shared"), 1);
        assert_eq!(store.overall_progress(), 1.0);
    }

    #[test]
    fn test_objects_require_expansion() {
        let store = ContainerStore::new(source());
        store.load("enemy", &location("b1")).unwrap();
        assert!(store.get_object("Assets/b1/enemy.prefab", None).is_none());

        assert!(store.expand("/bundles/b1"));
        assert_eq!(
            store.get_object_as::<String>("Assets/b1/enemy.prefab").as_deref(),
            Some(&String::from("enemy"))
        );
        assert_eq!(store.get_object_as::<u32>("Assets/b1/enemy.prefab").as_deref(), Some(&7));
        assert!(store.get_object_as::<f32>("Assets/b1/enemy.prefab").is_none());
        assert!(store.get_loader("/bundles/b1").unwrap().expanded);
    }

    #[test]
    fn test_expand_missing_container() {
        let store = ContainerStore::new(source());
        assert!(!store.expand("/bundles/nope"));
    }

    #[test]
    fn test_reference_counting() {
        let store = ContainerStore::new(source());
        store.load("enemy", &location("b1")).unwrap();
        store.load("enemy", &location("b1")).unwrap();
        assert_eq!(store.get_loader("/bundles/b1").unwrap().ref_count, 2);
        assert_eq!(store.metrics().fetch_count("/bundles/b1"), 1);

        assert!(!store.unload("/bundles/b1", false));
        assert!(store.is_ready("/bundles/b1"));
        assert!(store.unload("/bundles/b1", false));
        assert!(store.get_loader("/bundles/b1").is_none());
        // dependency kept without unload_all_related
        assert!(store.is_ready("/bundles/shared"));
    }

    #[test]
    fn test_unload_all_related_releases_dependencies() {
        let store = ContainerStore::new(source());
        store.load("enemy", &location("b1")).unwrap();
        store.expand("/bundles/b1");

        assert!(store.unload("/bundles/b1", true));
        assert!(store.get_loader("/bundles/shared").is_none());
        assert!(store.get_object("Assets/b1/enemy.prefab", None).is_none());
    }

    #[test]
    fn test_shared_paths_survive_other_origin_unload() {
        let store = ContainerStore::new(source());
        let local = location("b1");
        let remote = AssetLocation::bundled(
            vec!["Assets/b1/enemy.prefab".into()],
            "/remote/",
            "b1",
        );
        store.load("enemy", &local).unwrap();
        store.load("enemy", &remote).unwrap();
        assert!(store.expand("/bundles/b1"));
        assert!(store.expand("/remote/b1"));

        assert!(store.unload("/remote/b1", true));
        assert!(store.get_loader("/bundles/b1").unwrap().expanded);
        assert_eq!(
            store.get_object_as::<u32>("Assets/b1/enemy.prefab").as_deref(),
            Some(&7)
        );

        assert!(store.unload("/bundles/b1", true));
        assert!(store.get_object("Assets/b1/enemy.prefab", None).is_none());
    }

    #[test]
    fn test_unload_unknown_key_is_noop() {
        let store = ContainerStore::new(source());
        assert!(!store.unload("/bundles/zz", true));
    }

    #[test]
    fn test_async_dedup() {
        let store = ContainerStore::new(source());
        let loc = location("b1");
        let first = store.load_async("enemy", &loc);
        let second = store.load_async("enemy", &loc);
        assert_eq!(store.progress("/bundles/b1"), 0.0);

        let (a, b) = block_on(async { futures::join!(first, second) });
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(store.metrics().fetch_count("/bundles/b1"), 1);
        assert_eq!(store.metrics().fetch_count("/bundles/shared"), 1);
        assert_eq!(store.get_loader("/bundles/b1").unwrap().ref_count, 2);
    }

    #[test]
    fn test_not_ready_until_dependencies_complete() {
        let store = ContainerStore::new(source());
        let mut load = Box::pin(store.load_async("enemy", &location("b1")));
        block_on(async {
            assert!(futures::poll!(&mut load).is_pending());
        });
        let status = store.get_loader("/bundles/b1").unwrap();
        assert!(status.is_loading());
        assert!(!store.expand("/bundles/b1"));

        block_on(load).unwrap();
        assert!(store.expand("/bundles/b1"));
    }

    #[test]
    fn test_failed_fetch_then_retry() {
        let source = source();
        source.fail("/bundles/b1");
        let store = ContainerStore::new(source.clone());

        let err = store.load("enemy", &location("b1")).unwrap_err();
        assert!(matches!(err, VfsError::Fetch(..)));
        assert!(matches!(
            store.get_loader("/bundles/b1").unwrap().state,
            LoadState::Failed(_)
        ));

        source.restore("/bundles/b1");
        store.load("enemy", &location("b1")).unwrap();
        assert!(store.is_ready("/bundles/b1"));
        // dependency was fetched once and kept across the retry
        assert_eq!(store.metrics().fetch_count("/bundles/shared"), 1);
    }

    #[test]
    fn test_missing_dependency_fails_container() {
        let source = MemoryBundleSource::new().with(
            "b2",
            MemoryBundle::new().with_dependency("ghost"),
        );
        let store = ContainerStore::new(source);
        let loc = AssetLocation::bundled(vec!["x".into()], "/bundles/", "b2");
        assert!(block_on(store.load_async("x", &loc)).is_err());
        assert!(!store.is_ready("/bundles/b2"));
        assert!(store.get_loader("/bundles/b2").unwrap().has_content);
    }

    #[test]
    fn test_dependency_cycle_completes() {
        let source = MemoryBundleSource::new()
            .with("a", MemoryBundle::new().with_object("a", 1u8).with_dependency("b"))
            .with("b", MemoryBundle::new().with_object("b", 2u8).with_dependency("a"));
        let store = ContainerStore::new(source);
        let loc = AssetLocation::bundled(vec!["a".into()], "/r/", "a");

        block_on(store.load_async("a", &loc)).unwrap();
        assert!(store.is_ready("/r/a"));
        assert!(store.is_ready("/r/b"));

        let store_sync = ContainerStore::new(
            MemoryBundleSource::new()
                .with("a", MemoryBundle::new().with_dependency("b"))
                .with("b", MemoryBundle::new().with_dependency("a")),
        );
        store_sync.load("a", &loc).unwrap();
        assert!(store_sync.is_ready("/r/a"));
    }

    #[test]
    fn test_unload_while_fetching_discards_result() {
        let store = ContainerStore::new(source());
        let loc = location("b1");
        let load = store.load_async("enemy", &loc);
        assert!(store.unload("/bundles/b1", false));

        assert!(block_on(load).is_err());
        assert!(store.get_loader("/bundles/b1").is_none());

        block_on(store.load_async("enemy", &loc)).unwrap();
        assert!(store.is_ready("/bundles/b1"));
    }

    #[test]
    fn test_unload_async_waits_for_fetch() {
        let store = ContainerStore::new(source());
        let loc = location("b1");
        let load = store.load_async("enemy", &loc);

        let (loaded, freed) =
            block_on(async { futures::join!(load, store.unload_async("/bundles/b1", true)) });
        assert!(loaded.is_ok());
        assert!(freed);
        assert!(store.loaded_keys().is_empty());
    }

    #[test]
    fn test_rejects_loose_location() {
        let store = ContainerStore::new(source());
        assert!(matches!(
            store.load("x", &AssetLocation::loose("x")),
            Err(VfsError::NotFound(_))
        ));
        assert!(block_on(store.load_async("x", &AssetLocation::none())).is_err());
    }
}
