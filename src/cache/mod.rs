//! Caching resource store
//!
//! [`ResourceCache`] keeps every loose resource it has read until it is
//! explicitly unloaded. Concurrent async reads of one path share a single
//! underlying read.

pub mod metrics;

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use crate::resource::{ResourceSource, ResourceStore};
use crate::AssetObject;
use metrics::AssetMetricsHandle;

type SharedRead = Shared<BoxFuture<'static, Option<AssetObject>>>;

/// A read in progress; `id` tells it apart from later reads of the same path
struct InFlight {
    id: u64,
    read: SharedRead,
}

#[derive(Default)]
struct CacheState {
    objects: HashMap<String, AssetObject>,
    in_flight: HashMap<String, InFlight>,
    next_read: u64,
}

/// Caching [`ResourceStore`] over a [`ResourceSource`]
///
/// Clones share the same cache.
pub struct ResourceCache<S: ResourceSource> {
    source: Arc<S>,
    state: Arc<Mutex<CacheState>>,
    metrics: AssetMetricsHandle,
}

impl<S: ResourceSource> Clone for ResourceCache<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            metrics: self.metrics.clone(),
        }
    }
}

impl<S: ResourceSource> ResourceCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_metrics(source, AssetMetricsHandle::new())
    }

    /// Share a metrics handle with other stores
    pub fn with_metrics(source: S, metrics: AssetMetricsHandle) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(CacheState::default())),
            metrics,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn metrics(&self) -> &AssetMetricsHandle {
        &self.metrics
    }

    /// Number of cached objects
    pub fn len(&self) -> usize {
        self.state.lock().objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached object; in-flight reads will not be cached
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.objects.clear();
        state.in_flight.clear();
    }

    fn probe(&self, path: &str) -> Option<AssetObject> {
        let cached = self.state.lock().objects.get(path).cloned();
        if cached.is_some() {
            self.metrics.record_cache_hit();
        } else {
            self.metrics.record_cache_miss();
        }
        cached
    }

    fn read_shared(&self, path: &str) -> SharedRead {
        let mut state = self.state.lock();
        if let Some(pending) = state.in_flight.get(path) {
            return pending.read.clone();
        }
        let id = state.next_read;
        state.next_read += 1;

        let source = Arc::clone(&self.source);
        let cache_state = Arc::clone(&self.state);
        let metrics = self.metrics.clone();
        let key = path.to_string();
        let read = async move {
            let started = Instant::now();
            metrics.record_fetch(&key);
            let result = source.read_async(&key).await;
            metrics.record_fetch_time(&key, started.elapsed());

            let mut state = cache_state.lock();
            let current = state
                .in_flight
                .get(&key)
                .is_some_and(|pending| pending.id == id);
            if current {
                state.in_flight.remove(&key);
            }
            match result {
                Ok(object) => {
                    if current {
                        state.objects.insert(key, object.clone());
                    } else {
                        log::debug!("Resource {key:?} was unloaded during its read");
                    }
                    Some(object)
                }
                Err(err) => {
                    log::warn!("Failed to read resource {key:?}: {err}");
                    None
                }
            }
        }
        .boxed()
        .shared();

        state.in_flight.insert(
            path.to_string(),
            InFlight {
                id,
                read: read.clone(),
            },
        );
        read
    }
}

#[async_trait::async_trait]
impl<S: ResourceSource> ResourceStore for ResourceCache<S> {
    fn get_cached(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject> {
        self.probe(path).filter(|object| object.matches(ty))
    }

    fn load(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject> {
        if let Some(object) = self.probe(path) {
            return Some(object).filter(|object| object.matches(ty));
        }

        let pending = self
            .state
            .lock()
            .in_flight
            .get(path)
            .map(|pending| pending.read.clone());
        let object = match pending {
            Some(pending) => futures::executor::block_on(pending),
            None => {
                let started = Instant::now();
                self.metrics.record_fetch(path);
                let result = self.source.read(path);
                self.metrics.record_fetch_time(path, started.elapsed());
                match result {
                    Ok(object) => {
                        self.state
                            .lock()
                            .objects
                            .insert(path.to_string(), object.clone());
                        Some(object)
                    }
                    Err(err) => {
                        log::warn!("Failed to read resource {path:?}: {err}");
                        None
                    }
                }
            }
        };
        object.filter(|object| object.matches(ty))
    }

    async fn load_async(&self, path: &str, ty: Option<TypeId>) -> Option<AssetObject> {
        if let Some(object) = self.probe(path) {
            return Some(object).filter(|object| object.matches(ty));
        }
        let read = self.read_shared(path);
        read.await.filter(|object| object.matches(ty))
    }

    fn unload(&self, path: &str) {
        let mut state = self.state.lock();
        let cached = state.objects.remove(path).is_some();
        let reading = state.in_flight.remove(path).is_some();
        if cached || reading {
            log::debug!("Unloaded resource {path:?}");
        }
    }

    fn progress(&self, path: &str) -> f32 {
        let state = self.state.lock();
        if state.objects.contains_key(path) {
            1.0
        } else if state.in_flight.contains_key(path) {
            0.0
        } else {
            -1.0
        }
    }

    fn overall_progress(&self) -> f32 {
        let state = self.state.lock();
        let loaded = state.objects.len();
        let pending = state.in_flight.len();
        if loaded + pending == 0 {
            -1.0
        } else {
            loaded as f32 / (loaded + pending) as f32
        }
    }
}
