use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Tracks fetch and cache activity across the stores
#[derive(Debug, Default)]
pub struct AssetMetrics {
    fetch_times: RwLock<HashMap<String, Duration>>,
    fetch_counts: RwLock<HashMap<String, u64>>,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    objects_expanded: AtomicU64,
}

impl AssetMetrics {
    /// Create a new instance of AssetMetrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an underlying fetch was issued for `key`
    pub fn record_fetch(&self, key: &str) {
        let mut counts = self.fetch_counts.write();
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Record how long the last fetch of `key` took
    pub fn record_fetch_time(&self, key: &str, duration: Duration) {
        self.fetch_times.write().insert(key.to_string(), duration);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record objects made addressable by a container expansion
    pub fn record_expansion(&self, objects: usize) {
        self.objects_expanded
            .fetch_add(objects as u64, Ordering::Relaxed);
    }

    /// Get the cache hit rate as a percentage
    pub fn cache_hit_rate(&self) -> f32 {
        let hits = self.cache_hits.load(Ordering::Relaxed) as f32;
        let misses = self.cache_misses.load(Ordering::Relaxed) as f32;

        if hits + misses > 0.0 {
            hits / (hits + misses) * 100.0
        } else {
            0.0
        }
    }

    /// Number of underlying fetches issued for `key`
    pub fn fetch_count(&self, key: &str) -> u64 {
        *self.fetch_counts.read().get(key).unwrap_or(&0)
    }

    /// Total fetches across all keys
    pub fn total_fetches(&self) -> u64 {
        self.fetch_counts.read().values().sum()
    }

    pub fn last_fetch_time(&self, key: &str) -> Option<Duration> {
        self.fetch_times.read().get(key).copied()
    }

    pub fn objects_expanded(&self) -> u64 {
        self.objects_expanded.load(Ordering::Relaxed)
    }
}

/// A shareable wrapper around AssetMetrics
#[derive(Debug, Clone, Default)]
pub struct AssetMetricsHandle(Arc<AssetMetrics>);

impl AssetMetricsHandle {
    pub fn new() -> Self {
        Self(Arc::new(AssetMetrics::new()))
    }

    /// Get a reference to the underlying metrics
    pub fn inner(&self) -> &AssetMetrics {
        &self.0
    }
}

impl std::ops::Deref for AssetMetricsHandle {
    type Target = AssetMetrics;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
