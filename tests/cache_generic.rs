//! Integration tests for the generic ResourceCache

use std::io::Write;

use asset_vfs::{
    AccessMode, AssetManager, FsResourceSource, MappingTables, MemoryBundleSource,
    MemoryResourceSource, RawAsset, ResourceCache, ResourceStore, VfsConfig,
};

#[test]
fn test_cache_generic_over_source() {
    let memory = ResourceCache::new(MemoryResourceSource::new().with("a", 1u8));
    let dir = tempfile::tempdir().unwrap();
    let fs = ResourceCache::new(FsResourceSource::new(dir.path()));

    assert!(memory.is_empty());
    assert!(fs.is_empty());
    assert_eq!(memory.overall_progress(), -1.0);
    assert_eq!(fs.overall_progress(), -1.0);
}

#[test]
fn test_cache_clear() {
    let cache = ResourceCache::new(MemoryResourceSource::new().with("a", 1u8));
    assert!(cache.load("a", None).is_some());
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get_cached("a", None).is_none());
}

#[test]
fn test_cache_metrics() {
    let cache = ResourceCache::new(MemoryResourceSource::new().with("a", 1u8));
    assert_eq!(cache.metrics().cache_hit_rate(), 0.0);

    cache.load("a", None);
    cache.load("a", None);
    assert_eq!(cache.metrics().fetch_count("a"), 1);
    assert!(cache.metrics().cache_hit_rate() > 0.0);
}

#[test]
fn test_manager_over_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("text")).unwrap();
    let mut file = std::fs::File::create(dir.path().join("text/intro.txt")).unwrap();
    file.write_all(b"once upon a time").unwrap();

    let tables = MappingTables::new().with_resource("intro", "text/intro.txt");
    let manager = AssetManager::new(
        VfsConfig::default(),
        tables,
        MemoryBundleSource::new(),
        ResourceCache::new(FsResourceSource::new(dir.path())),
    );

    assert_eq!(manager.load_progress("intro"), -1.0);
    let intro = manager.load::<RawAsset>("intro", AccessMode::Unknown).unwrap();
    assert_eq!(intro.as_text(), Some("once upon a time"));
    assert_eq!(manager.load_progress("intro"), 1.0);

    manager.unload("intro", false);
    assert_eq!(manager.load_progress("intro"), -1.0);
}
