//! Integration tests for async runtime abstraction

use asset_vfs::{
    AccessMode, AssetManager, AssetObject, AsyncSpawner, MappingTables, MemoryBundle,
    MemoryBundleSource, MemoryResourceSource, MockSpawner, ResourceCache, VfsConfig,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

fn manager() -> AssetManager {
    let tables = MappingTables::new()
        .with_resource("logo", "ui/logo")
        .with_bundle("enemy", "b1", ["Assets/AssetBundles/b1/enemy.prefab"]);
    let bundles = MemoryBundleSource::new().with(
        "b1",
        MemoryBundle::new().with_object("Assets/AssetBundles/b1/enemy.prefab", 11u64),
    );
    let resources = ResourceCache::new(MemoryResourceSource::new().with("ui/logo", 3u64));
    AssetManager::new(VfsConfig::default(), tables, bundles, resources)
}

#[test]
fn test_mock_spawner_integration() {
    let spawner = MockSpawner::blocking();

    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = Arc::clone(&executed);

    spawner.spawn(async move {
        executed_clone.store(true, Ordering::SeqCst);
    });

    // In blocking mode, should execute immediately
    assert!(executed.load(Ordering::SeqCst));
}

#[test]
fn test_spawner_trait_bound() {
    fn spawn_task<S: AsyncSpawner>(spawner: &S) {
        spawner.spawn(async {});
    }

    let spawner = MockSpawner::new();
    spawn_task(&spawner);
}

#[test]
fn test_spawn_load_invokes_callback_once() {
    let manager = manager();
    let calls = Arc::new(AtomicUsize::new(0));
    let result: Arc<Mutex<Option<AssetObject>>> = Arc::default();

    let (calls_clone, result_clone) = (calls.clone(), result.clone());
    manager.spawn_load(
        &MockSpawner::blocking(),
        "enemy",
        None,
        AccessMode::Unknown,
        move |object| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            *result_clone.lock() = object;
        },
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let object = result.lock().take().unwrap();
    assert_eq!(object.downcast::<u64>().as_deref(), Some(&11));
}

#[test]
fn test_spawn_load_reports_misses() {
    let manager = manager();
    let missed = Arc::new(AtomicBool::new(false));
    let missed_clone = missed.clone();

    manager.spawn_load(
        &MockSpawner::blocking(),
        "ghost",
        None,
        AccessMode::Unknown,
        move |object| missed_clone.store(object.is_none(), Ordering::SeqCst),
    );
    assert!(missed.load(Ordering::SeqCst));
}

#[test]
fn test_spawn_load_dropped_task_never_loads() {
    let manager = manager();
    manager.spawn_load(
        &MockSpawner::new(),
        "enemy",
        None,
        AccessMode::Unknown,
        |_| panic!("dropped task must not run"),
    );
    assert!(manager.containers().loaded_keys().is_empty());
}

#[cfg(feature = "runtime-tokio")]
#[tokio::test(flavor = "multi_thread")]
async fn test_spawn_load_on_tokio() {
    use asset_vfs::TokioSpawner;

    let manager = manager();
    let (tx, rx) = futures::channel::oneshot::channel();
    let handle = manager.spawn_load(
        &TokioSpawner::new(),
        "logo",
        None,
        AccessMode::Unknown,
        move |object| {
            let _ = tx.send(object);
        },
    );

    let object = rx.await.unwrap().unwrap();
    assert_eq!(object.downcast::<u64>().as_deref(), Some(&3));
    handle
        .downcast::<tokio::task::JoinHandle<()>>()
        .unwrap()
        .await
        .unwrap();
}
