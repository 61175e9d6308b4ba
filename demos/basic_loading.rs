//! Basic loading example for asset_vfs

use asset_vfs::{
    AccessMode, AssetManager, MappingTables, MemoryBundle, MemoryBundleSource,
    MemoryResourceSource, ResourceCache, VfsConfig,
};

fn main() -> anyhow::Result<()> {
    let config = VfsConfig::from_json(r#"{ "local_root": "/bundles/" }"#)?;

    let tables = MappingTables::from_json(
        r#"{
            "resources": { "logo": "ui/logo" },
            "bundles": {
                "enemy": { "container": "b1", "asset_paths": ["Assets/AssetBundles/b1/enemy.prefab"] },
                "units": {
                    "container": "units",
                    "asset_paths": [
                        "Assets/AssetBundles/Units/Orc.prefab",
                        "Assets/AssetBundles/Units/Troll.prefab"
                    ]
                }
            }
        }"#,
    )?;

    // In-memory stand-ins for packaged bundles and loose files
    let bundles = MemoryBundleSource::new()
        .with(
            "b1",
            MemoryBundle::new()
                .with_object("Assets/AssetBundles/b1/enemy.prefab", String::from("Enemy"))
                .with_dependency("shared"),
        )
        .with(
            "shared",
            MemoryBundle::new().with_object("Assets/AssetBundles/shared/mat.asset", 0.5f32),
        )
        .with(
            "units/orc",
            MemoryBundle::new()
                .with_object("Assets/AssetBundles/Units/Orc.prefab", String::from("Orc")),
        )
        .with(
            "units/troll",
            MemoryBundle::new()
                .with_object("Assets/AssetBundles/Units/Troll.prefab", String::from("Troll")),
        );
    let resources =
        ResourceCache::new(MemoryResourceSource::new().with("ui/logo", String::from("Logo")));

    let manager = AssetManager::new(config, tables, bundles, resources);

    println!("asset_vfs v{}", asset_vfs::VERSION);

    let enemy = manager.load::<String>("enemy", AccessMode::Unknown);
    println!("enemy: {enemy:?} (progress {})", manager.load_progress("enemy"));

    let logo =
        futures::executor::block_on(manager.load_async::<String>("logo", AccessMode::Unknown));
    println!("logo: {logo:?} (progress {})", manager.load_progress("logo"));

    let members = futures::executor::block_on(manager.load_dir_async("units", AccessMode::Unknown));
    println!("units: {members} members ready (progress {})", manager.load_progress("units"));

    println!("containers: {:?}", manager.containers().loaded_keys());
    println!("fetches: {}", manager.metrics().total_fetches());

    manager.unload("enemy", true);
    manager.unload("units", false);
    println!("after unload: {:?}", manager.containers().loaded_keys());
    println!("overall progress: {}", manager.overall_progress());

    Ok(())
}
