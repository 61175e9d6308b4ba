//! Feature matrix tests - verify all feature combinations compile and work

use asset_vfs::{AccessMode, AsyncSpawner, MockSpawner, VfsConfig};

#[test]
fn test_default_features() {
    let config = VfsConfig::default();
    assert_eq!(config.local_root, "bundles/");
    assert_eq!(config.remote_root, "remote/");
    assert_eq!(config.bundles_prefix, "Assets/AssetBundles/");
    assert!(!config.editor_mode);
}

#[test]
fn test_config_from_json() {
    let config =
        VfsConfig::from_json(r#"{ "local_root": "/data/", "editor_mode": true }"#).unwrap();
    assert_eq!(config.local_root, "/data/");
    assert_eq!(config.remote_root, "remote/");
    assert!(config.editor_mode);
    assert!(VfsConfig::from_json("not json").is_err());
}

#[test]
fn test_access_modes_available() {
    let modes = [
        AccessMode::None,
        AccessMode::Unknown,
        AccessMode::Resource,
        AccessMode::AssetBundle,
        AccessMode::RemoteAssetBundle,
    ];
    assert_eq!(modes.len(), 5);
}

#[test]
fn test_mock_runtime_available() {
    assert_eq!(MockSpawner::new().runtime_name(), "Mock");
}

#[cfg(feature = "runtime-tokio")]
#[test]
fn test_tokio_runtime_available() {
    use asset_vfs::TokioSpawner;
    assert_eq!(TokioSpawner::new().runtime_name(), "Tokio");
}
