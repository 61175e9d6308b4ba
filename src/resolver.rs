//! Logical name resolution
//!
//! [`PathResolver`] turns a logical name and an [`AccessMode`] into an
//! [`AssetLocation`]. Each mode maps to one strategy function; resolution only
//! reads the mapping tables and never touches a store.

use crate::config::VfsConfig;
use crate::location::{AccessMode, AssetLocation, Origin};
use crate::mapping::MappingTables;

type ResolveStrategy = fn(&PathResolver, &str) -> AssetLocation;

/// Read-only resolver over the mapping tables
#[derive(Debug, Clone)]
pub struct PathResolver {
    tables: MappingTables,
    local_root: String,
    remote_root: String,
}

impl PathResolver {
    pub fn new(tables: MappingTables, config: &VfsConfig) -> Self {
        Self {
            tables,
            local_root: config.local_root.clone(),
            remote_root: config.remote_root.clone(),
        }
    }

    pub fn tables(&self) -> &MappingTables {
        &self.tables
    }

    /// Resolve `name` according to `mode`
    pub fn resolve(&self, name: &str, mode: AccessMode) -> AssetLocation {
        let location = Self::strategy(mode)(self, name);
        if !location.is_legal() {
            log::debug!("Unresolved asset name {name:?} ({mode:?})");
        }
        location
    }

    fn strategy(mode: AccessMode) -> ResolveStrategy {
        match mode {
            AccessMode::None => |_, _| AssetLocation::none(),
            AccessMode::Unknown => Self::resolve_unknown,
            AccessMode::Resource => Self::resolve_resource,
            AccessMode::AssetBundle => |r, name| r.resolve_bundle(name, Origin::Local),
            AccessMode::RemoteAssetBundle => Self::resolve_remote,
        }
    }

    /// Loose-resource lookup
    pub fn resolve_resource(&self, name: &str) -> AssetLocation {
        match self.tables.resource_path(name) {
            Some(path) => AssetLocation::loose(path),
            None => AssetLocation::none(),
        }
    }

    /// Bundle lookup against one origin
    pub fn resolve_bundle(&self, name: &str, origin: Origin) -> AssetLocation {
        let Some(mapping) = self.tables.bundle(name) else {
            return AssetLocation::none();
        };
        let root = match origin {
            Origin::Local => &self.local_root,
            Origin::Remote => &self.remote_root,
        };
        AssetLocation::bundled(
            mapping.asset_paths.clone(),
            root.clone(),
            mapping.container.clone(),
        )
    }

    fn resolve_unknown(&self, name: &str) -> AssetLocation {
        let bundled = self.resolve_bundle(name, Origin::Local);
        if bundled.is_legal() {
            return bundled;
        }
        self.resolve_resource(name)
    }

    fn resolve_remote(&self, name: &str) -> AssetLocation {
        let remote = self.resolve_bundle(name, Origin::Remote);
        if remote.is_legal() {
            return remote;
        }
        self.resolve_bundle(name, Origin::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::AssetKind;

    fn resolver() -> PathResolver {
        let tables = MappingTables::new()
            .with_resource("logo", "ui/logo")
            .with_resource("shared", "res/shared")
            .with_bundle("enemy", "b1", ["Assets/AssetBundles/b1/enemy.prefab"])
            .with_bundle("shared", "b2", ["Assets/AssetBundles/b2/shared.asset"])
            .with_bundle("empty", "b3", Vec::<String>::new());
        let config = VfsConfig::default()
            .with_local_root("/bundles/")
            .with_remote_root("https://cdn/");
        PathResolver::new(tables, &config)
    }

    #[test]
    fn test_loose_only_name() {
        let r = resolver();
        let loc = r.resolve("logo", AccessMode::Unknown);
        assert_eq!(loc.kind(), AssetKind::LooseResource);
        assert_eq!(loc.logical_paths(), ["ui/logo"]);
        assert_eq!(r.resolve("logo", AccessMode::AssetBundle).kind(), AssetKind::None);
        assert_eq!(r.resolve("logo", AccessMode::Resource).kind(), AssetKind::LooseResource);
    }

    #[test]
    fn test_unknown_prefers_bundle() {
        let loc = resolver().resolve("shared", AccessMode::Unknown);
        assert_eq!(loc.kind(), AssetKind::Bundled);
        assert_eq!(loc.container_key(), "/bundles/b2");
    }

    #[test]
    fn test_resource_mode_forces_loose() {
        let loc = resolver().resolve("shared", AccessMode::Resource);
        assert_eq!(loc.kind(), AssetKind::LooseResource);
        assert_eq!(loc.primary_path(), Some("res/shared"));
    }

    #[test]
    fn test_remote_mode_uses_remote_root() {
        let loc = resolver().resolve("enemy", AccessMode::RemoteAssetBundle);
        assert_eq!(loc.container_key(), "https://cdn/b1");
        assert_eq!(loc.container_root(), "https://cdn/");
    }

    #[test]
    fn test_illegal_bundle_falls_back_to_loose() {
        let loc = resolver().resolve("empty", AccessMode::Unknown);
        assert_eq!(loc.kind(), AssetKind::None);
        assert!(!loc.is_legal());
    }

    #[test]
    fn test_none_mode_never_resolves() {
        assert!(!resolver().resolve("enemy", AccessMode::None).is_legal());
    }

    #[test]
    fn test_missing_name() {
        let r = resolver();
        for mode in [
            AccessMode::Unknown,
            AccessMode::Resource,
            AccessMode::AssetBundle,
            AccessMode::RemoteAssetBundle,
        ] {
            assert_eq!(r.resolve("missing", mode).kind(), AssetKind::None);
        }
    }
}
