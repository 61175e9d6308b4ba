//! Strategies for loading bundled assets
//!
//! Bundled locations are served either by the [`ContainerStore`] (deployed
//! builds) or by the [`EditorBypass`](crate::editor::EditorBypass) (authoring).
//! The facade picks one at runtime and talks to it only through
//! [`BundleBackend`].

use std::any::TypeId;

use futures::future;

use crate::bundle::ContainerStore;
use crate::location::AssetLocation;
use crate::AssetObject;

/// Loads objects for bundled locations
#[async_trait::async_trait]
pub trait BundleBackend: Send + Sync {
    /// Load the object at the location's primary path, blocking
    fn load_object(
        &self,
        name: &str,
        location: &AssetLocation,
        ty: Option<TypeId>,
    ) -> Option<AssetObject>;

    /// Load the object at the location's primary path
    async fn load_object_async(
        &self,
        name: &str,
        location: &AssetLocation,
        ty: Option<TypeId>,
    ) -> Option<AssetObject>;

    /// Load every member of a directory location, blocking
    ///
    /// Returns how many members are ready afterwards.
    fn load_dir(&self, location: &AssetLocation, bundles_prefix: &str) -> usize;

    /// Load every member of a directory location; completes after the last one
    async fn load_dir_async(&self, location: &AssetLocation, bundles_prefix: &str) -> usize;
}

impl ContainerStore {
    fn object_or_expand(&self, key: &str, path: &str, ty: Option<TypeId>) -> Option<AssetObject> {
        self.get_object(path, ty).or_else(|| {
            self.expand(key);
            self.get_object(path, ty)
        })
    }
}

#[async_trait::async_trait]
impl BundleBackend for ContainerStore {
    fn load_object(
        &self,
        name: &str,
        location: &AssetLocation,
        ty: Option<TypeId>,
    ) -> Option<AssetObject> {
        let path = location.primary_path()?;
        let key = location.container_key();
        if !self.is_ready(key) {
            if let Err(err) = self.load(name, location) {
                log::warn!("Failed to load {name:?}: {err}");
                return None;
            }
        }
        self.object_or_expand(key, path, ty)
    }

    async fn load_object_async(
        &self,
        name: &str,
        location: &AssetLocation,
        ty: Option<TypeId>,
    ) -> Option<AssetObject> {
        let path = location.primary_path()?;
        let key = location.container_key();
        if !self.is_ready(key) {
            if let Err(err) = self.load_async(name, location).await {
                log::warn!("Failed to load {name:?}: {err}");
                return None;
            }
        }
        self.object_or_expand(key, path, ty)
    }

    fn load_dir(&self, location: &AssetLocation, bundles_prefix: &str) -> usize {
        let mut ready = 0;
        for (member_name, member) in location.directory_members(bundles_prefix) {
            let key = member.container_key();
            if !self.is_ready(key) {
                if let Err(err) = self.load(&member_name, &member) {
                    log::warn!("Failed to load directory member {member_name:?}: {err}");
                    continue;
                }
            }
            if self.expand(key) {
                ready += 1;
            }
        }
        ready
    }

    async fn load_dir_async(&self, location: &AssetLocation, bundles_prefix: &str) -> usize {
        let loads = location
            .directory_members(bundles_prefix)
            .into_iter()
            .map(|(member_name, member)| {
                // Acquire every member up front so all fetches are in flight together
                let fetch = (!self.is_ready(member.container_key()))
                    .then(|| self.load_async(&member_name, &member));
                let store = self.clone();
                async move {
                    if let Some(fetch) = fetch {
                        if let Err(err) = fetch.await {
                            log::warn!("Failed to load directory member {member_name:?}: {err}");
                            return false;
                        }
                    }
                    store.expand(member.container_key())
                }
            });
        future::join_all(loads)
            .await
            .into_iter()
            .filter(|ready| *ready)
            .count()
    }
}
