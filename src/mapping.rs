//! Name-mapping tables produced by the packaging step
//!
//! Two tables drive resolution: loose resources (`name -> path`) and bundled
//! assets (`name -> container + asset paths`). Both are read-only once handed
//! to the resolver.

use std::collections::HashMap;

use serde::Deserialize;

use crate::Result;

/// Where a bundled logical name lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleMapping {
    /// Bare container identifier, e.g. `"ui/icons"`
    pub container: String,
    /// Asset paths inside the container; more than one for directories
    pub asset_paths: Vec<String>,
}

/// The loose-resource and bundle lookup tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MappingTables {
    pub resources: HashMap<String, String>,
    pub bundles: HashMap<String, BundleMapping>,
}

impl MappingTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse both tables from a JSON document
    ///
    /// ```
    /// use asset_vfs::MappingTables;
    ///
    /// let tables = MappingTables::from_json(r#"{
    ///     "resources": { "logo": "ui/logo" },
    ///     "bundles": { "enemy": { "container": "b1", "asset_paths": ["Assets/AssetBundles/b1/enemy.prefab"] } }
    /// }"#).unwrap();
    /// assert_eq!(tables.resource_path("logo"), Some("ui/logo"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register a loose resource
    pub fn with_resource(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.resources.insert(name.into(), path.into());
        self
    }

    /// Register a bundled asset (or directory, when `asset_paths` has several entries)
    pub fn with_bundle<I, S>(
        mut self,
        name: impl Into<String>,
        container: impl Into<String>,
        asset_paths: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bundles.insert(
            name.into(),
            BundleMapping {
                container: container.into(),
                asset_paths: asset_paths.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    pub fn resource_path(&self, name: &str) -> Option<&str> {
        self.resources.get(name).map(String::as_str)
    }

    pub fn bundle(&self, name: &str) -> Option<&BundleMapping> {
        self.bundles.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let tables = MappingTables::new()
            .with_resource("logo", "ui/logo")
            .with_bundle("enemy", "b1", ["a.prefab", "b.prefab"]);

        assert_eq!(tables.resource_path("logo"), Some("ui/logo"));
        assert_eq!(tables.bundle("enemy").map(|b| b.asset_paths.len()), Some(2));
        assert!(tables.bundle("logo").is_none());
    }

    #[test]
    fn test_json_missing_tables() {
        let tables = MappingTables::from_json("{}").unwrap();
        assert!(tables.resources.is_empty());
        assert!(tables.bundles.is_empty());
    }
}
