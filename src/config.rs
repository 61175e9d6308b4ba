//! Runtime configuration

use serde::Deserialize;

use crate::Result;

/// Configuration for an [`AssetManager`](crate::AssetManager)
///
/// Every field has a default, so a partial JSON document is accepted:
///
/// ```
/// use asset_vfs::VfsConfig;
///
/// let config = VfsConfig::from_json(r#"{ "local_root": "/bundles/" }"#).unwrap();
/// assert_eq!(config.local_root, "/bundles/");
/// assert!(!config.editor_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VfsConfig {
    /// Prefix shared by all locally shipped containers
    pub local_root: String,
    /// Prefix shared by all downloaded containers
    pub remote_root: String,
    /// Authoring-side folder that bundle asset paths are rooted at
    pub bundles_prefix: String,
    /// Resolve bundled assets through the authoring index instead of containers
    pub editor_mode: bool,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            local_root: "bundles/".to_string(),
            remote_root: "remote/".to_string(),
            bundles_prefix: "Assets/AssetBundles/".to_string(),
            editor_mode: false,
        }
    }
}

impl VfsConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_local_root(mut self, root: impl Into<String>) -> Self {
        self.local_root = root.into();
        self
    }

    pub fn with_remote_root(mut self, root: impl Into<String>) -> Self {
        self.remote_root = root.into();
        self
    }

    pub fn with_bundles_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bundles_prefix = prefix.into();
        self
    }

    pub fn with_editor_mode(mut self, enabled: bool) -> Self {
        self.editor_mode = enabled;
        self
    }
}
