//! Resolved asset locations and access modes

/// How a logical name should be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessMode {
    /// Never resolves
    None,
    /// Try bundled (local), fall back to loose resource
    #[default]
    Unknown,
    /// Loose resource only
    Resource,
    /// Bundled, local origin only
    AssetBundle,
    /// Bundled, remote origin first then local
    RemoteAssetBundle,
}

/// Which store backs a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    None,
    LooseResource,
    Bundled,
}

/// Origin of a bundled container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Local,
    Remote,
}

/// The result of resolving one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    kind: AssetKind,
    logical_paths: Vec<String>,
    container_key: String,
    container_name: String,
    container_root: String,
}

impl AssetLocation {
    /// An unusable location
    pub fn none() -> Self {
        Self {
            kind: AssetKind::None,
            logical_paths: Vec::new(),
            container_key: String::new(),
            container_name: String::new(),
            container_root: String::new(),
        }
    }

    pub fn loose(path: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::LooseResource,
            logical_paths: vec![path.into()],
            ..Self::none()
        }
    }

    /// A bundled location; the container key is `root + name`
    pub fn bundled(
        logical_paths: Vec<String>,
        container_root: impl Into<String>,
        container_name: impl Into<String>,
    ) -> Self {
        let container_root = container_root.into();
        let container_name = container_name.into();
        Self {
            kind: AssetKind::Bundled,
            logical_paths,
            container_key: format!("{container_root}{container_name}"),
            container_name,
            container_root,
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn logical_paths(&self) -> &[String] {
        &self.logical_paths
    }

    /// First logical path; the one single-object loads address
    pub fn primary_path(&self) -> Option<&str> {
        self.logical_paths.first().map(String::as_str)
    }

    pub fn container_key(&self) -> &str {
        &self.container_key
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn container_root(&self) -> &str {
        &self.container_root
    }

    /// True when the location names several assets
    pub fn is_directory(&self) -> bool {
        self.logical_paths.len() > 1
    }

    /// Whether the location can be acted upon
    pub fn is_legal(&self) -> bool {
        match self.kind {
            AssetKind::None => false,
            AssetKind::LooseResource => !self.logical_paths.is_empty(),
            AssetKind::Bundled => {
                !self.logical_paths.is_empty()
                    && !self.container_key.is_empty()
                    && !self.container_name.is_empty()
            }
        }
    }

    /// Split a bundled directory into one single-path location per member
    ///
    /// Each member lives in its own container named after the member path
    /// (see [`member_container_name`]) under the same root.
    pub fn directory_members(&self, bundles_prefix: &str) -> Vec<(String, AssetLocation)> {
        if self.kind != AssetKind::Bundled {
            return Vec::new();
        }
        self.logical_paths
            .iter()
            .map(|path| {
                let location = AssetLocation::bundled(
                    vec![path.clone()],
                    self.container_root.clone(),
                    member_container_name(path, bundles_prefix),
                );
                (file_stem(path).to_string(), location)
            })
            .collect()
    }
}

/// Container name for one member of a directory mapping
///
/// Strips the extension and the bundles prefix, then lowercases:
/// `Assets/AssetBundles/UI/Icon.png` becomes `ui/icon`.
pub fn member_container_name(asset_path: &str, bundles_prefix: &str) -> String {
    let without_ext = strip_extension(asset_path);
    let stripped = if bundles_prefix.is_empty() {
        without_ext.to_string()
    } else {
        without_ext.replace(bundles_prefix, "")
    };
    stripped.to_lowercase()
}

fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) => &path[..name_start + dot],
        None => path,
    }
}

fn file_stem(path: &str) -> &str {
    let without_ext = strip_extension(path);
    match without_ext.rfind('/') {
        Some(i) => &without_ext[i + 1..],
        None => without_ext,
    }
}
