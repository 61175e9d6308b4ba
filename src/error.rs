//! Error types for asset_vfs

use thiserror::Error;

/// Main error type for store and backend operations
///
/// The [`AssetManager`](crate::AssetManager) never surfaces these for ordinary
/// misses; it logs them and degrades to `None`.
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mapping data error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Source error: {0}")]
    Source(#[from] anyhow::Error),

    #[error("Dependency {dependency} of container {container} failed to load")]
    Dependency {
        container: String,
        dependency: String,
    },

    #[error("Fetch of {0} failed: {1}")]
    Fetch(String, String),
}

/// Result type alias for asset_vfs operations
pub type Result<T> = std::result::Result<T, VfsError>;
