//! Per-container load state

use std::sync::Arc;

use futures::future::{BoxFuture, Shared};

use super::source::BundleContent;
use crate::VfsError;

/// Outcome shared by every waiter of one fetch
pub(crate) type FetchOutcome = std::result::Result<(), Arc<VfsError>>;
pub(crate) type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

/// Where a container is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Known but never fetched
    Unloaded,
    /// Content or dependencies still arriving
    Fetching,
    /// Content present and every dependency loaded
    Loaded,
    /// The last fetch failed; the next acquisition retries
    Failed(String),
}

/// One loaded (or loading) container, owned by the store
pub(crate) struct Container {
    pub(crate) name: String,
    pub(crate) root: String,
    pub(crate) generation: u64,
    pub(crate) content: Option<Arc<BundleContent>>,
    /// `None` until the dependency list has been discovered and acquired
    pub(crate) dependencies: Option<Vec<String>>,
    pub(crate) dependencies_loaded: usize,
    pub(crate) ref_count: usize,
    pub(crate) expanded: bool,
    pub(crate) state: LoadState,
    pub(crate) pending: Option<SharedFetch>,
}

impl Container {
    pub(crate) fn new(name: &str, root: &str, generation: u64) -> Self {
        Self {
            name: name.to_string(),
            root: root.to_string(),
            generation,
            content: None,
            dependencies: None,
            dependencies_loaded: 0,
            ref_count: 0,
            expanded: false,
            state: LoadState::Unloaded,
            pending: None,
        }
    }

    pub(crate) fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, Vec::len)
    }

    /// Content arrived and the dependency graph below it is complete
    pub(crate) fn is_ready(&self) -> bool {
        self.content.is_some() && self.dependencies_loaded >= self.dependency_count()
    }

    pub(crate) fn progress(&self) -> f32 {
        if self.is_ready() {
            return 1.0;
        }
        let own = usize::from(self.content.is_some());
        (own + self.dependencies_loaded) as f32 / (self.dependency_count() + 1) as f32
    }

    pub(crate) fn status(&self, key: &str) -> ContainerStatus {
        ContainerStatus {
            key: key.to_string(),
            name: self.name.clone(),
            root: self.root.clone(),
            state: self.state.clone(),
            ref_count: self.ref_count,
            has_content: self.content.is_some(),
            dependencies: self.dependencies.clone().unwrap_or_default(),
            dependencies_loaded: self.dependencies_loaded,
            expanded: self.expanded,
            progress: self.progress(),
        }
    }
}

/// Snapshot of a container, as seen by callers
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStatus {
    pub key: String,
    pub name: String,
    pub root: String,
    pub state: LoadState,
    pub ref_count: usize,
    pub has_content: bool,
    pub dependencies: Vec<String>,
    pub dependencies_loaded: usize,
    pub expanded: bool,
    pub progress: f32,
}

impl ContainerStatus {
    /// Usable for object retrieval
    pub fn is_ready(&self) -> bool {
        self.has_content && self.dependencies_loaded >= self.dependencies.len()
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Fetching
    }
}
