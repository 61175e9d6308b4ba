//! Tokio async runtime implementation

use super::{AsyncSpawner, JoinHandle};
use std::future::Future;

/// Tokio-based async spawner
///
/// Spawns tasks on the ambient Tokio runtime; must be used from within one.
#[derive(Clone, Debug, Default, Copy)]
pub struct TokioSpawner;

impl TokioSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl AsyncSpawner for TokioSpawner {
    fn spawn<F>(&self, task: F) -> JoinHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        JoinHandle::new(tokio::spawn(task))
    }

    fn runtime_name(&self) -> &'static str {
        "Tokio"
    }

    fn block_on<F, T>(&self, future: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            // Already inside a runtime: only legal on a multi-threaded one
            Some(tokio::task::block_in_place(|| handle.block_on(future)))
        } else {
            let rt = tokio::runtime::Runtime::new().ok()?;
            Some(rt.block_on(future))
        }
    }
}
