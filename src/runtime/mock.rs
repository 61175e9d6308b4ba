//! Mock async spawner for testing
//!
//! Either drops tasks or runs them to completion on the calling thread.

use super::{AsyncSpawner, JoinHandle};
use std::future::Future;

/// Spawn behavior for MockSpawner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSpawnBehavior {
    /// Drop tasks immediately (don't execute)
    Drop,
    /// Block on tasks synchronously using a simple executor
    BlockSync,
}

/// Mock async spawner for testing
#[derive(Clone, Debug)]
pub struct MockSpawner {
    behavior: MockSpawnBehavior,
}

impl Default for MockSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSpawner {
    /// Create a new mock spawner that drops tasks
    pub fn new() -> Self {
        Self {
            behavior: MockSpawnBehavior::Drop,
        }
    }

    pub fn with_behavior(behavior: MockSpawnBehavior) -> Self {
        Self { behavior }
    }

    /// Create a mock spawner that runs tasks synchronously
    pub fn blocking() -> Self {
        Self {
            behavior: MockSpawnBehavior::BlockSync,
        }
    }

    pub fn behavior(&self) -> MockSpawnBehavior {
        self.behavior
    }
}

impl AsyncSpawner for MockSpawner {
    fn spawn<F>(&self, task: F) -> JoinHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match self.behavior {
            MockSpawnBehavior::Drop => {
                drop(task);
                JoinHandle::new(())
            }
            MockSpawnBehavior::BlockSync => {
                futures::executor::block_on(task);
                JoinHandle::new(())
            }
        }
    }

    fn runtime_name(&self) -> &'static str {
        "Mock"
    }

    fn block_on<F, T>(&self, future: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        match self.behavior {
            MockSpawnBehavior::Drop => None,
            MockSpawnBehavior::BlockSync => Some(futures::executor::block_on(future)),
        }
    }
}
