//! Async runtime abstraction
//!
//! Loads are plain futures and can be driven by any executor. The
//! [`AsyncSpawner`] trait is only needed for fire-and-forget loads that report
//! through a callback (see [`AssetManager::spawn_load`](crate::AssetManager::spawn_load)).

pub mod mock;
#[cfg(feature = "runtime-tokio")]
pub mod tokio_impl;

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Handle to a spawned async task
///
/// This is a type-erased handle that allows recovering the runtime's own handle.
#[derive(Debug)]
pub struct JoinHandle {
    inner: Box<dyn std::any::Any + Send>,
}

impl JoinHandle {
    /// Create a new join handle
    pub fn new<T: Send + 'static>(handle: T) -> Self {
        Self {
            inner: Box::new(handle),
        }
    }

    /// Try to downcast to a specific handle type
    pub fn downcast<T: 'static>(self) -> Option<T> {
        self.inner.downcast::<T>().ok().map(|b| *b)
    }
}

/// Async task spawner trait
///
/// # Example
/// ```ignore
/// let spawner = TokioSpawner::new();
/// spawner.spawn(async {
///     // Async work here
/// });
/// ```
pub trait AsyncSpawner: Send + Sync + Clone + Debug {
    /// Spawn a task that runs in the background
    fn spawn<F>(&self, task: F) -> JoinHandle
    where
        F: Future<Output = ()> + Send + 'static;

    /// Get the name of this runtime (for debugging)
    fn runtime_name(&self) -> &'static str;

    /// Block on a future (if supported by the runtime)
    ///
    /// Returns None if blocking is not supported.
    fn block_on<F, T>(&self, _future: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        None
    }
}

/// Suspend the current task once, then resume on the next poll
///
/// Models a fetch that does not complete within the scheduling turn it was
/// issued in.
pub fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

/// Future returned by [`yield_now`]
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

pub use mock::MockSpawner;
