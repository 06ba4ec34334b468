//! Scheduler port. Dispatches work off the foreground task.

use std::future::Future;
use std::pin::Pin;
use tokio::task::AbortHandle;

/// A unit of background work.
pub type BackgroundTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Executor for work that must not run on the foreground task.
///
/// Implemented by adapters (e.g. a tokio runtime handle). The returned handle
/// cancels the task when aborted.
pub trait BackgroundExecutor: Send + Sync {
    fn spawn(&self, task: BackgroundTask) -> AbortHandle;
}
