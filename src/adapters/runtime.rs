//! Implements BackgroundExecutor on a tokio runtime.

use crate::ports::{BackgroundExecutor, BackgroundTask};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Spawns background tasks onto a tokio runtime.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor on the runtime of the calling task. Panics outside a runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl BackgroundExecutor for TokioExecutor {
    fn spawn(&self, task: BackgroundTask) -> AbortHandle {
        self.handle.spawn(task).abort_handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn spawned_task_runs() {
        let executor = TokioExecutor::current();
        let (tx, rx) = oneshot::channel();

        executor.spawn(Box::pin(async move {
            let _ = tx.send(7);
        }));

        assert_eq!(rx.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn aborted_task_drops_its_sender() {
        let executor = TokioExecutor::current();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = executor.spawn(Box::pin(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = tx.send(());
        }));
        handle.abort();

        assert!(rx.await.is_err());
    }
}
