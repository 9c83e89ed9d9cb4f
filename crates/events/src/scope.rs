//! Lifetime scope for a screen's background work.
//!
//! Every task a screen starts is registered here. [`ScreenScope::dispose`]
//! (or dropping the scope) cancels all of them at once; there is no
//! per-operation cancellation and no timeout.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Owner of all outstanding tasks spawned on behalf of one screen.
pub struct ScreenScope {
    cancel: CancellationToken,
    tracker: TaskTracker,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    /// Run `future` on the Tokio runtime under this scope.
    ///
    /// The task stops at its next await point once the scope is disposed.
    /// Spawning on a disposed scope does nothing.
    pub fn spawn<F>(&self, operation: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel.is_cancelled() {
            tracing::debug!(operation, "Screen scope disposed, task not started");
            return;
        }

        let cancel = self.cancel.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(operation, "Screen task cancelled");
                }
                _ = future => {}
            }
        });
    }

    /// Number of tasks still running.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel every outstanding task. Idempotent.
    pub fn dispose(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!(pending = self.tracker.len(), "Disposing screen scope");
        }
        self.cancel.cancel();
    }

    /// Wait until every task spawned so far has finished or been cancelled.
    pub async fn settled(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
