//! Delayed, cancellable one-shot tasks on the Tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// A job that runs once after a delay unless cancelled first.
///
/// Dropping the task before the delay elapses also cancels it.
#[derive(Debug)]
pub struct ScheduledTask {
    cancel_tx: oneshot::Sender<()>,
}

impl ScheduledTask {
    /// Spawns `job` to run after `delay` on the current Tokio runtime.
    ///
    /// ## Errors
    /// `Internal` when called outside a Tokio runtime.
    pub fn schedule<F>(delay: Duration, job: F) -> ApiResult<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current()
            .map_err(|e| ApiError::internal(format!("No async runtime for checkout: {}", e)))?;

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        runtime.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => job(),
                _ = cancel_rx => debug!("Scheduled task cancelled"),
            }
        });

        Ok(ScheduledTask { cancel_tx })
    }

    /// Stops the job if it has not started yet.
    pub fn cancel(self) {
        let _ = self.cancel_tx.send(());
    }
}
