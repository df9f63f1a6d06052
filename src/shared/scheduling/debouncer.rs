//! Trailing-edge debounce as a cancellable scheduled task
//!
//! `arm` schedules a task to run once after the quiet period; arming again
//! before it fires cancels the previous schedule. Once a task has fired it
//! runs to completion, cancelling only affects schedules still waiting.

use crate::log_debug;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct PendingTask {
    token: CancellationToken,
    fired: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl PendingTask {
    fn is_waiting(&self) -> bool {
        !self.fired.load(Ordering::Acquire) && !self.token.is_cancelled()
    }
}

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<PendingTask>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn slot(&self) -> MutexGuard<'_, Option<PendingTask>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Schedule `task` to run after the quiet period, replacing any schedule
    /// that has not fired yet. Must be called from within a tokio runtime.
    pub fn arm<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let fired = Arc::new(AtomicBool::new(false));
        let delay = self.delay;

        let handle = {
            let token = token.clone();
            let fired = fired.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {
                        fired.store(true, Ordering::Release);
                        task().await;
                    }
                }
            })
        };

        let previous = self.slot().replace(PendingTask {
            token,
            fired,
            handle,
        });

        if let Some(previous) = previous {
            if previous.is_waiting() {
                log_debug!("Debounce: rescheduled, previous schedule dropped");
            }
            previous.token.cancel();
        }
    }

    /// Cancel a schedule that has not fired yet. Returns true if one was dropped.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(pending) => {
                let was_waiting = pending.is_waiting();
                pending.token.cancel();
                was_waiting
            }
            None => false,
        }
    }

    /// True while a schedule is waiting for its quiet period to elapse
    pub fn is_armed(&self) -> bool {
        self.slot().as_ref().map_or(false, PendingTask::is_waiting)
    }

    /// Teardown: cancel the schedule and abort a task that is already running
    pub fn shutdown(&self) {
        if let Some(pending) = self.slot().take() {
            pending.token.cancel();
            pending.handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
