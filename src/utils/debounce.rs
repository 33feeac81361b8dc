//! Trailing-edge debouncing for search and filter inputs
//!
//! List views fire a backend query on every keystroke; the debouncer holds
//! the call until input quiesces for a fixed delay. Only the most recently
//! scheduled call survives: scheduling a new one aborts whatever was pending,
//! giving last-write-wins semantics without an explicit cancellation token.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Fixed-delay, trailing-edge debouncer.
///
/// The timer handle is the only state; there is no queue. Dropping the
/// debouncer aborts any pending call.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiesce delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `op` to run after the delay, cancelling any pending call.
    pub fn call<F, Fut>(&self, op: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            op().await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            debug!("debounce: superseding pending call");
            previous.abort();
        }
    }

    /// Drop any pending call without running it.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
