//! Progress and cancellation reporting for long-running calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

/// Progress/cancellation token handed to every operation that may block.
///
/// Implementations only need to expose a cancellation token; progress
/// reporting hooks default to no-ops.
pub trait ProgressMonitor: Send + Sync {
    /// Token that is cancelled when the caller gives up on the operation.
    fn cancel_token(&self) -> &CancellationToken;

    fn is_cancelled(&self) -> bool {
        self.cancel_token().is_cancelled()
    }

    fn begin_task(&self, _name: &str, _total_work: usize) {}

    fn sub_task(&self, _name: &str) {}

    fn worked(&self, _amount: usize) {}

    fn done(&self) {}
}

/// Default monitor backed by a [`CancellationToken`].
/// Progress is forwarded to `tracing` at trace level.
#[derive(Debug, Default)]
pub struct TokenMonitor {
    token: CancellationToken,
    worked: AtomicUsize,
}

impl TokenMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monitor sharing an existing token (e.g. a child of a request token).
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            worked: AtomicUsize::new(0),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Units of work reported so far.
    pub fn worked_units(&self) -> usize {
        self.worked.load(Ordering::Relaxed)
    }
}

impl ProgressMonitor for TokenMonitor {
    fn cancel_token(&self) -> &CancellationToken {
        &self.token
    }

    fn begin_task(&self, name: &str, total_work: usize) {
        tracing::trace!(task = name, total_work, "Task started");
    }

    fn sub_task(&self, name: &str) {
        tracing::trace!(sub_task = name, "Sub-task");
    }

    fn worked(&self, amount: usize) {
        self.worked.fetch_add(amount, Ordering::Relaxed);
    }

    fn done(&self) {
        tracing::trace!(worked = self.worked_units(), "Task done");
    }
}
