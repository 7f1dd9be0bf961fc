//! Cancellable delayed-commit timer for coalescing bursts of input.
//!
//! Text filtering recomputes over the full catalog, so the collaborator
//! feeding search keystrokes coalesces them here before committing new
//! criteria: each submission cancels any pending commit and reschedules,
//! so at most one commit fires per quiescence window and the last
//! submitted value is the one that wins.
//!
//! The timer runs on the ambient tokio runtime; [`Debouncer`] must be
//! created and used inside one. Dropping the debouncer aborts any
//! pending commit, so no scheduled effect outlives its owner.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::trace;

/// Debounced, last-wins dispatcher for values of type `T`.
///
/// The commit callback runs on a spawned task after the configured
/// quiescence window. A commit that has already started executing cannot
/// be recalled; cancellation is only guaranteed while the window is
/// still open.
pub struct Debouncer<T> {
    delay: Duration,
    commit: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that commits through `commit` after `delay` of
    /// quiescence.
    pub fn new(delay: Duration, commit: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            commit: Arc::new(commit),
            pending: None,
        }
    }

    /// Submit a value, displacing any value still waiting in the window.
    pub fn submit(&mut self, value: T) {
        self.cancel();

        let delay = self.delay;
        let commit = Arc::clone(&self.commit);

        trace!(delay_ms = delay.as_millis() as u64, "debounce scheduled");
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            commit(value);
        }));
    }

    /// The configured quiescence window.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Debouncer<T> {
    /// Abort a pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns true if a commit is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
