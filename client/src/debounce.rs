//! Cancellable quiescence timer behind the search dispatch.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Restartable delay timer. Each `schedule` supersedes the previous one, so
/// only the action scheduled last may run.
pub struct Debouncer {
    delay: Duration,
    latest: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

/// Proof of being the newest scheduled action. Checked when the timer fires
/// and again before publishing whatever the action produced.
#[derive(Clone)]
pub struct DebounceTicket {
    issued: u64,
    latest: Arc<AtomicU64>,
}

impl DebounceTicket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.issued
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        Debouncer {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Restart the quiescence window. The action runs once the window passes
    /// without another schedule; an earlier pending action will not run.
    pub fn schedule<F, Fut>(&mut self, action: F)
    where
        F: FnOnce(DebounceTicket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.dispatch(self.delay, action);
    }

    /// Supersede any pending action and run this one without waiting.
    pub fn schedule_now<F, Fut>(&mut self, action: F)
    where
        F: FnOnce(DebounceTicket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.dispatch(Duration::ZERO, action);
    }

    fn dispatch<F, Fut>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce(DebounceTicket) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let issued = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let ticket = DebounceTicket {
            issued,
            latest: Arc::clone(&self.latest),
        };
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if ticket.is_current() {
                action(ticket).await;
            }
        }));
    }

    /// Invalidate the pending action, if any. Tickets issued so far go stale,
    /// so an action already past its timer cannot publish either.
    pub fn cancel(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/debounce_tests.rs"]
mod tests;
