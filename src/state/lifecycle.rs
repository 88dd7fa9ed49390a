//! Lifecycle context shared across the process

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Cancellable token coordinating shutdown.
///
/// Clones share the same underlying channel: cancelling any clone is observed
/// by every waiter. A context is cancelled at most once and never reset.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl Lifecycle {
    /// Create a new, uncancelled lifecycle context
    pub fn new() -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self {
            cancel_tx: Arc::new(cancel_tx),
        }
    }

    /// Cancel the context.
    ///
    /// Returns `true` only for the call that actually performed the
    /// cancellation; subsequent calls are no-ops returning `false`.
    pub fn cancel(&self) -> bool {
        let cancelled = self.cancel_tx.send_if_modified(|cancelled| {
            if *cancelled {
                false
            } else {
                *cancelled = true;
                true
            }
        });

        if cancelled {
            debug!("Lifecycle context cancelled");
        }
        cancelled
    }

    /// Check whether the context has been cancelled
    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    /// Wait until the context is cancelled
    pub async fn cancelled(&self) {
        let mut cancel_rx = self.cancel_tx.subscribe();
        // The sender lives as long as `self`, so this only returns once cancelled
        let _ = cancel_rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
