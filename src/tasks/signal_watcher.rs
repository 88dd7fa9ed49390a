//! Signal watcher background task

use std::io;

use futures::stream::{Stream, StreamExt};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{
    state::Lifecycle,
    utils::{shutdown_signals, signal_name},
};

/// Register the shutdown signals and watch them on a dedicated task.
///
/// Fails only if the signal handlers cannot be installed.
pub fn spawn_signal_watcher(lifecycle: Lifecycle) -> io::Result<JoinHandle<()>> {
    let signals = shutdown_signals()?;
    Ok(tokio::spawn(watch_signals(signals, lifecycle)))
}

/// Cancel `lifecycle` on the first signal from `signals`.
///
/// Later signals are ignored. The stream is kept alive until it ends so that a
/// repeated Ctrl-C does not fall back to the default (terminating) action while
/// shutdown is still in progress. The task only ends when `signals` ends.
pub async fn watch_signals<S>(mut signals: S, lifecycle: Lifecycle)
where
    S: Stream<Item = i32> + Unpin,
{
    info!("Starting signal watcher");

    while let Some(signal) = signals.next().await {
        if lifecycle.cancel() {
            info!("Received signal: {}, shutting down", signal_name(signal));
        } else {
            debug!("Ignoring signal {}: shutdown already in progress", signal_name(signal));
        }
    }
}
