//! HTTP service with an explicit start/stop lifecycle

use std::{io, net::SocketAddr, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::watch, task::JoinHandle};
use tracing::{debug, error, info};

use super::ServiceError;
use crate::state::Lifecycle;

/// Observable lifecycle state of an [`HttpService`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Created,
    Running,
    Stopped,
}

#[derive(Debug)]
enum Phase {
    Created,
    Running(RunningServer),
    Stopped,
}

#[derive(Debug)]
struct RunningServer {
    local_addr: SocketAddr,
    stop_tx: watch::Sender<bool>,
    server: JoinHandle<Result<(), ServiceError>>,
}

/// HTTP service owning its listener and request handler.
///
/// The listener is open only between a successful [`start`](Self::start) and
/// a completed [`stop`](Self::stop). Once stopped, the service cannot be
/// restarted.
#[derive(Debug)]
pub struct HttpService {
    addr: String,
    router: Router,
    phase: Phase,
}

impl HttpService {
    /// Create a service that will serve `router` on `addr` once started
    pub fn new(addr: impl Into<String>, router: Router) -> Self {
        Self {
            addr: addr.into(),
            router,
            phase: Phase::Created,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServiceState {
        match self.phase {
            Phase::Created => ServiceState::Created,
            Phase::Running(_) => ServiceState::Running,
            Phase::Stopped => ServiceState::Stopped,
        }
    }

    /// Address the listener is bound to, while running
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match &self.phase {
            Phase::Running(running) => Some(running.local_addr),
            _ => None,
        }
    }

    /// Bind the listener and start accepting connections in the background.
    ///
    /// Returns as soon as the listener is bound. On bind failure the service
    /// stays in [`ServiceState::Created`] and the caller decides whether to
    /// abort. If the accept loop later exits without a stop request,
    /// `lifecycle` is cancelled so the process can shut down.
    pub async fn start(&mut self, lifecycle: &Lifecycle) -> Result<SocketAddr, ServiceError> {
        match self.phase {
            Phase::Created => {}
            Phase::Running(_) => return Err(ServiceError::AlreadyRunning),
            Phase::Stopped => return Err(ServiceError::AlreadyStopped),
        }

        let listener = TcpListener::bind(&self.addr)
            .await
            .map_err(|source| ServiceError::Bind {
                addr: self.addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        info!("Listening on http://{}", local_addr);

        let (stop_tx, stop_rx) = watch::channel(false);
        let server = tokio::spawn(serve(
            listener,
            self.router.clone(),
            stop_rx,
            lifecycle.clone(),
        ));

        self.phase = Phase::Running(RunningServer {
            local_addr,
            stop_tx,
            server,
        });
        Ok(local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests.
    ///
    /// Returns [`ServiceError::ShutdownTimeout`] if requests are still running
    /// after `timeout`. The listener is already closed by then, but requests in
    /// flight are abandoned rather than cut off: their connection tasks run to
    /// completion on the runtime. Calling this on a service that is not running
    /// is a no-op.
    pub async fn stop(&mut self, timeout: Duration) -> Result<(), ServiceError> {
        let RunningServer {
            local_addr,
            stop_tx,
            mut server,
        } = match std::mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Running(running) => running,
            other => {
                self.phase = other;
                debug!("Stop requested on a service that is not running");
                return Ok(());
            }
        };

        info!("Stopping HTTP server on {}", local_addr);
        stop_tx.send_replace(true);

        match tokio::time::timeout(timeout, &mut server).await {
            Ok(joined) => joined?,
            Err(_) => {
                server.abort();
                Err(ServiceError::ShutdownTimeout(timeout))
            }
        }
    }
}

/// Accept loop: serves until a stop is requested, then drains connections
async fn serve(
    listener: TcpListener,
    router: Router,
    stop_rx: watch::Receiver<bool>,
    lifecycle: Lifecycle,
) -> Result<(), ServiceError> {
    let mut shutdown_rx = stop_rx.clone();
    let result = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            // A dropped sender also ends the loop
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
        })
        .await;

    accept_loop_outcome(result, &stop_rx, &lifecycle)
}

/// Classify the end of the accept loop.
///
/// Exiting after a stop request (or after the service was dropped) is normal.
/// Any other exit is fatal: it is logged and `lifecycle` is cancelled.
fn accept_loop_outcome(
    result: io::Result<()>,
    stop_rx: &watch::Receiver<bool>,
    lifecycle: &Lifecycle,
) -> Result<(), ServiceError> {
    let stop_requested = *stop_rx.borrow();
    let service_dropped = stop_rx.has_changed().is_err();
    if stop_requested || service_dropped {
        debug!("HTTP server drained all connections");
        return result.map_err(ServiceError::from);
    }

    // Nobody asked us to stop, so the service is dead while the process looks alive
    let err = match result {
        Err(e) => ServiceError::Serve(e),
        Ok(()) => ServiceError::AcceptLoopExited,
    };
    error!("{}", err);
    lifecycle.cancel();
    Err(err)
}
