//! Service error types

use std::{io, time::Duration};

use thiserror::Error;

/// Errors raised while starting, running or stopping the HTTP service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("HTTP service is already running")]
    AlreadyRunning,

    #[error("HTTP service has already been stopped")]
    AlreadyStopped,

    #[error("HTTP server error: {0}")]
    Serve(#[from] io::Error),

    /// The accept loop ended without a stop request
    #[error("HTTP server stopped accepting connections unexpectedly")]
    AcceptLoopExited,

    /// In-flight requests did not finish before the deadline and were abandoned
    #[error("graceful shutdown did not complete within {0:?}, in-flight requests were abandoned")]
    ShutdownTimeout(Duration),

    #[error("HTTP server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
