//! Signal registration for graceful shutdown

use std::io;

use signal_hook::consts::{SIGINT, SIGQUIT, SIGTERM};
use signal_hook_tokio::Signals;

/// Signals that trigger a graceful shutdown
pub const SHUTDOWN_SIGNALS: [i32; 3] = [SIGINT, SIGTERM, SIGQUIT];

/// Register handlers for the shutdown signals (SIGINT, SIGTERM, SIGQUIT)
pub fn shutdown_signals() -> io::Result<Signals> {
    Signals::new(SHUTDOWN_SIGNALS)
}

/// Human readable name of a shutdown signal
pub fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        SIGQUIT => "SIGQUIT",
        _ => "unknown",
    }
}
