//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod signal_watcher;

// Re-export main functions
pub use signal_watcher::{spawn_signal_watcher, watch_signals};
