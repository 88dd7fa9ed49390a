//! http-dump - A diagnostic HTTP server
//!
//! This library accepts arbitrary HTTP requests, logs their method, URL, body
//! and optionally headers, and always replies 200 OK. Startup and graceful
//! shutdown are coordinated through a shared lifecycle context.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::Lifecycle;
pub use api::{create_router, RequestLogger};
pub use services::{HttpService, ServiceError, ServiceState};
pub use tasks::spawn_signal_watcher;
