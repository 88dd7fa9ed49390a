//! Service management module
//!
//! This module contains the HTTP service and its start/stop lifecycle.

pub mod error;
pub mod http;

// Re-export main types
pub use error::ServiceError;
pub use http::{HttpService, ServiceState};
