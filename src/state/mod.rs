//! Shared state module
//!
//! The only process-wide state is the lifecycle context that coordinates shutdown.

pub mod lifecycle;

pub use lifecycle::Lifecycle;
