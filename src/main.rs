//! http-dump - A diagnostic HTTP server
//!
//! This is the main entry point for the http-dump application.

use anyhow::Context;
use tracing::{error, info, warn};

use http_dump::{
    api::{create_router, RequestLogger},
    config::Config,
    services::{HttpService, ServiceError},
    state::Lifecycle,
    tasks::spawn_signal_watcher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("http_dump={},tower_http=info", config.log_level()))
        .init();

    info!("Starting http-dump server v1.0.0");
    info!("Configuration: host={}, port={}, headers={}, shutdown_timeout={}s",
          config.host, config.port, config.headers, config.shutdown_timeout);

    let lifecycle = Lifecycle::new();
    let _signal_watcher = spawn_signal_watcher(lifecycle.clone()).context("failed to register signal handlers")?;

    let app = create_router(RequestLogger::new(config.headers));
    let mut service = HttpService::new(config.address(), app);

    if let Err(e) = service.start(&lifecycle).await {
        lifecycle.cancel();
        return Err(e).context("failed to start HTTP server");
    }

    // Cancelled by a signal or by a fatal accept loop error
    lifecycle.cancelled().await;

    match service.stop(config.shutdown_timeout()).await {
        Ok(()) => {
            info!("HTTP server is stopped gracefully");
            Ok(())
        }
        Err(e @ ServiceError::ShutdownTimeout(_)) => {
            warn!("failed to stop server gracefully: {}", e);
            Ok(())
        }
        Err(e) => {
            error!("HTTP server terminated: {}", e);
            Err(e.into())
        }
    }
}
