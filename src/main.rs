//! Result Watch - countdown and result-link tracker
//! 
//! This is the main entry point for the result-watch application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

use result_watch::{
    api::create_router,
    config::Config,
    state::{AppController, SharePayload},
    utils::shutdown_signal,
    CountdownEngine, FileSelectionStore, HttpFeedClient, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("result_watch={},tower_http=info", config.log_level()))
        .init();

    info!("Starting result-watch v{}", env!("CARGO_PKG_VERSION"));
    let feed_client = HttpFeedClient::new(config.feed_url.clone());
    let store = FileSelectionStore::new(config.store_path.clone());
    info!("Configuration: feed={}, store={}, tick={}ms",
          feed_client.url(), store.path().display(), config.tick_period().as_millis());

    let controller = Arc::new(AppController::new(
        Arc::new(feed_client),
        Arc::new(store),
        CountdownEngine::new(Arc::new(SystemClock), config.tick_period()),
        SharePayload::new(config.share_url()),
    ));

    // Fetch the feed once; the countdown starts when it resolves
    let load_controller = Arc::clone(&controller);
    tokio::spawn(async move {
        if let Err(e) = load_controller.load().await {
            debug!("Initial load ended in failed phase: {}", e);
        }
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&controller));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /status                - Countdown, notification and links");
    info!("  POST /links/:id/activate    - Open a result link");
    info!("  POST /notification/toggle   - Show or dismiss the notification");
    info!("  POST /refresh               - Re-fetch the result feed");
    info!("  GET  /share                 - Share payload");
    info!("  GET  /health                - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    controller.shutdown();
    info!("Server shutdown complete");
    Ok(())
}
