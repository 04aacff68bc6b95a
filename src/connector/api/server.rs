use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::container::Container;
use super::router::{build_router, CHAT_PATH, HEALTH_PATH};

pub struct ServerOptions {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// Bind, announce the endpoints, and serve until SIGINT or SIGTERM.
pub async fn serve(container: Arc<Container>, options: ServerOptions) -> Result<()> {
    let app = build_router(container, &options.cors_origins);

    let listener = TcpListener::bind((options.host.as_str(), options.port)).await?;
    let addr = listener.local_addr()?;

    info!("Server running on port {}", addr.port());
    info!("Health check: http://{}{}", addr, HEALTH_PATH);
    info!("Chat endpoint: http://{}{}", addr, CHAT_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install CTRL+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
