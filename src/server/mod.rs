// HTTP server for the browser front end
// Serves the JSON API and, when configured, the built front end itself.

pub mod routes;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, warn};

use crate::commands::AppState;
use crate::config::AppConfig;
use crate::error::Result;

/// Holds the running server's shutdown mechanism
pub struct RunningServer {
    pub shutdown_tx: oneshot::Sender<()>,
    pub addr: SocketAddr,
    pub handle: JoinHandle<()>,
}

impl RunningServer {
    /// Signal shutdown and wait for the server task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.handle.await {
            error!(error = %e, "Server task failed");
        }
    }
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_origin(HeaderValue::from_static("*"));

    let api = routes::api_routes().with_state(state);

    match static_dir.filter(|p| p.join("index.html").exists()) {
        Some(dist_path) => {
            info!(path = ?dist_path, "Serving front end");
            let index = dist_path.join("index.html");
            api.fallback_service(ServeDir::new(&dist_path).fallback(ServeFile::new(index)))
                .layer(cors)
        }
        None => {
            info!("No front end dist found, API-only mode");
            api.layer(cors)
        }
    }
}

/// Start the HTTP server. Returns once the listener is bound.
pub async fn start_server(config: &AppConfig, state: Arc<AppState>) -> Result<RunningServer> {
    let app = build_router(state, config.static_dir.clone());

    let listener = try_bind(&config.host, config.port).await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    info!(%addr, "Server starting");

    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Shutdown signal received, draining connections");
            })
            .await;
        if let Err(e) = result {
            error!(error = %e, "Server error");
        }
        info!("Server stopped");
    });

    Ok(RunningServer {
        shutdown_tx,
        addr,
        handle,
    })
}

/// Bind the preferred port, then the next ten, then an OS-assigned one.
async fn try_bind(host: &str, preferred_port: u16) -> Result<TcpListener> {
    if let Ok(listener) = TcpListener::bind((host, preferred_port)).await {
        return Ok(listener);
    }

    for offset in 1..=10u16 {
        let port = preferred_port.saturating_add(offset);
        if let Ok(listener) = TcpListener::bind((host, port)).await {
            warn!(preferred_port, port, "Preferred port unavailable");
            return Ok(listener);
        }
    }

    let listener = TcpListener::bind((host, 0)).await?;
    warn!(
        preferred_port,
        port = listener.local_addr()?.port(),
        "All preferred ports unavailable, using OS-assigned port"
    );
    Ok(listener)
}
