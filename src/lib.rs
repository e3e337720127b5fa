// Modules
pub mod ai;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod server;
pub mod song;

use commands::AppState;
use config::AppConfig;
use db::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global tracing subscriber. `LOG_LEVEL` overrides the INFO default.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();
}

/// Open storage, start the HTTP server and serve until Ctrl-C.
pub async fn run() -> error::Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    info!(
        "Opening SQLite settings database at {:?}...",
        config.db_path
    );
    let db = Database::open(&config.db_path)?;

    let state = Arc::new(AppState::new(db, config.gemini_base_url.clone())?);
    let server = server::start_server(&config, state).await?;
    info!("Zexly ready at http://{}", server.addr);

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received, shutting down");
    server.shutdown().await;
    Ok(())
}
