//! eventlog server entry point.
//!
//! Opens the event store, then starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use eventlog::api;
use eventlog::app_state::AppState;
use eventlog::config::{AppConfig, LogFormat, RECENT_EVENTS_LIMIT};
use eventlog::domain::BackupMonitor;
use eventlog::persistence::SqliteEventStore;
use eventlog::service::EventService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting eventlog");

    // Storage is ready before the listener accepts connections
    let store = SqliteEventStore::open(&config.db_path, config.database_max_connections)
        .await
        .with_context(|| format!("opening event store at {}", config.db_path.display()))?;

    let backups = BackupMonitor::new(&config.backup_dir, &config.backup_extension);
    tracing::info!(dir = %backups.dir().display(), "watching backup directory");

    let app_state = AppState::new(EventService::new(store, backups, RECENT_EVENTS_LIMIT));
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
