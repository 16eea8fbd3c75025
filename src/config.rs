//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Only `DB_PATH` is commonly set; every
//! other key falls back to the values the service has always used.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default SQLite database location.
pub const DEFAULT_DB_PATH: &str = "/data/app.db";

/// Default directory the external backup job writes into.
pub const DEFAULT_BACKUP_DIR: &str = "/backup";

/// Default backup file extension (`*.db`).
pub const DEFAULT_BACKUP_EXTENSION: &str = "db";

/// Maximum number of events returned by the listing endpoint.
pub const RECENT_EVENTS_LIMIT: u32 = 50;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Path of the SQLite database file.
    pub db_path: PathBuf,

    /// Maximum number of pooled SQLite connections.
    pub database_max_connections: u32,

    /// Directory scanned for backup files.
    pub backup_dir: PathBuf,

    /// File extension identifying backup files, without the dot.
    pub backup_extension: String,

    /// Log formatter selection.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;

        let db_path = env_or("DB_PATH", DEFAULT_DB_PATH).into();
        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);

        let backup_dir = env_or("BACKUP_DIR", DEFAULT_BACKUP_DIR).into();
        let backup_extension = env_or("BACKUP_EXTENSION", DEFAULT_BACKUP_EXTENSION);

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            db_path,
            database_max_connections,
            backup_dir,
            backup_extension,
            log_format,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u32 = parse_env("EVENTLOG_TEST_SURELY_UNSET_KEY", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn env_or_falls_back_on_missing_key() {
        assert_eq!(
            env_or("EVENTLOG_TEST_SURELY_UNSET_PATH", DEFAULT_DB_PATH),
            "/data/app.db"
        );
    }
}
