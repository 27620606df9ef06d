//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::str::FromStr;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`CatalogConfig::from_env`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Create the `books` table on startup if it is missing.
    pub database_init_schema: bool,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl CatalogConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` cannot be parsed as a
    /// [`SocketAddr`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, std::net::AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://books.db?mode=rwc".to_string());

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 5),
            database_min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS", 1),
            database_connect_timeout_secs: parse_var(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 5),
            database_init_schema: parse_bool(&lookup, "DATABASE_INIT_SCHEMA", true),
            log_format: parse_var(&lookup, "LOG_FORMAT", LogFormat::Text),
        })
    }
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses a variable as a boolean. Accepts `"true"`, `"1"`, `"false"`,
/// `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CatalogConfig, std::net::AddrParseError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let Ok(cfg) = load(&[]) else {
            panic!("defaults must parse");
        };
        assert_eq!(cfg.listen_addr.port(), 3000);
        assert_eq!(cfg.database_url, "sqlite://books.db?mode=rwc");
        assert_eq!(cfg.database_max_connections, 5);
        assert!(cfg.database_init_schema);
        assert_eq!(cfg.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_applied() {
        let Ok(cfg) = load(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("DATABASE_INIT_SCHEMA", "FALSE"),
            ("LOG_FORMAT", "json"),
        ]) else {
            panic!("overrides must parse");
        };
        assert_eq!(cfg.listen_addr.port(), 8080);
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.database_max_connections, 2);
        assert!(!cfg.database_init_schema);
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_numbers_fall_back_to_default() {
        let Ok(cfg) = load(&[("DATABASE_CONNECT_TIMEOUT_SECS", "soon")]) else {
            panic!("config must parse");
        };
        assert_eq!(cfg.database_connect_timeout_secs, 5);
    }

    #[test]
    fn bad_listen_addr_is_an_error() {
        assert!(load(&[("LISTEN_ADDR", "not-an-addr")]).is_err());
    }
}
