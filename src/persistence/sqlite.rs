//! SQLite pool construction and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::CatalogConfig;

/// Opens the connection pool described by `config`.
///
/// In-memory databases live only as long as their connection, so for
/// `sqlite::memory:` URLs idle connections are never reaped.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be
/// opened.
pub async fn connect(config: &CatalogConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("invalid database url: {}", config.database_url))?;

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs));

    if is_in_memory(&config.database_url) {
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .context("failed to open sqlite database")?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Creates the `books` table if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT NOT NULL
        );
        ",
    )
    .execute(pool)
    .await
    .context("failed to create books table")?;

    tracing::info!("books schema ready");
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn memory_config() -> CatalogConfig {
        let Ok(mut config) = CatalogConfig::from_lookup(|_| None) else {
            panic!("default config must parse");
        };
        config.database_url = "sqlite::memory:".to_string();
        config.database_max_connections = 1;
        config
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let Ok(pool) = connect(&memory_config()).await else {
            panic!("in-memory pool must open");
        };
        assert!(ensure_schema(&pool).await.is_ok());
        assert!(ensure_schema(&pool).await.is_ok());

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await;
        assert!(matches!(count, Ok(0)));
    }

    #[tokio::test]
    async fn missing_database_file_is_an_error() {
        let mut config = memory_config();
        config.database_url = "sqlite:///definitely/not/here/books.db".to_string();
        assert!(connect(&config).await.is_err());
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://books.db?mode=rwc"));
    }
}
