//! SQLite connection pool.
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::Result;

/// Connection pool shared by all handlers.
pub type Pool = sqlx::SqlitePool;

const MAX_CONNECTIONS: u32 = 5;

/// Opens the database at `url`, creating the file if needed.
///
/// An in-memory database only lives as long as its connection, so such a
/// pool keeps exactly one connection open for its whole life.
pub async fn connect(url: &str) -> Result<Pool> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let builder = if is_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };
    let pool = builder.connect_with(options).await?;
    tracing::debug!(url, "database connected");
    Ok(pool)
}

/// Runs schema statements, each one idempotent.
pub async fn migrate(pool: &Pool, statements: &[&str]) -> Result<()> {
    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

fn is_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
