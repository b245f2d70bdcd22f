use std::fmt;
use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::error::{CatalogError, Result};

/// Pool capacity used when `DB_MAX_CONNECTIONS` says nothing.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Statistics about the connection pool
#[derive(Debug, Clone)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
    pub max_size: u32,
}

/// Owns the process's PostgreSQL connection pool.
///
/// Constructed once at startup and handed to each DAO. A DAO cannot exist
/// without a pool, so querying before connecting is unrepresentable.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
    max_connections: u32,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Database {
    /// Connects a bounded pool and fails fast if the store is unreachable.
    ///
    /// Capacity comes from `DB_MAX_CONNECTIONS` when set, otherwise
    /// [`DEFAULT_MAX_CONNECTIONS`].
    pub async fn connect(url: &str) -> Result<Self> {
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self::connect_with(url, max_connections).await
    }

    /// Connects a bounded pool with an explicit capacity.
    pub async fn connect_with(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .test_before_acquire(true)
            .connect(url)
            .await
            .map_err(|e| {
                CatalogError::Storage(format!(
                    "Database connection failed: {}",
                    e
                ))
            })?;

        info!(
            "Database pool initialized with max_connections={}",
            max_connections
        );

        Ok(Database {
            pool,
            max_connections,
        })
    }

    /// Wraps an existing pool (mainly for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Database {
            pool,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Reference to the pool for DAO construction.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// One cheap round trip confirming the store still answers.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                CatalogError::Storage(format!("Database ping failed: {}", e))
            })?;

        Ok(())
    }

    /// Get connection pool statistics for monitoring
    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle() as u32,
            max_size: self.max_connections,
        }
    }
}
