//! Application context shared by all route handlers via Axum state.

use std::sync::Arc;

use rusqlite::Connection;
use tb_core::config::Config;
use tb_core::{Error, Result};
use tb_db::pool::DbPool;

/// Application context shared by all request handlers.
///
/// This is cheaply cloneable because it only holds a pool handle and `Arc`s.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool.
    pub db: DbPool,
    /// Immutable application configuration snapshot.
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(db: DbPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Run `f` against a pooled connection on the blocking thread pool.
    ///
    /// SQLite calls are synchronous; keeping them off the async workers
    /// means a slow statement never stalls other in-flight requests.
    pub async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let conn = tb_db::pool::get_conn(&db)?;
            f(&conn)
        })
        .await
        .map_err(|e| Error::Internal(format!("spawn_blocking join error: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_conn_runs_queries() {
        let ctx = AppContext::new(tb_db::pool::init_memory_pool().unwrap(), Config::default());
        let count: i64 = ctx
            .with_conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
                    .map_err(|e| Error::database(e.to_string()))
            })
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn with_conn_propagates_errors() {
        let ctx = AppContext::new(tb_db::pool::init_memory_pool().unwrap(), Config::default());
        let err = ctx
            .with_conn(|_| -> Result<()> { Err(Error::not_found("User not found")) })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
