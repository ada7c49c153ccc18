use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::domain::repositories::RepositoryError;

/// Owns the SQLite connection and bridges synchronous rusqlite calls onto the
/// async runtime with spawn_blocking. Constructed once in main and handed to
/// each repository.
#[derive(Clone)]
pub struct DatabaseManager {
    connection: Arc<Mutex<Connection>>,
}

impl DatabaseManager {
    /// Open (or create) the database at `db_path` and apply pragmas.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let connection = Connection::open(db_path.as_ref())
            .map_err(|e| RepositoryError::Storage(format!("Failed to open database: {}", e)))?;

        connection
            .execute_batch(
                "PRAGMA foreign_keys = ON;
                 PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;",
            )
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Run a blocking database operation on the blocking thread pool.
    pub async fn execute_blocking<F, T>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection = self.connection.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = connection
                .lock()
                .map_err(|e| RepositoryError::Storage(format!("Lock poisoned: {}", e)))?;
            operation(&mut conn).map_err(|e| RepositoryError::Storage(e.to_string()))
        })
        .await
        .map_err(|_| RepositoryError::Storage("Database task join error".to_string()))?
    }

    /// Create the tables from schema.sql if they do not exist yet.
    pub async fn initialize(&self) -> Result<(), RepositoryError> {
        let schema = include_str!("schema.sql");
        self.execute_blocking(move |conn| conn.execute_batch(schema))
            .await?;
        info!("database schema ready");
        Ok(())
    }
}
