//! Persistence gateway: the single SQLite connection, schema DDL and statement execution.
//! Repositories never touch the connection directly; every statement goes through [`Database`].

use crate::error::StoreError;
use crate::sql::SqlValue;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow};
use std::str::FromStr;
use tokio::sync::Mutex;

const CLIENTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS clients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone TEXT NOT NULL
    )
"#;

const ORDERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_id INTEGER NOT NULL,
        product TEXT NOT NULL,
        amount REAL NOT NULL,
        date TEXT NOT NULL,
        FOREIGN KEY (client_id) REFERENCES clients(id)
            ON DELETE CASCADE
    )
"#;

/// Outcome of a mutating statement. Success only means the statement ran;
/// `rows_affected` tells whether anything matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Executed {
    pub rows_affected: u64,
    /// Rowid assigned by this statement (meaningful for inserts only).
    pub last_insert_id: i64,
}

impl Executed {
    /// `StoreError::NotFound` when the statement matched no row.
    pub fn matched(self) -> Result<Self, StoreError> {
        if self.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(self)
    }
}

/// Owns at most one live connection. Statements are serialized by the mutex.
pub struct Database {
    url: String,
    conn: Mutex<Option<SqliteConnection>>,
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Database {
            url: url.into(),
            conn: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open the connection, creating the database file when missing.
    /// Failure is logged and leaves the gateway disconnected.
    pub async fn connect(&self) {
        let opts = match SqliteConnectOptions::from_str(&self.url) {
            Ok(opts) => opts.create_if_missing(true).foreign_keys(true),
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "invalid database url");
                return;
            }
        };
        match opts.connect().await {
            Ok(conn) => {
                *self.conn.lock().await = Some(conn);
                tracing::info!(url = %self.url, "connected to database");
            }
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "failed to connect to database");
            }
        }
    }

    pub async fn disconnect(&self) {
        let conn = self.conn.lock().await.take();
        if let Some(conn) = conn {
            if let Err(e) = conn.close().await {
                tracing::warn!(error = %e, "error while closing database connection");
            }
            tracing::info!("database connection closed");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    /// True when the connection is open and answers `SELECT 1`.
    pub async fn ping(&self) -> bool {
        let mut guard = self.conn.lock().await;
        match guard.as_mut() {
            Some(conn) => sqlx::query("SELECT 1").fetch_optional(&mut *conn).await.is_ok(),
            None => false,
        }
    }

    /// Create `clients` and `orders` if they do not exist, in one transaction. Idempotent.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(StoreError::NotConnected)?;
        match create_tables(conn).await {
            Ok(()) => {
                tracing::info!("schema ready");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create tables");
                Err(e.into())
            }
        }
    }

    /// Run an INSERT/UPDATE/DELETE. Store errors are logged here and returned classified.
    pub async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Executed, StoreError> {
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let mut guard = self.conn.lock().await;
        let Some(conn) = guard.as_mut() else {
            tracing::warn!(sql = %sql, "execute without a connection");
            return Err(StoreError::NotConnected);
        };
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(p.clone());
        }
        match query.execute(&mut *conn).await {
            Ok(done) => Ok(Executed {
                rows_affected: done.rows_affected(),
                last_insert_id: done.last_insert_rowid(),
            }),
            Err(e) => {
                tracing::warn!(sql = %sql, error = %e, "statement failed");
                Err(e.into())
            }
        }
    }

    /// All rows of a SELECT; empty on any error.
    pub async fn fetch_all<O>(&self, sql: &str, params: &[SqlValue]) -> Vec<O>
    where
        O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, params = ?params, "fetch_all");
        let mut guard = self.conn.lock().await;
        let Some(conn) = guard.as_mut() else {
            tracing::warn!(sql = %sql, "fetch without a connection");
            return Vec::new();
        };
        let mut query = sqlx::query_as::<_, O>(sql);
        for p in params {
            query = query.bind(p.clone());
        }
        query.fetch_all(&mut *conn).await.unwrap_or_else(|e| {
            tracing::warn!(sql = %sql, error = %e, "fetch failed");
            Vec::new()
        })
    }

    /// First row of a SELECT; `None` on no match or any error.
    pub async fn fetch_one<O>(&self, sql: &str, params: &[SqlValue]) -> Option<O>
    where
        O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, params = ?params, "fetch_one");
        let mut guard = self.conn.lock().await;
        let Some(conn) = guard.as_mut() else {
            tracing::warn!(sql = %sql, "fetch without a connection");
            return None;
        };
        let mut query = sqlx::query_as::<_, O>(sql);
        for p in params {
            query = query.bind(p.clone());
        }
        query.fetch_optional(&mut *conn).await.unwrap_or_else(|e| {
            tracing::warn!(sql = %sql, error = %e, "fetch failed");
            None
        })
    }
}

async fn create_tables(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;
    sqlx::query(CLIENTS_DDL).execute(&mut *tx).await?;
    sqlx::query(ORDERS_DDL).execute(&mut *tx).await?;
    tx.commit().await
}
