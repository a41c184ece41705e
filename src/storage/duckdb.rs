//! DuckDB-backed [`ClientStore`].
//!
//! One embedded database handle per store, opened once from an opaque
//! connection string (`:memory:` or a file path) and shared by all
//! operations behind an async mutex. The `clients` table's primary key is
//! the unique index that arbitrates duplicate identifiers; no other
//! locking is layered on top.

use crate::error::Result;
use crate::models::ClientRecord;
use crate::storage::ClientStore;
use async_trait::async_trait;
use duckdb::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct DuckDbStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDbStore {
    /// Opens the database identified by `connection` and ensures the
    /// `clients` table exists. The handle lives as long as the store.
    pub async fn new(connection: &str) -> Result<Self> {
        let conn = if connection == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(connection)?
        };
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS clients (
                client_id BIGINT PRIMARY KEY,
                username TEXT NOT NULL,
                system_id TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

/// DuckDB surfaces a primary-key collision as a generic failure whose
/// message carries the constraint diagnostics; no structured error code
/// survives the C API boundary.
fn is_duplicate_key(err: &duckdb::Error) -> bool {
    matches!(
        err,
        duckdb::Error::DuckDBFailure(_, Some(msg))
            if msg.contains("Constraint Error") && msg.contains("Duplicate key")
    )
}

fn row_to_record(row: &duckdb::Row<'_>) -> duckdb::Result<ClientRecord> {
    let system_id: String = row.get(2)?;
    Ok(ClientRecord {
        client_id: row.get(0)?,
        username: row.get(1)?,
        system_id: Uuid::parse_str(&system_id).map_err(|e| {
            duckdb::Error::FromSqlConversionFailure(2, duckdb::types::Type::Text, Box::new(e))
        })?,
    })
}

#[async_trait]
impl ClientStore for DuckDbStore {
    async fn get(&self, client_id: i64) -> Result<Option<ClientRecord>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT client_id, username, system_id FROM clients WHERE client_id = ?")?;
        match stmt.query_row(params![client_id], row_to_record) {
            Ok(record) => Ok(Some(record)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_all(&self) -> Result<Vec<ClientRecord>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT client_id, username, system_id FROM clients")?;
        let rows = stmt.query_map([], row_to_record)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    async fn exists(&self, client_id: i64) -> Result<bool> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row(
            "SELECT count(*) FROM clients WHERE client_id = ?",
            params![client_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    async fn add(&self, record: &ClientRecord) -> Result<bool> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("INSERT INTO clients (client_id, username, system_id) VALUES (?, ?, ?)")?;
        match stmt.execute(params![
            record.client_id,
            record.username,
            record.system_id.to_string(),
        ]) {
            Ok(_) => Ok(true),
            Err(ref e) if is_duplicate_key(e) => {
                tracing::debug!(client_id = record.client_id, "duplicate key on insert");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, record: &ClientRecord) -> Result<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE clients SET username = ?, system_id = ? WHERE client_id = ?",
            params![
                record.username,
                record.system_id.to_string(),
                record.client_id,
            ],
        )?;
        Ok(changed > 0)
    }

    async fn delete(&self, client_id: i64) -> Result<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM clients WHERE client_id = ?", params![client_id])?;
        Ok(changed > 0)
    }
}
