//! Common test utilities for the client registry.

use client_registry::{ClientRecord, DuckDbStore};
use tempfile::TempDir;
use uuid::Uuid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Creates a file-backed store in a fresh temp directory. The directory
/// handle must stay alive for the lifetime of the store.
pub async fn create_test_store() -> (DuckDbStore, TempDir) {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("clients.db");
    let store = DuckDbStore::new(db_path.to_str().unwrap()).await.unwrap();
    (store, temp_dir)
}

pub fn record(client_id: i64, username: &str) -> ClientRecord {
    ClientRecord::new(client_id, username, Uuid::new_v4())
}

/// Records with ids 1..=n, usernames "user1".."usern".
pub fn records(n: i64) -> Vec<ClientRecord> {
    (1..=n)
        .map(|id| record(id, &format!("user{}", id)))
        .collect()
}
