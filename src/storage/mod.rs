//! Durable, uniquely-indexed persistence for client records.
//!
//! The [`ClientStore`] trait is the sole authority on "does this identifier
//! already exist". Its one non-obvious contract: `add` returns `Ok(false)`
//! when the unique index rejects a duplicate `client_id`, so callers can
//! treat duplicate detection as an ordinary outcome instead of routing it
//! through error handling. Every other engine fault is an `Err(_)`.

pub mod duckdb;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ClientRecord;

pub use self::duckdb::DuckDbStore;

/// Storage backend for client records, keyed by a unique `client_id`.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Returns the record with the given identifier, if present.
    async fn get(&self, client_id: i64) -> Result<Option<ClientRecord>>;

    /// Returns every stored record. Order is unspecified.
    async fn get_all(&self) -> Result<Vec<ClientRecord>>;

    /// True iff a record with the given identifier is stored.
    async fn exists(&self, client_id: i64) -> Result<bool>;

    /// Attempts insertion. `Ok(false)` exactly when the unique index
    /// rejects a duplicate identifier; any other failure propagates.
    async fn add(&self, record: &ClientRecord) -> Result<bool>;

    /// Replaces all fields of the stored record with the given identifier.
    /// `Ok(false)` if no such identifier exists.
    async fn update(&self, record: &ClientRecord) -> Result<bool>;

    /// Removes the record with the given identifier. `Ok(false)` if none
    /// existed.
    async fn delete(&self, client_id: i64) -> Result<bool>;

    /// Attempts insertion of each record in input order and returns the
    /// input records that were NOT added, original data preserved.
    ///
    /// Each record goes through a check-then-insert sequence: an identifier
    /// that already exists is rejected without an insert attempt, and an
    /// insert that loses a race to a concurrent writer (duplicate-key
    /// rejection from the index) counts as rejected too. A duplicate
    /// identifier later in the same batch is rejected because the earlier
    /// occurrence has already been inserted by the time it is processed.
    async fn add_many(&self, records: &[ClientRecord]) -> Result<Vec<ClientRecord>> {
        let mut rejected = Vec::new();
        for record in records {
            if self.exists(record.client_id).await? {
                rejected.push(record.clone());
            } else if !self.add(record).await? {
                rejected.push(record.clone());
            }
        }
        Ok(rejected)
    }
}
