//! Registry service: the single entry point callers use to work with
//! client records.
//!
//! Single-record operations delegate straight to the injected
//! [`ClientStore`]; the service adds no logic there beyond interface
//! separation. The batch insert is where the real work happens: each
//! candidate record is reconciled against the unique identifier index and
//! classified as added or rejected, and the outcome reports the rejected
//! records together with both counts.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{BatchOutcome, ClientRecord};
use crate::storage::ClientStore;

/// Orchestrates client-record operations over a shared storage backend.
///
/// The store handle is an explicitly owned, injected dependency: one
/// process-wide store is constructed at startup and shared by every
/// concurrent caller of this service.
#[derive(Clone)]
pub struct RegistryService {
    store: Arc<dyn ClientStore>,
}

impl RegistryService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Returns the client with the given identifier, if present.
    pub async fn get_client(&self, client_id: i64) -> Result<Option<ClientRecord>> {
        self.store.get(client_id).await
    }

    /// Returns every stored client.
    pub async fn get_all_clients(&self) -> Result<Vec<ClientRecord>> {
        self.store.get_all().await
    }

    /// Creates a client. `Ok(false)` if the identifier is already taken.
    pub async fn create_client(&self, record: &ClientRecord) -> Result<bool> {
        tracing::debug!(client_id = record.client_id, "create client");
        self.store.add(record).await
    }

    /// Replaces all fields of an existing client. `Ok(false)` if no client
    /// with that identifier exists.
    pub async fn update_client(&self, record: &ClientRecord) -> Result<bool> {
        tracing::debug!(client_id = record.client_id, "update client");
        self.store.update(record).await
    }

    /// Deletes a client. `Ok(false)` if no client with that identifier
    /// exists.
    pub async fn delete_client(&self, client_id: i64) -> Result<bool> {
        tracing::debug!(client_id, "delete client");
        self.store.delete(client_id).await
    }

    /// Adds a batch of clients, reconciling each against the unique
    /// identifier index.
    ///
    /// Records are processed sequentially in input order. A record whose
    /// identifier already exists is rejected; so is a record whose insert
    /// loses a race to a concurrent writer, since the index's duplicate-key
    /// rejection is an equally valid signal. Two records sharing an
    /// identifier within one batch therefore resolve to first-in-wins.
    ///
    /// Callers are expected to have enforced any minimum batch size before
    /// invoking this; an empty input yields an empty outcome.
    pub async fn add_clients_batch(&self, records: &[ClientRecord]) -> Result<BatchOutcome> {
        let rejected = self.store.add_many(records).await?;
        let outcome = BatchOutcome::new(records.len(), rejected);
        tracing::info!(
            added = outcome.added_count,
            rejected = outcome.rejected_count,
            "client batch reconciled"
        );
        Ok(outcome)
    }
}
