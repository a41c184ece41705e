//! Core data types for the client registry.
//!
//! A [`ClientRecord`] is the sole persisted entity: a positive 64-bit
//! business identifier, a short username, and a caller-supplied system
//! UUID that the store treats as opaque.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Maximum username length accepted by [`ClientRecord::validate`].
pub const USERNAME_MAX_LEN: usize = 50;

/// A single client entry, uniquely identified by `client_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Business identifier; positive and unique across the store.
    pub client_id: i64,
    /// Display name, 1..=50 characters.
    pub username: String,
    /// Caller-supplied system identifier; opaque, not checked for uniqueness.
    pub system_id: Uuid,
}

impl ClientRecord {
    pub fn new(client_id: i64, username: impl Into<String>, system_id: Uuid) -> Self {
        Self {
            client_id,
            username: username.into(),
            system_id,
        }
    }

    /// Checks the field constraints callers are expected to enforce before
    /// handing a record to the store. The store itself trusts its input.
    pub fn validate(&self) -> Result<()> {
        if self.client_id < 1 {
            return Err(Error::Validation(format!(
                "client_id must be greater than 0, got {}",
                self.client_id
            )));
        }
        if self.username.is_empty() {
            return Err(Error::Validation("username must not be empty".into()));
        }
        if self.username.chars().count() > USERNAME_MAX_LEN {
            return Err(Error::Validation(format!(
                "username must be at most {} characters",
                USERNAME_MAX_LEN
            )));
        }
        Ok(())
    }
}

/// Outcome of a batch insert, reconciled per record.
///
/// Rejected records keep their original field values and input order;
/// `added_count + rejected_count` always equals the batch input length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    /// Input records that were not persisted (identifier already taken).
    pub rejected: Vec<ClientRecord>,
    /// Number of records persisted by this batch call.
    pub added_count: usize,
    /// Number of records rejected by this batch call.
    pub rejected_count: usize,
}

impl BatchOutcome {
    /// Builds an outcome from the batch input length and the rejected set.
    pub fn new(total_input: usize, rejected: Vec<ClientRecord>) -> Self {
        let rejected_count = rejected.len();
        Self {
            rejected,
            added_count: total_input - rejected_count,
            rejected_count,
        }
    }
}
