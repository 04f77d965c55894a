//! Store-backed account repository.
//!
//! [`StoreAccountRepository`] enforces the one invariant of registration:
//! a username appears in at most one of the valid and pending partitions.
//! The check-then-insert sequence runs under a per-username lock so that
//! concurrent attempts for the same username resolve to exactly one
//! acceptance.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::AccountRepository;
use crate::domain::{Account, Credentials, RegistrationOutcome};
use crate::error::GatewayError;
use crate::store::AccountStore;

/// Per-key async mutual exclusion.
///
/// Each key gets its own `Mutex` so attempts for different usernames run
/// concurrently while attempts for the same username are serialized.
/// Entries are retained for the repository's lifetime; the map is bounded
/// by the number of distinct usernames ever attempted.
#[derive(Debug, Default)]
struct KeyedLock {
    entries: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyedLock {
    async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let entry = {
            let mut entries = self.entries.lock().await;
            Arc::clone(
                entries
                    .entry(key.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        entry.lock_owned().await
    }
}

/// Repository over an [`AccountStore`] with the registration uniqueness rule.
///
/// The valid-partition check strictly precedes the pending-partition check:
/// "already a full member" is the more authoritative rejection and wins
/// whenever both could apply.
#[derive(Debug)]
pub struct StoreAccountRepository {
    store: Arc<dyn AccountStore>,
    valid_partition: String,
    pending_partition: String,
    locks: KeyedLock,
}

impl StoreAccountRepository {
    /// Creates a repository over the given store and partition names.
    #[must_use]
    pub fn new(
        store: Arc<dyn AccountStore>,
        valid_partition: impl Into<String>,
        pending_partition: impl Into<String>,
    ) -> Self {
        Self {
            store,
            valid_partition: valid_partition.into(),
            pending_partition: pending_partition.into(),
            locks: KeyedLock::default(),
        }
    }

    /// Reads a partition, escalating an unprovisioned partition to an
    /// infrastructure fault rather than degrading to an empty mapping.
    async fn read_partition(&self, name: &str) -> Result<HashMap<String, Account>, GatewayError> {
        self.store
            .get_partition(name)
            .await?
            .ok_or_else(|| GatewayError::PartitionMissing(name.to_string()))
    }
}

#[async_trait]
impl AccountRepository for StoreAccountRepository {
    async fn create_unverified_account(
        &self,
        credentials: Credentials,
    ) -> Result<RegistrationOutcome, GatewayError> {
        // Serializes the whole check-then-insert sequence for this
        // username; see KeyedLock.
        let _guard = self.locks.acquire(&credentials.username).await;

        let valid = self.read_partition(&self.valid_partition).await?;
        if valid.contains_key(&credentials.username) {
            return Ok(RegistrationOutcome::already_exists());
        }

        let pending = self.read_partition(&self.pending_partition).await?;
        if pending.contains_key(&credentials.username) {
            return Ok(RegistrationOutcome::awaiting_validation());
        }

        let username = credentials.username.clone();
        let account = Account::from_credentials(credentials);
        self.store
            .upsert(&self.pending_partition, &username, account)
            .await?
            .ok_or_else(|| GatewayError::PartitionMissing(self.pending_partition.clone()))?;

        Ok(RegistrationOutcome::created())
    }
}
