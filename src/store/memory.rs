//! In-memory account store.
//!
//! [`MemoryStore`] keeps its partitions in a `HashMap` behind a single
//! [`tokio::sync::RwLock`]: concurrent reads proceed together, writes are
//! serialized. The partition set is fixed at construction — lookups
//! against an unprovisioned partition return `None`, they never create it.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccountStore;
use crate::domain::Account;
use crate::error::GatewayError;

/// In-memory named-partition store.
///
/// The default backend for tests and `DATABASE_ENABLED=false`
/// deployments. All state is lost on shutdown.
#[derive(Debug)]
pub struct MemoryStore {
    partitions: RwLock<HashMap<String, HashMap<String, Account>>>,
}

impl MemoryStore {
    /// Creates a store provisioned with the given partition names, each
    /// starting empty.
    #[must_use]
    pub fn new<I, S>(partition_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let partitions = partition_names
            .into_iter()
            .map(|name| (name.into(), HashMap::new()))
            .collect();
        Self {
            partitions: RwLock::new(partitions),
        }
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn get_partition(
        &self,
        name: &str,
    ) -> Result<Option<HashMap<String, Account>>, GatewayError> {
        let partitions = self.partitions.read().await;
        Ok(partitions.get(name).cloned())
    }

    async fn upsert(
        &self,
        partition: &str,
        key: &str,
        account: Account,
    ) -> Result<Option<Account>, GatewayError> {
        let mut partitions = self.partitions.write().await;
        let Some(entries) = partitions.get_mut(partition) else {
            return Ok(None);
        };
        entries.insert(key.to_string(), account);
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Credentials;

    fn make_account(username: &str) -> Account {
        Account::from_credentials(Credentials::new(username, "pw"))
    }

    #[tokio::test]
    async fn provisioned_partition_starts_empty() {
        let store = MemoryStore::new(["users"]);
        let partition = store.get_partition("users").await;
        let Ok(Some(partition)) = partition else {
            panic!("partition should exist");
        };
        assert!(partition.is_empty());
    }

    #[tokio::test]
    async fn unprovisioned_partition_is_absent() {
        let store = MemoryStore::new(["users"]);
        let result = store.get_partition("pending_users").await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn upsert_returns_stored_account() {
        let store = MemoryStore::new(["pending_users"]);
        let account = make_account("alice");

        let stored = store.upsert("pending_users", "alice", account.clone()).await;
        let Ok(Some(stored)) = stored else {
            panic!("upsert should store into a provisioned partition");
        };
        assert_eq!(stored, account);

        let partition = store.get_partition("pending_users").await;
        let Ok(Some(partition)) = partition else {
            panic!("partition should exist");
        };
        assert_eq!(partition.get("alice"), Some(&account));
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_key() {
        let store = MemoryStore::new(["pending_users"]);
        let first = make_account("alice");
        let second = make_account("alice");

        let _ = store.upsert("pending_users", "alice", first).await;
        let _ = store.upsert("pending_users", "alice", second.clone()).await;

        let partition = store.get_partition("pending_users").await;
        let Ok(Some(partition)) = partition else {
            panic!("partition should exist");
        };
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.get("alice"), Some(&second));
    }

    #[tokio::test]
    async fn upsert_into_unprovisioned_partition_is_absent() {
        let store = MemoryStore::new(["users"]);
        let result = store.upsert("pending_users", "alice", make_account("alice")).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn get_partition_returns_a_snapshot() {
        let store = MemoryStore::new(["users"]);
        let partition = store.get_partition("users").await;
        let Ok(Some(mut partition)) = partition else {
            panic!("partition should exist");
        };
        partition.insert("alice".to_string(), make_account("alice"));

        // Mutating the snapshot must not write through to the store.
        let fresh = store.get_partition("users").await;
        let Ok(Some(fresh)) = fresh else {
            panic!("partition should exist");
        };
        assert!(fresh.is_empty());
    }
}
