//! Account store: named-partition key→account storage.
//!
//! The store is purely mechanical — it holds accounts in named partitions
//! keyed by username and knows nothing about uniqueness rules or the
//! registration workflow. Two implementations exist: [`MemoryStore`] for
//! tests and database-less deployments, and [`PostgresStore`] backed by
//! `sqlx`.

pub mod memory;
pub mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Account;
use crate::error::GatewayError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Capability contract for named-partition account storage.
///
/// Partitions are provisioned up front (at construction or schema init);
/// both operations report an unprovisioned partition as `Ok(None)` and
/// leave the policy decision to the caller. Infrastructure failures are
/// `Err` — never coerced into an absent partition.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug {
    /// Returns a snapshot of the partition's current username→account
    /// mapping, or `None` if the partition is not provisioned.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Store`] on a storage backend failure.
    async fn get_partition(
        &self,
        name: &str,
    ) -> Result<Option<HashMap<String, Account>>, GatewayError>;

    /// Inserts or overwrites `key` in the named partition, returning the
    /// stored account, or `None` if the partition is not provisioned.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Store`] on a storage backend failure.
    async fn upsert(
        &self,
        partition: &str,
        key: &str,
        account: Account,
    ) -> Result<Option<Account>, GatewayError>;
}
