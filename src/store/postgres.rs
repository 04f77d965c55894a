//! PostgreSQL implementation of the account store.
//!
//! Partitions are rows in a `partitions` table; accounts live in a single
//! `accounts` table keyed by `(partition_name, username)`. Schema creation
//! is idempotent and runs at startup via [`PostgresStore::init_schema`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::AccountStore;
use crate::domain::{Account, AccountId};
use crate::error::GatewayError;

/// PostgreSQL-backed account store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

/// Row shape of the `accounts` table.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: AccountId::from_uuid(row.id),
            username: row.username,
            password: row.password,
            created_at: row.created_at,
        }
    }
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `partitions` and `accounts` tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Store`] on database failure.
    pub async fn init_schema(&self) -> Result<(), GatewayError> {
        sqlx::query("CREATE TABLE IF NOT EXISTS partitions (name TEXT PRIMARY KEY)")
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::Store(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS accounts (\
                 partition_name TEXT NOT NULL REFERENCES partitions (name), \
                 username TEXT NOT NULL, \
                 id UUID NOT NULL, \
                 password TEXT NOT NULL, \
                 created_at TIMESTAMPTZ NOT NULL, \
                 PRIMARY KEY (partition_name, username)\
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::Store(e.to_string()))?;

        Ok(())
    }

    /// Provisions a partition, keeping it if it already exists.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Store`] on database failure.
    pub async fn register_partition(&self, name: &str) -> Result<(), GatewayError> {
        sqlx::query("INSERT INTO partitions (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::Store(e.to_string()))?;
        Ok(())
    }

    async fn partition_exists(&self, name: &str) -> Result<bool, GatewayError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM partitions WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::Store(e.to_string()))?;
        Ok(exists)
    }
}

#[async_trait]
impl AccountStore for PostgresStore {
    async fn get_partition(
        &self,
        name: &str,
    ) -> Result<Option<HashMap<String, Account>>, GatewayError> {
        if !self.partition_exists(name).await? {
            return Ok(None);
        }

        let rows = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, password, created_at FROM accounts WHERE partition_name = $1",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Store(e.to_string()))?;

        let mapping = rows
            .into_iter()
            .map(|row| (row.username.clone(), Account::from(row)))
            .collect();
        Ok(Some(mapping))
    }

    async fn upsert(
        &self,
        partition: &str,
        key: &str,
        account: Account,
    ) -> Result<Option<Account>, GatewayError> {
        if !self.partition_exists(partition).await? {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (partition_name, username, id, password, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (partition_name, username) DO UPDATE SET \
                 id = EXCLUDED.id, \
                 password = EXCLUDED.password, \
                 created_at = EXCLUDED.created_at \
             RETURNING id, username, password, created_at",
        )
        .bind(partition)
        .bind(key)
        .bind(account.id.as_uuid())
        .bind(&account.password)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::Store(e.to_string()))?;

        Ok(Some(Account::from(row)))
    }
}
