//! Account records and the credentials that create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AccountId;

/// Raw signup credentials as received from the transport layer.
///
/// The password is opaque to this service: no hashing or strength
/// validation happens here. A credential-hardening layer must sit in
/// front of any production deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Requested username; unique across valid and pending accounts.
    pub username: String,
    /// Opaque password string.
    pub password: String,
}

impl Credentials {
    /// Creates a new credentials pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A stored account record.
///
/// Lives in exactly one store partition at a time: `pending` from
/// registration until verification, `valid` afterwards. The registration
/// core only ever inserts into `pending`; it never moves or deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier assigned when the record is created.
    pub id: AccountId,
    /// Username; the partition key.
    pub username: String,
    /// Opaque password string.
    pub password: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Materializes a new account record from signup credentials,
    /// assigning a fresh [`AccountId`] and creation timestamp.
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            id: AccountId::new(),
            username: credentials.username,
            password: credentials.password,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_credentials_keeps_username_and_password() {
        let account = Account::from_credentials(Credentials::new("alice", "pw1"));
        assert_eq!(account.username, "alice");
        assert_eq!(account.password, "pw1");
    }

    #[test]
    fn from_credentials_assigns_distinct_ids() {
        let a = Account::from_credentials(Credentials::new("alice", "pw1"));
        let b = Account::from_credentials(Credentials::new("alice", "pw1"));
        assert_ne!(a.id, b.id);
    }
}
