//! Account repository: the domain rule over the account store.
//!
//! The repository owns the cross-partition uniqueness policy; the store
//! beneath it is purely mechanical. Callers depend on the
//! [`AccountRepository`] capability, never on a concrete store, so the
//! storage technology can change without touching the workflow.

pub mod store_repository;

use async_trait::async_trait;

use crate::domain::{Credentials, RegistrationOutcome};
use crate::error::GatewayError;

pub use store_repository::StoreAccountRepository;

/// Capability contract for recording new, unverified accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync + std::fmt::Debug {
    /// Attempts to record a new account in the pending partition.
    ///
    /// Duplicate usernames are reported as a rejected
    /// [`RegistrationOutcome`], never as an error.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on storage failure or when a configured
    /// partition is missing.
    async fn create_unverified_account(
        &self,
        credentials: Credentials,
    ) -> Result<RegistrationOutcome, GatewayError>;
}
