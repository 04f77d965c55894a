//! Registration use case.

use std::sync::Arc;

use crate::domain::{Credentials, RegistrationOutcome};
use crate::error::GatewayError;
use crate::repository::AccountRepository;

/// Entry point for the "register new account" operation.
///
/// Performs no logic beyond delegation and logging — it exists so the
/// HTTP layer depends on an abstract capability instead of a concrete
/// store, and so a test double can stand in for the repository.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    repository: Arc<dyn AccountRepository>,
}

impl RegistrationService {
    /// Creates a new `RegistrationService`.
    #[must_use]
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new account, returning the repository's outcome
    /// unchanged in shape.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on storage failure or a missing
    /// partition.
    pub async fn register(
        &self,
        credentials: Credentials,
    ) -> Result<RegistrationOutcome, GatewayError> {
        let username = credentials.username.clone();
        let outcome = self.repository.create_unverified_account(credentials).await?;

        if outcome.accepted {
            tracing::info!(%username, "account registered, awaiting validation");
        } else {
            tracing::info!(%username, message = %outcome.message, "registration rejected");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    /// Repository double returning a canned outcome.
    #[derive(Debug)]
    struct StubRepository {
        outcome: RegistrationOutcome,
    }

    #[async_trait]
    impl AccountRepository for StubRepository {
        async fn create_unverified_account(
            &self,
            _credentials: Credentials,
        ) -> Result<RegistrationOutcome, GatewayError> {
            Ok(self.outcome.clone())
        }
    }

    #[tokio::test]
    async fn passes_the_repository_outcome_through_unchanged() {
        for outcome in [
            RegistrationOutcome::created(),
            RegistrationOutcome::already_exists(),
            RegistrationOutcome::awaiting_validation(),
        ] {
            let service = RegistrationService::new(Arc::new(StubRepository {
                outcome: outcome.clone(),
            }));
            let result = service.register(Credentials::new("alice", "pw")).await;
            let Ok(result) = result else {
                panic!("delegation should not fail");
            };
            assert_eq!(result, outcome);
        }
    }
}
