//! Signup request/response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RegistrationOutcome;

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    /// Requested username.
    pub username: String,
    /// Opaque password string.
    pub password: String,
}

/// Response body for `POST /auth/signup`.
///
/// Mirrors the registration outcome exactly: `accepted` plus the stable
/// message string, relayed to the client verbatim.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignUpResponse {
    /// Whether the account was recorded.
    pub accepted: bool,
    /// Human-readable explanation of the result.
    pub message: String,
}

impl From<RegistrationOutcome> for SignUpResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        Self {
            accepted: outcome.accepted,
            message: outcome.message,
        }
    }
}
