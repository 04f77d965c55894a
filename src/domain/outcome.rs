//! Registration outcome: the accept/reject result of a signup attempt.
//!
//! Duplicate usernames are reported through this type, never as errors —
//! a rejection is a normal, expected result of the workflow.

use serde::Serialize;

/// Message returned when the username belongs to a verified account.
pub const MSG_ALREADY_EXISTS: &str = "account already exists";

/// Message returned when the username is held by an unverified registration.
pub const MSG_AWAITING_VALIDATION: &str = "account awaiting validation";

/// Message returned when the registration is accepted.
pub const MSG_CREATED: &str = "Account created. Please proceed to account validation.";

/// Result of a registration attempt.
///
/// Exactly one of three outcomes is possible: created, already-exists, or
/// awaiting-validation. The message strings are stable and relayed to the
/// client verbatim by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    /// Whether the account was inserted into the pending partition.
    pub accepted: bool,
    /// Human-readable explanation of the result.
    pub message: String,
}

impl RegistrationOutcome {
    /// Accepted: the account was recorded and awaits validation.
    #[must_use]
    pub fn created() -> Self {
        Self {
            accepted: true,
            message: MSG_CREATED.to_string(),
        }
    }

    /// Rejected: the username already belongs to a verified account.
    #[must_use]
    pub fn already_exists() -> Self {
        Self {
            accepted: false,
            message: MSG_ALREADY_EXISTS.to_string(),
        }
    }

    /// Rejected: the username is held by a registration still awaiting
    /// validation.
    #[must_use]
    pub fn awaiting_validation() -> Self {
        Self {
            accepted: false,
            message: MSG_AWAITING_VALIDATION.to_string(),
        }
    }
}
