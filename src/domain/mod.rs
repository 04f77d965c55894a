//! Domain layer: account identity, records, and registration outcomes.
//!
//! This module contains the registration domain model: account identity,
//! the credentials/record pair that flows through a signup, and the typed
//! outcome returned to callers.

pub mod account;
pub mod account_id;
pub mod outcome;

pub use account::{Account, Credentials};
pub use account_id::AccountId;
pub use outcome::RegistrationOutcome;
