//! Service layer: the registration use case.
//!
//! [`RegistrationService`] is the stable entry point the transport layer
//! depends on; it delegates to an [`crate::repository::AccountRepository`]
//! capability and knows nothing about storage technology.

pub mod registration;

pub use registration::RegistrationService;
