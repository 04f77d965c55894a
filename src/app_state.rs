//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::RegistrationService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registration use case for signup requests.
    pub registration: Arc<RegistrationService>,
}
