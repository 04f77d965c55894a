//! # signup-gateway
//!
//! REST API gateway for account registration with a pending-verification
//! workflow.
//!
//! A signup records a new account in a "pending verification" state after
//! checking the username against both verified and in-flight accounts.
//! Verification itself (promoting a pending account to valid) belongs to a
//! separate subsystem — this service only ever inserts into the pending
//! partition.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RegistrationService (service/)
//!     │
//!     ├── AccountRepository (repository/)
//!     │
//!     └── AccountStore (store/)
//!         ├── MemoryStore
//!         └── PostgreSQL (sqlx)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod store;
