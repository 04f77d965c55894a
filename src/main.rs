//! signup-gateway server entry point.
//!
//! Starts the Axum HTTP server with the registration REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use signup_gateway::api;
use signup_gateway::app_state::AppState;
use signup_gateway::config::GatewayConfig;
use signup_gateway::repository::StoreAccountRepository;
use signup_gateway::service::RegistrationService;
use signup_gateway::store::{AccountStore, MemoryStore, PostgresStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting signup-gateway");

    // Build the account store
    let store: Arc<dyn AccountStore> = if config.database_enabled {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        let store = PostgresStore::new(pool);
        store.init_schema().await?;
        store.register_partition(&config.valid_partition).await?;
        store.register_partition(&config.pending_partition).await?;
        tracing::info!("account store backed by PostgreSQL");
        Arc::new(store)
    } else {
        tracing::warn!("DATABASE_ENABLED=false; account state is lost on shutdown");
        Arc::new(MemoryStore::new([
            config.valid_partition.clone(),
            config.pending_partition.clone(),
        ]))
    };

    // Build repository and service layers
    let repository = Arc::new(StoreAccountRepository::new(
        store,
        config.valid_partition.clone(),
        config.pending_partition.clone(),
    ));
    let registration = Arc::new(RegistrationService::new(repository));

    // Build application state
    let app_state = AppState { registration };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
