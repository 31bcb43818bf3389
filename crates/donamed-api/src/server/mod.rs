//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use donamed_common::{AppConfig, AppError};
use donamed_db::{
    create_pool, PgDeliveryRepository, PgDonorRepository, PgEquipmentRepository,
    PgReportRepository,
};
use donamed_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );

    // Health endpoints sit outside the rate limiter
    health_routes().merge(router).with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Fails fast when the storage engine is unreachable: the process must not
/// begin serving traffic without a working pool.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = donamed_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: std::time::Duration::from_secs(config.database.acquire_timeout_secs),
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repositories
    let donor_repo = Arc::new(PgDonorRepository::new(pool.clone()));
    let equipment_repo = Arc::new(PgEquipmentRepository::new(pool.clone()));
    let delivery_repo = Arc::new(PgDeliveryRepository::new(pool.clone()));
    let report_repo = Arc::new(PgReportRepository::new(pool.clone()));

    let service_context = ServiceContext::new(
        pool,
        donor_repo,
        equipment_repo,
        delivery_repo,
        report_repo,
    );

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
