//! Route definitions
//!
//! Collection + single-item routes per entity, plus the report and health
//! endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{deliveries, donors, equipment, health, reports};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(donor_routes())
        .merge(equipment_routes())
        .merge(delivery_routes())
        .merge(report_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Donor routes
fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/donantes", get(donors::list_donors))
        .route("/donantes", post(donors::create_donor))
        .route("/donantes/:id", get(donors::get_donor))
        .route("/donantes/:id", put(donors::update_donor))
        .route("/donantes/:id", delete(donors::delete_donor))
}

/// Equipment routes
fn equipment_routes() -> Router<AppState> {
    Router::new()
        .route("/equipos-medicos", get(equipment::list_equipment))
        .route("/equipos-medicos", post(equipment::create_equipment))
        .route("/equipos-medicos/:id", get(equipment::get_equipment))
        .route("/equipos-medicos/:id", put(equipment::update_equipment))
        .route("/equipos-medicos/:id", delete(equipment::delete_equipment))
}

/// Delivery routes
fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/entregas", get(deliveries::list_deliveries))
        .route("/entregas", post(deliveries::create_delivery))
        .route("/entregas/:id", get(deliveries::get_delivery))
        .route("/entregas/:id", put(deliveries::update_delivery))
        .route("/entregas/:id", delete(deliveries::delete_delivery))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reportes/equipos-por-estado",
            get(reports::equipment_by_status),
        )
        .route(
            "/reportes/entregas-recientes",
            get(reports::recent_deliveries),
        )
}
