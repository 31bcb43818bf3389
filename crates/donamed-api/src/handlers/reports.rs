//! Report handlers
//!
//! Read-only aggregate endpoints. No identifier, no body.

use axum::{extract::State, Json};
use donamed_service::{ReportService, StatusCountResponse};
use serde_json::{Map, Value};

use crate::response::ApiResult;
use crate::state::AppState;

/// Equipment counts grouped by status
///
/// GET /reportes/equipos-por-estado
pub async fn equipment_by_status(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StatusCountResponse>>> {
    let service = ReportService::new(state.service_context());
    let counts = service.equipment_by_status().await?;
    Ok(Json(counts))
}

/// Deliveries from the trailing 30 days
///
/// GET /reportes/entregas-recientes
pub async fn recent_deliveries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Map<String, Value>>>> {
    let service = ReportService::new(state.service_context());
    let rows = service.recent_deliveries().await?;
    Ok(Json(rows))
}
