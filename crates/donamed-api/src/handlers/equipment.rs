//! Equipment handlers
//!
//! CRUD endpoints over the equipos-medicos collection. The single-item
//! fetch includes the joined donor name; the list does not.

use axum::{extract::State, Json};
use donamed_service::{
    EquipmentCreatedResponse, EquipmentDetailResponse, EquipmentPayload, EquipmentResponse,
    EquipmentService, MessageResponse,
};

use crate::extractors::{EntityId, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List equipment
///
/// GET /equipos-medicos
pub async fn list_equipment(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EquipmentResponse>>> {
    let service = EquipmentService::new(state.service_context());
    let equipment = service.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
///
/// GET /equipos-medicos/{id}
pub async fn get_equipment(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<EquipmentDetailResponse>> {
    let service = EquipmentService::new(state.service_context());
    let detail = service.get(id).await?;
    Ok(Json(detail))
}

/// Create equipment
///
/// POST /equipos-medicos
pub async fn create_equipment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EquipmentPayload>,
) -> ApiResult<Created<Json<EquipmentCreatedResponse>>> {
    let service = EquipmentService::new(state.service_context());
    let response = service.create(payload).await?;
    Ok(Created(Json(response)))
}

/// Update equipment
///
/// PUT /equipos-medicos/{id}
pub async fn update_equipment(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<EquipmentPayload>,
) -> ApiResult<Json<MessageResponse>> {
    let service = EquipmentService::new(state.service_context());
    let response = service.update(id, payload).await?;
    Ok(Json(response))
}

/// Delete equipment
///
/// DELETE /equipos-medicos/{id}
pub async fn delete_equipment(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let service = EquipmentService::new(state.service_context());
    let response = service.delete(id).await?;
    Ok(Json(response))
}
