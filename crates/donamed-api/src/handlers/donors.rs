//! Donor handlers
//!
//! CRUD endpoints over the donantes collection.

use axum::{extract::State, Json};
use donamed_service::{
    DonorCreatedResponse, DonorPayload, DonorResponse, DonorService, MessageResponse,
};

use crate::extractors::{EntityId, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List donors
///
/// GET /donantes
pub async fn list_donors(State(state): State<AppState>) -> ApiResult<Json<Vec<DonorResponse>>> {
    let service = DonorService::new(state.service_context());
    let donors = service.list().await?;
    Ok(Json(donors))
}

/// Get donor by ID
///
/// GET /donantes/{id}
pub async fn get_donor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<DonorResponse>> {
    let service = DonorService::new(state.service_context());
    let donor = service.get(id).await?;
    Ok(Json(donor))
}

/// Create donor
///
/// POST /donantes
pub async fn create_donor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DonorPayload>,
) -> ApiResult<Created<Json<DonorCreatedResponse>>> {
    let service = DonorService::new(state.service_context());
    let response = service.create(payload).await?;
    Ok(Created(Json(response)))
}

/// Update donor
///
/// PUT /donantes/{id}
pub async fn update_donor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<DonorPayload>,
) -> ApiResult<Json<MessageResponse>> {
    let service = DonorService::new(state.service_context());
    let response = service.update(id, payload).await?;
    Ok(Json(response))
}

/// Delete donor
///
/// DELETE /donantes/{id}
pub async fn delete_donor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let service = DonorService::new(state.service_context());
    let response = service.delete(id).await?;
    Ok(Json(response))
}
