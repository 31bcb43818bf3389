//! Delivery handlers
//!
//! CRUD endpoints over the entregas collection.

use axum::{extract::State, Json};
use donamed_service::{
    DeliveryCreatedResponse, DeliveryPayload, DeliveryResponse, DeliveryService, MessageResponse,
};

use crate::extractors::{EntityId, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List deliveries
///
/// GET /entregas
pub async fn list_deliveries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DeliveryResponse>>> {
    let service = DeliveryService::new(state.service_context());
    let deliveries = service.list().await?;
    Ok(Json(deliveries))
}

/// Get delivery by ID
///
/// GET /entregas/{id}
pub async fn get_delivery(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<DeliveryResponse>> {
    let service = DeliveryService::new(state.service_context());
    let delivery = service.get(id).await?;
    Ok(Json(delivery))
}

/// Create delivery
///
/// POST /entregas
pub async fn create_delivery(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DeliveryPayload>,
) -> ApiResult<Created<Json<DeliveryCreatedResponse>>> {
    let service = DeliveryService::new(state.service_context());
    let response = service.create(payload).await?;
    Ok(Created(Json(response)))
}

/// Update delivery
///
/// PUT /entregas/{id}
pub async fn update_delivery(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(payload): ValidatedJson<DeliveryPayload>,
) -> ApiResult<Json<MessageResponse>> {
    let service = DeliveryService::new(state.service_context());
    let response = service.update(id, payload).await?;
    Ok(Json(response))
}

/// Delete delivery
///
/// DELETE /entregas/{id}
pub async fn delete_delivery(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<MessageResponse>> {
    let service = DeliveryService::new(state.service_context());
    let response = service.delete(id).await?;
    Ok(Json(response))
}
