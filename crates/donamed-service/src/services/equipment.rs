//! Equipment service
//!
//! CRUD use cases over the equipos_medicos table. The list and single-item
//! reads intentionally return different shapes: only the latter joins the
//! donor's display name.

use donamed_core::entities::NewEquipment;
use donamed_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    EquipmentCreatedResponse, EquipmentDetailResponse, EquipmentPayload, EquipmentResponse,
    MessageResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Equipment service
pub struct EquipmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EquipmentService<'a> {
    /// Create a new EquipmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all equipment (bare rows, no donor join)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<EquipmentResponse>> {
        let equipment = self.ctx.equipment_repo().list().await?;
        Ok(equipment.into_iter().map(EquipmentResponse::from).collect())
    }

    /// Get one equipment row by ID, including the donor's name
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<EquipmentDetailResponse> {
        let detail = self
            .ctx
            .equipment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EquipmentNotFound(id))?;

        Ok(EquipmentDetailResponse::from(detail))
    }

    /// Create an equipment row, returning the generated identifier
    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        payload: EquipmentPayload,
    ) -> ServiceResult<EquipmentCreatedResponse> {
        let draft = draft_from(payload);

        let id = self.ctx.equipment_repo().create(&draft).await?;
        info!(id_equipo = id, "Equipment created");

        Ok(EquipmentCreatedResponse::new(id))
    }

    /// Replace all mutable fields of an equipment row
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i64,
        payload: EquipmentPayload,
    ) -> ServiceResult<MessageResponse> {
        let draft = draft_from(payload);

        self.ctx.equipment_repo().update(id, &draft).await?;
        info!(id_equipo = id, "Equipment updated");

        Ok(MessageResponse::new("Equipment updated successfully"))
    }

    /// Delete an equipment row
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.equipment_repo().delete(id).await?;
        info!(id_equipo = id, "Equipment deleted");

        Ok(MessageResponse::new("Equipment deleted successfully"))
    }
}

fn draft_from(payload: EquipmentPayload) -> NewEquipment {
    NewEquipment {
        nombre_equipo: payload.nombre_equipo,
        marca: payload.marca,
        modelo: payload.modelo,
        estado: payload.estado,
        fecha_fabricacion: payload.fecha_fabricacion,
        fecha_donacion: payload.fecha_donacion,
        id_donante: payload.id_donante,
    }
}
