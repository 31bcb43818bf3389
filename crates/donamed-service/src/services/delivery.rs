//! Delivery service
//!
//! CRUD use cases over the entregas table. The foreign key to equipment is
//! enforced by the storage engine; a dangling reference surfaces as a
//! storage error, not a handler-level check.

use donamed_core::entities::NewDelivery;
use donamed_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{DeliveryCreatedResponse, DeliveryPayload, DeliveryResponse, MessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Delivery service
pub struct DeliveryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeliveryService<'a> {
    /// Create a new DeliveryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all deliveries with their equipment names
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<DeliveryResponse>> {
        let deliveries = self.ctx.delivery_repo().list().await?;
        Ok(deliveries.into_iter().map(DeliveryResponse::from).collect())
    }

    /// Get a delivery by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<DeliveryResponse> {
        let delivery = self
            .ctx
            .delivery_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DeliveryNotFound(id))?;

        Ok(DeliveryResponse::from(delivery))
    }

    /// Create a delivery, returning the generated identifier
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: DeliveryPayload) -> ServiceResult<DeliveryCreatedResponse> {
        let draft = NewDelivery {
            fecha_entrega: payload.fecha_entrega,
            estado_equipo: payload.estado_equipo,
            id_equipo: payload.id_equipo,
        };

        let id = self.ctx.delivery_repo().create(&draft).await?;
        info!(id_entrega = id, "Delivery created");

        Ok(DeliveryCreatedResponse::new(id))
    }

    /// Replace all mutable fields of a delivery
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i64,
        payload: DeliveryPayload,
    ) -> ServiceResult<MessageResponse> {
        let draft = NewDelivery {
            fecha_entrega: payload.fecha_entrega,
            estado_equipo: payload.estado_equipo,
            id_equipo: payload.id_equipo,
        };

        self.ctx.delivery_repo().update(id, &draft).await?;
        info!(id_entrega = id, "Delivery updated");

        Ok(MessageResponse::new("Delivery updated successfully"))
    }

    /// Delete a delivery
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.delivery_repo().delete(id).await?;
        info!(id_entrega = id, "Delivery deleted");

        Ok(MessageResponse::new("Delivery deleted successfully"))
    }
}
