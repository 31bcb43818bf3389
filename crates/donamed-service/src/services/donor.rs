//! Donor service
//!
//! CRUD use cases over the donantes table.

use donamed_core::entities::NewDonor;
use donamed_core::error::DomainError;
use tracing::{info, instrument};

use crate::dto::{DonorCreatedResponse, DonorPayload, DonorResponse, MessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Donor service
pub struct DonorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DonorService<'a> {
    /// Create a new DonorService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all donors
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<DonorResponse>> {
        let donors = self.ctx.donor_repo().list().await?;
        Ok(donors.into_iter().map(DonorResponse::from).collect())
    }

    /// Get a donor by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<DonorResponse> {
        let donor = self
            .ctx
            .donor_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DonorNotFound(id))?;

        Ok(DonorResponse::from(donor))
    }

    /// Create a donor, returning the generated identifier
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: DonorPayload) -> ServiceResult<DonorCreatedResponse> {
        let draft = NewDonor {
            nombre: payload.nombre,
            contacto: payload.contacto,
            direccion: payload.direccion,
            fecha_registro: payload.fecha_registro,
        };

        let id = self.ctx.donor_repo().create(&draft).await?;
        info!(id_donante = id, "Donor created");

        Ok(DonorCreatedResponse::new(id))
    }

    /// Replace all mutable fields of a donor
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, payload: DonorPayload) -> ServiceResult<MessageResponse> {
        let draft = NewDonor {
            nombre: payload.nombre,
            contacto: payload.contacto,
            direccion: payload.direccion,
            fecha_registro: payload.fecha_registro,
        };

        self.ctx.donor_repo().update(id, &draft).await?;
        info!(id_donante = id, "Donor updated");

        Ok(MessageResponse::new("Donor updated successfully"))
    }

    /// Delete a donor
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<MessageResponse> {
        self.ctx.donor_repo().delete(id).await?;
        info!(id_donante = id, "Donor deleted");

        Ok(MessageResponse::new("Donor deleted successfully"))
    }
}
