//! PostgreSQL implementation of DonorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use donamed_core::entities::{Donor, NewDonor};
use donamed_core::traits::{DonorRepository, RepoResult};

use crate::models::DonorModel;

use super::error::{donor_not_found, map_db_error};

/// PostgreSQL implementation of DonorRepository
#[derive(Clone)]
pub struct PgDonorRepository {
    pool: PgPool,
}

impl PgDonorRepository {
    /// Create a new PgDonorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorRepository for PgDonorRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Donor>> {
        let rows = sqlx::query_as::<_, DonorModel>(
            r"
            SELECT id_donante, nombre, contacto, direccion, fecha_registro
            FROM donantes
            ORDER BY id_donante
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Donor::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Donor>> {
        let result = sqlx::query_as::<_, DonorModel>(
            r"
            SELECT id_donante, nombre, contacto, direccion, fecha_registro
            FROM donantes
            WHERE id_donante = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Donor::from))
    }

    #[instrument(skip(self, donor))]
    async fn create(&self, donor: &NewDonor) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The registration timestamp column always appears in the statement;
        // an absent value falls back to the engine clock.
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO donantes (nombre, contacto, direccion, fecha_registro)
            VALUES ($1, $2, $3, COALESCE($4, NOW()))
            RETURNING id_donante
            ",
        )
        .bind(&donor.nombre)
        .bind(&donor.contacto)
        .bind(&donor.direccion)
        .bind(donor.fecha_registro)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, donor))]
    async fn update(&self, id: i64, donor: &NewDonor) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE donantes
            SET nombre = $2, contacto = $3, direccion = $4, fecha_registro = $5
            WHERE id_donante = $1
            ",
        )
        .bind(id)
        .bind(&donor.nombre)
        .bind(&donor.contacto)
        .bind(&donor.direccion)
        .bind(donor.fecha_registro)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls the no-op back uncommitted
            return Err(donor_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM donantes
            WHERE id_donante = $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(donor_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
