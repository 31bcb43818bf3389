//! PostgreSQL implementation of DeliveryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use donamed_core::entities::{DeliveryWithEquipment, NewDelivery};
use donamed_core::traits::{DeliveryRepository, RepoResult};

use crate::models::DeliveryWithEquipmentModel;

use super::error::{delivery_not_found, map_db_error};

/// PostgreSQL implementation of DeliveryRepository
#[derive(Clone)]
pub struct PgDeliveryRepository {
    pool: PgPool,
}

impl PgDeliveryRepository {
    /// Create a new PgDeliveryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryRepository for PgDeliveryRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<DeliveryWithEquipment>> {
        let rows = sqlx::query_as::<_, DeliveryWithEquipmentModel>(
            r"
            SELECT en.id_entrega, en.fecha_entrega, en.estado_equipo,
                   en.id_equipo, eq.nombre_equipo
            FROM entregas en
            JOIN equipos_medicos eq ON en.id_equipo = eq.id_equipo
            ORDER BY en.id_entrega
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DeliveryWithEquipment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<DeliveryWithEquipment>> {
        let result = sqlx::query_as::<_, DeliveryWithEquipmentModel>(
            r"
            SELECT en.id_entrega, en.fecha_entrega, en.estado_equipo,
                   en.id_equipo, eq.nombre_equipo
            FROM entregas en
            JOIN equipos_medicos eq ON en.id_equipo = eq.id_equipo
            WHERE en.id_entrega = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DeliveryWithEquipment::from))
    }

    #[instrument(skip(self, delivery))]
    async fn create(&self, delivery: &NewDelivery) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // A dangling id_equipo is rejected by the foreign key; the error
        // surfaces as DatabaseError and the transaction rolls back.
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO entregas (fecha_entrega, estado_equipo, id_equipo)
            VALUES (COALESCE($1, NOW()), $2, $3)
            RETURNING id_entrega
            ",
        )
        .bind(delivery.fecha_entrega)
        .bind(&delivery.estado_equipo)
        .bind(delivery.id_equipo)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, delivery))]
    async fn update(&self, id: i64, delivery: &NewDelivery) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE entregas
            SET fecha_entrega = $2, estado_equipo = $3, id_equipo = $4
            WHERE id_entrega = $1
            ",
        )
        .bind(id)
        .bind(delivery.fecha_entrega)
        .bind(&delivery.estado_equipo)
        .bind(delivery.id_equipo)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(delivery_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM entregas
            WHERE id_entrega = $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(delivery_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
