//! PostgreSQL implementation of EquipmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use donamed_core::entities::{Equipment, EquipmentWithDonor, NewEquipment};
use donamed_core::traits::{EquipmentRepository, RepoResult};

use crate::models::{EquipmentModel, EquipmentWithDonorModel};

use super::error::{equipment_not_found, map_db_error};

/// PostgreSQL implementation of EquipmentRepository
#[derive(Clone)]
pub struct PgEquipmentRepository {
    pool: PgPool,
}

impl PgEquipmentRepository {
    /// Create a new PgEquipmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentRepository for PgEquipmentRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Equipment>> {
        // Intentionally no donor join here; only the single-item fetch
        // carries nombre_donante.
        let rows = sqlx::query_as::<_, EquipmentModel>(
            r"
            SELECT id_equipo, nombre_equipo, marca, modelo, estado,
                   fecha_fabricacion, fecha_donacion, id_donante
            FROM equipos_medicos
            ORDER BY id_equipo
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EquipmentWithDonor>> {
        let result = sqlx::query_as::<_, EquipmentWithDonorModel>(
            r"
            SELECT e.id_equipo, e.nombre_equipo, e.marca, e.modelo, e.estado,
                   e.fecha_fabricacion, e.fecha_donacion, e.id_donante,
                   d.nombre AS nombre_donante
            FROM equipos_medicos e
            LEFT JOIN donantes d ON e.id_donante = d.id_donante
            WHERE e.id_equipo = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(EquipmentWithDonor::from))
    }

    #[instrument(skip(self, equipment))]
    async fn create(&self, equipment: &NewEquipment) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO equipos_medicos
                (nombre_equipo, marca, modelo, estado,
                 fecha_fabricacion, fecha_donacion, id_donante)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE), $7)
            RETURNING id_equipo
            ",
        )
        .bind(&equipment.nombre_equipo)
        .bind(&equipment.marca)
        .bind(&equipment.modelo)
        .bind(&equipment.estado)
        .bind(equipment.fecha_fabricacion)
        .bind(equipment.fecha_donacion)
        .bind(equipment.id_donante)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, equipment))]
    async fn update(&self, id: i64, equipment: &NewEquipment) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE equipos_medicos
            SET nombre_equipo = $2, marca = $3, modelo = $4, estado = $5,
                fecha_fabricacion = $6, fecha_donacion = $7, id_donante = $8
            WHERE id_equipo = $1
            ",
        )
        .bind(id)
        .bind(&equipment.nombre_equipo)
        .bind(&equipment.marca)
        .bind(&equipment.modelo)
        .bind(&equipment.estado)
        .bind(equipment.fecha_fabricacion)
        .bind(equipment.fecha_donacion)
        .bind(equipment.id_donante)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(equipment_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM equipos_medicos
            WHERE id_equipo = $1
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(equipment_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
