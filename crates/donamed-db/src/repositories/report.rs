//! PostgreSQL implementation of ReportRepository
//!
//! Read-only aggregate queries. No transaction management here: a failed
//! read has nothing to roll back.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo};
use tracing::instrument;

use donamed_core::entities::StatusCount;
use donamed_core::traits::{RepoResult, ReportRepository};

use crate::models::StatusCountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn equipment_by_status(&self) -> RepoResult<Vec<StatusCount>> {
        let rows = sqlx::query_as::<_, StatusCountModel>(
            r"
            SELECT estado, COUNT(*) AS cantidad
            FROM equipos_medicos
            GROUP BY estado
            ORDER BY cantidad DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(StatusCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn recent_deliveries(&self) -> RepoResult<Vec<Map<String, Value>>> {
        let rows = sqlx::query(
            r"
            SELECT en.id_entrega, en.fecha_entrega, en.estado_equipo,
                   eq.nombre_equipo, eq.marca, eq.modelo,
                   d.nombre AS donante
            FROM entregas en
            JOIN equipos_medicos eq ON en.id_equipo = eq.id_equipo
            LEFT JOIN donantes d ON eq.id_donante = d.id_donante
            WHERE en.fecha_entrega >= NOW() - INTERVAL '30 days'
            ORDER BY en.fecha_entrega DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.iter().map(row_to_object).collect()
    }
}

/// Flatten a row into a JSON object keyed by the selected column names.
///
/// Values are decoded by database type name, so the report's select list can
/// grow without touching any Rust struct.
fn row_to_object(row: &PgRow) -> RepoResult<Map<String, Value>> {
    let mut object = Map::with_capacity(row.len());

    for (idx, column) in row.columns().iter().enumerate() {
        let value = match column.type_info().name() {
            "INT2" => decode(row, idx, |v: i16| Value::from(v))?,
            "INT4" => decode(row, idx, |v: i32| Value::from(v))?,
            "INT8" => decode(row, idx, |v: i64| Value::from(v))?,
            "FLOAT4" => decode(row, idx, |v: f32| Value::from(v))?,
            "FLOAT8" => decode(row, idx, |v: f64| Value::from(v))?,
            "BOOL" => decode(row, idx, Value::Bool)?,
            "DATE" => decode(row, idx, |v: NaiveDate| Value::String(v.to_string()))?,
            "TIMESTAMP" => decode(row, idx, |v: NaiveDateTime| Value::String(v.to_string()))?,
            "TIMESTAMPTZ" => decode(row, idx, |v: DateTime<Utc>| {
                Value::String(v.to_rfc3339())
            })?,
            _ => decode(row, idx, Value::String)?,
        };

        object.insert(column.name().to_string(), value);
    }

    Ok(object)
}

/// Decode one nullable column into a JSON value
fn decode<'r, T, F>(row: &'r PgRow, idx: usize, into_value: F) -> RepoResult<Value>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    F: FnOnce(T) -> Value,
{
    let value: Option<T> = row.try_get(idx).map_err(map_db_error)?;
    Ok(value.map_or(Value::Null, into_value))
}
