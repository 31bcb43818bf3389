//! Equipment database models

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for the equipos_medicos table
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentModel {
    pub id_equipo: i64,
    pub nombre_equipo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: String,
    pub fecha_fabricacion: Option<NaiveDate>,
    pub fecha_donacion: Option<NaiveDate>,
    pub id_donante: Option<i64>,
}

/// Equipment row left-joined with the donor's display name
///
/// Used by the single-item fetch only; the list query selects the bare row.
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentWithDonorModel {
    pub id_equipo: i64,
    pub nombre_equipo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: String,
    pub fecha_fabricacion: Option<NaiveDate>,
    pub fecha_donacion: Option<NaiveDate>,
    pub id_donante: Option<i64>,
    pub nombre_donante: Option<String>,
}
