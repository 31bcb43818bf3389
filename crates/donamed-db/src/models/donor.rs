//! Donor database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the donantes table
#[derive(Debug, Clone, FromRow)]
pub struct DonorModel {
    pub id_donante: i64,
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
    pub fecha_registro: DateTime<Utc>,
}
