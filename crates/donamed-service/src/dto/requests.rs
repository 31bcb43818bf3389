//! Request DTOs for API endpoints
//!
//! Each entity uses one payload type for both create (POST) and full
//! replace (PUT); the two verbs accept the same body. A missing required
//! field is a structural error rejected before any statement runs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

/// Donor create/replace payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DonorPayload {
    #[validate(length(min = 1, max = 200, message = "nombre must be 1-200 characters"))]
    pub nombre: String,

    #[validate(length(min = 1, max = 200, message = "contacto must be 1-200 characters"))]
    pub contacto: String,

    #[validate(length(min = 1, max = 300, message = "direccion must be 1-300 characters"))]
    pub direccion: String,

    /// Registration timestamp; the storage engine clock is used when absent
    pub fecha_registro: Option<DateTime<Utc>>,
}

/// Equipment create/replace payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EquipmentPayload {
    #[validate(length(min = 1, max = 200, message = "nombre_equipo must be 1-200 characters"))]
    pub nombre_equipo: String,

    pub marca: Option<String>,

    pub modelo: Option<String>,

    #[validate(length(min = 1, max = 100, message = "estado must be 1-100 characters"))]
    pub estado: String,

    pub fecha_fabricacion: Option<NaiveDate>,

    /// Donation date; defaults to the current date on create when absent
    pub fecha_donacion: Option<NaiveDate>,

    /// Weak reference to a donor; equipment may be undonated
    pub id_donante: Option<i64>,
}

/// Delivery create/replace payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeliveryPayload {
    /// Delivery timestamp; the storage engine clock is used when absent
    pub fecha_entrega: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 100, message = "estado_equipo must be 1-100 characters"))]
    pub estado_equipo: String,

    pub id_equipo: i64,
}
