//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Keys match the
//! wire protocol column names.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Entity Responses
// ============================================================================

/// Donor row
#[derive(Debug, Serialize)]
pub struct DonorResponse {
    pub id_donante: i64,
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
    pub fecha_registro: DateTime<Utc>,
}

/// Equipment row (list shape, no donor join)
#[derive(Debug, Serialize)]
pub struct EquipmentResponse {
    pub id_equipo: i64,
    pub nombre_equipo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub estado: String,
    pub fecha_fabricacion: Option<NaiveDate>,
    pub fecha_donacion: Option<NaiveDate>,
    pub id_donante: Option<i64>,
}

/// Equipment row plus the joined donor name (single-item shape)
#[derive(Debug, Serialize)]
pub struct EquipmentDetailResponse {
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

/// Delivery row plus the joined equipment name
#[derive(Debug, Serialize)]
pub struct DeliveryResponse {
    pub id_entrega: i64,
    pub fecha_entrega: DateTime<Utc>,
    pub estado_equipo: String,
    pub id_equipo: i64,
    pub nombre_equipo: String,
}

// ============================================================================
// Mutation Acknowledgements
// ============================================================================

/// Created response for donors
#[derive(Debug, Serialize)]
pub struct DonorCreatedResponse {
    pub message: String,
    pub id_donante: i64,
}

impl DonorCreatedResponse {
    pub fn new(id_donante: i64) -> Self {
        Self {
            message: "Donor created successfully".to_string(),
            id_donante,
        }
    }
}

/// Created response for equipment
#[derive(Debug, Serialize)]
pub struct EquipmentCreatedResponse {
    pub message: String,
    pub id_equipo: i64,
}

impl EquipmentCreatedResponse {
    pub fn new(id_equipo: i64) -> Self {
        Self {
            message: "Equipment created successfully".to_string(),
            id_equipo,
        }
    }
}

/// Created response for deliveries
#[derive(Debug, Serialize)]
pub struct DeliveryCreatedResponse {
    pub message: String,
    pub id_entrega: i64,
}

impl DeliveryCreatedResponse {
    pub fn new(id_entrega: i64) -> Self {
        Self {
            message: "Delivery created successfully".to_string(),
            id_entrega,
        }
    }
}

/// Plain acknowledgement body for updates and deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Report Responses
// ============================================================================

/// One row of the equipment-by-status report
#[derive(Debug, Serialize)]
pub struct StatusCountResponse {
    pub estado: String,
    pub cantidad: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe body with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
