//! Test fixtures and data generators
//!
//! Provides reusable request payloads and response shapes for end-to-end
//! tests. Payload fields mirror the wire protocol.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let nanos = std::time::UNIX_EPOCH
        .elapsed()
        .map(|d| u64::from(d.subsec_nanos()))
        .unwrap_or(0);
    nanos * 1000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Donor create/replace payload
#[derive(Debug, Clone, Serialize)]
pub struct DonorPayload {
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_registro: Option<String>,
}

impl DonorPayload {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            nombre: format!("Donante {suffix}"),
            contacto: format!("donante{suffix}@example.com"),
            direccion: "Calle 1".to_string(),
            fecha_registro: None,
        }
    }
}

/// Equipment create/replace payload
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentPayload {
    pub nombre_equipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    pub estado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fabricacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_donacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_donante: Option<i64>,
}

impl EquipmentPayload {
    pub fn unique(id_donante: Option<i64>) -> Self {
        let suffix = unique_suffix();
        Self {
            nombre_equipo: format!("Equipo {suffix}"),
            marca: Some("Acme".to_string()),
            modelo: Some("X-100".to_string()),
            estado: format!("estado-{suffix}"),
            fecha_fabricacion: None,
            fecha_donacion: None,
            id_donante,
        }
    }
}

/// Delivery create/replace payload
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_entrega: Option<String>,
    pub estado_equipo: String,
    pub id_equipo: i64,
}

impl DeliveryPayload {
    pub fn for_equipment(id_equipo: i64) -> Self {
        Self {
            fecha_entrega: None,
            estado_equipo: "Operativo".to_string(),
            id_equipo,
        }
    }
}

/// Donor response body
#[derive(Debug, Deserialize)]
pub struct DonorResponse {
    pub id_donante: i64,
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
    pub fecha_registro: String,
}

/// Equipment detail response body (single-item fetch)
#[derive(Debug, Deserialize)]
pub struct EquipmentDetailResponse {
    pub id_equipo: i64,
    pub nombre_equipo: String,
    pub estado: String,
    pub id_donante: Option<i64>,
    pub nombre_donante: Option<String>,
}

/// Delivery response body
#[derive(Debug, Deserialize)]
pub struct DeliveryResponse {
    pub id_entrega: i64,
    pub fecha_entrega: String,
    pub estado_equipo: String,
    pub id_equipo: i64,
    pub nombre_equipo: String,
}

/// Created acknowledgement for donors
#[derive(Debug, Deserialize)]
pub struct DonorCreated {
    pub message: String,
    pub id_donante: i64,
}

/// Created acknowledgement for equipment
#[derive(Debug, Deserialize)]
pub struct EquipmentCreated {
    pub message: String,
    pub id_equipo: i64,
}

/// Created acknowledgement for deliveries
#[derive(Debug, Deserialize)]
pub struct DeliveryCreated {
    pub message: String,
    pub id_entrega: i64,
}

/// Plain acknowledgement body
#[derive(Debug, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One row of the equipment-by-status report
#[derive(Debug, Deserialize)]
pub struct StatusCount {
    pub estado: String,
    pub cantidad: i64,
}
