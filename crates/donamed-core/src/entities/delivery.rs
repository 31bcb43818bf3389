//! Delivery entity - an equipment hand-off event

use chrono::{DateTime, Utc};

/// Delivery record joined with the referenced equipment's display name
///
/// Every delivery references an existing equipment row (enforced by the
/// storage engine), so both the list and single-item reads carry
/// `nombre_equipo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryWithEquipment {
    pub id_entrega: i64,
    pub fecha_entrega: DateTime<Utc>,
    pub estado_equipo: String,
    pub id_equipo: i64,
    pub nombre_equipo: String,
}

/// Field values for inserting or replacing a delivery row
///
/// `fecha_entrega` is optional; on insert the storage engine fills in the
/// delivery timestamp when it is absent.
#[derive(Debug, Clone, Default)]
pub struct NewDelivery {
    pub fecha_entrega: Option<DateTime<Utc>>,
    pub estado_equipo: String,
    pub id_equipo: i64,
}
