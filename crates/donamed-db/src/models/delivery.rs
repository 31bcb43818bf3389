//! Delivery database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Delivery row joined with the equipment's display name
#[derive(Debug, Clone, FromRow)]
pub struct DeliveryWithEquipmentModel {
    pub id_entrega: i64,
    pub fecha_entrega: DateTime<Utc>,
    pub estado_equipo: String,
    pub id_equipo: i64,
    pub nombre_equipo: String,
}
