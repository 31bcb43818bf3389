//! Report query models

use sqlx::FromRow;

/// One row of the equipment-by-status aggregate
#[derive(Debug, Clone, FromRow)]
pub struct StatusCountModel {
    pub estado: String,
    pub cantidad: i64,
}
