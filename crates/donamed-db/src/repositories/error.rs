//! Error handling utilities for repositories

use donamed_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "donor not found" error
pub fn donor_not_found(id: i64) -> DomainError {
    DomainError::DonorNotFound(id)
}

/// Create an "equipment not found" error
pub fn equipment_not_found(id: i64) -> DomainError {
    DomainError::EquipmentNotFound(id)
}

/// Create a "delivery not found" error
pub fn delivery_not_found(id: i64) -> DomainError {
    DomainError::DeliveryNotFound(id)
}
