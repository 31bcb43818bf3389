//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All mutating operations follow
//! commit-on-success, rollback-on-error.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::entities::{
    DeliveryWithEquipment, Donor, Equipment, EquipmentWithDonor, NewDelivery, NewDonor,
    NewEquipment, StatusCount,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Donor Repository
// ============================================================================

#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// List all donors in identifier order
    async fn list(&self) -> RepoResult<Vec<Donor>>;

    /// Find a donor by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Donor>>;

    /// Insert a donor, returning the generated identifier
    async fn create(&self, donor: &NewDonor) -> RepoResult<i64>;

    /// Replace all mutable fields of a donor
    async fn update(&self, id: i64, donor: &NewDonor) -> RepoResult<()>;

    /// Delete a donor
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Equipment Repository
// ============================================================================

#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// List all equipment in identifier order, without the donor join
    async fn list(&self) -> RepoResult<Vec<Equipment>>;

    /// Find a single equipment row by ID, joined with its donor's name
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EquipmentWithDonor>>;

    /// Insert an equipment row, returning the generated identifier
    async fn create(&self, equipment: &NewEquipment) -> RepoResult<i64>;

    /// Replace all mutable fields of an equipment row
    async fn update(&self, id: i64, equipment: &NewEquipment) -> RepoResult<()>;

    /// Delete an equipment row
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Delivery Repository
// ============================================================================

#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// List all deliveries in identifier order, joined with equipment names
    async fn list(&self) -> RepoResult<Vec<DeliveryWithEquipment>>;

    /// Find a delivery by ID, joined with its equipment's name
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<DeliveryWithEquipment>>;

    /// Insert a delivery, returning the generated identifier
    async fn create(&self, delivery: &NewDelivery) -> RepoResult<i64>;

    /// Replace all mutable fields of a delivery
    async fn update(&self, id: i64, delivery: &NewDelivery) -> RepoResult<()>;

    /// Delete a delivery
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Equipment counts grouped by status label, most common first
    async fn equipment_by_status(&self) -> RepoResult<Vec<StatusCount>>;

    /// Deliveries from the trailing 30 days, newest first, each row
    /// flattened into an object keyed by the selected column names
    async fn recent_deliveries(&self) -> RepoResult<Vec<Map<String, Value>>>;
}
