//! Service context - dependency container for services
//!
//! Holds the repositories and the connection pool. Injected into the API
//! layer at wiring time; there is no module-level singleton.

use std::sync::Arc;

use donamed_core::traits::{
    DeliveryRepository, DonorRepository, EquipmentRepository, ReportRepository,
};
use donamed_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    donor_repo: Arc<dyn DonorRepository>,
    equipment_repo: Arc<dyn EquipmentRepository>,
    delivery_repo: Arc<dyn DeliveryRepository>,
    report_repo: Arc<dyn ReportRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        donor_repo: Arc<dyn DonorRepository>,
        equipment_repo: Arc<dyn EquipmentRepository>,
        delivery_repo: Arc<dyn DeliveryRepository>,
        report_repo: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            pool,
            donor_repo,
            equipment_repo,
            delivery_repo,
            report_repo,
        }
    }

    /// Get the database pool (used by readiness checks)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the donor repository
    pub fn donor_repo(&self) -> &dyn DonorRepository {
        self.donor_repo.as_ref()
    }

    /// Get the equipment repository
    pub fn equipment_repo(&self) -> &dyn EquipmentRepository {
        self.equipment_repo.as_ref()
    }

    /// Get the delivery repository
    pub fn delivery_repo(&self) -> &dyn DeliveryRepository {
        self.delivery_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
