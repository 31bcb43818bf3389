//! Repository traits (ports) for data access

mod repositories;

pub use repositories::{
    DeliveryRepository, DonorRepository, EquipmentRepository, RepoResult, ReportRepository,
};
