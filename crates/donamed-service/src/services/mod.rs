//! Application services
//!
//! One service per entity plus reports, all sharing the ServiceContext
//! dependency container.

mod context;
mod delivery;
mod donor;
mod equipment;
mod error;
mod report;

pub use context::ServiceContext;
pub use delivery::DeliveryService;
pub use donor::DonorService;
pub use equipment::EquipmentService;
pub use error::{ServiceError, ServiceResult};
pub use report::ReportService;
