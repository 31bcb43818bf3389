//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! donamed-core. Each repository handles database operations for a specific
//! domain entity; mutations run inside explicit transactions so a failed
//! statement never leaves a partial write behind.

mod delivery;
mod donor;
mod equipment;
mod error;
mod report;

pub use delivery::PgDeliveryRepository;
pub use donor::PgDonorRepository;
pub use equipment::PgEquipmentRepository;
pub use report::PgReportRepository;
