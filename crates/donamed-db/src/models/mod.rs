//! Database models - SQLx-compatible structs for PostgreSQL tables

mod delivery;
mod donor;
mod equipment;
mod report;

pub use delivery::DeliveryWithEquipmentModel;
pub use donor::DonorModel;
pub use equipment::{EquipmentModel, EquipmentWithDonorModel};
pub use report::StatusCountModel;
