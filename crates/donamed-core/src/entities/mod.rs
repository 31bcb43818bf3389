//! Domain entities - row-shaped records with generated identifiers

mod delivery;
mod donor;
mod equipment;
mod report;

pub use delivery::{DeliveryWithEquipment, NewDelivery};
pub use donor::{Donor, NewDonor};
pub use equipment::{Equipment, EquipmentWithDonor, NewEquipment};
pub use report::StatusCount;
