//! Entity ↔ model mappers
//!
//! `From` conversions turning SQLx row models into domain entities.

mod delivery;
mod donor;
mod equipment;
mod report;
