//! Data transfer objects
//!
//! Requests implement `Deserialize` + `Validate`; responses implement
//! `Serialize`. Field names match the wire protocol.

mod mappers;
mod requests;
mod responses;

pub use requests::{DeliveryPayload, DonorPayload, EquipmentPayload};
pub use responses::{
    DeliveryCreatedResponse, DeliveryResponse, DonorCreatedResponse, DonorResponse,
    EquipmentCreatedResponse, EquipmentDetailResponse, EquipmentResponse, HealthResponse,
    MessageResponse, ReadinessResponse, StatusCountResponse,
};
