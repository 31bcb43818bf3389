//! # donamed-service
//!
//! Application layer: use cases built on the repository traits, plus the
//! request/response DTOs exchanged with the API layer.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    DeliveryCreatedResponse, DeliveryPayload, DeliveryResponse, DonorCreatedResponse, DonorPayload,
    DonorResponse, EquipmentCreatedResponse, EquipmentDetailResponse, EquipmentPayload,
    EquipmentResponse, HealthResponse, MessageResponse, ReadinessResponse, StatusCountResponse,
};
pub use services::{
    DeliveryService, DonorService, EquipmentService, ReportService, ServiceContext, ServiceError,
    ServiceResult,
};
