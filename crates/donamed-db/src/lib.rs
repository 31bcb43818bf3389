//! # donamed-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `donamed-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations with explicit transactions for mutations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use donamed_db::pool::{create_pool, DatabaseConfig};
//! use donamed_db::PgDonorRepository;
//! use donamed_core::traits::DonorRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let donor_repo = PgDonorRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgDeliveryRepository, PgDonorRepository, PgEquipmentRepository, PgReportRepository,
};
