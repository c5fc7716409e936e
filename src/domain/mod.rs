//! Domain Layer
//!
//! Contains the domain model and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::driver_repository::DriverRepository;
pub use models::driver::{Driver, DriverData, DriverId};
