//! Domain Models

pub mod driver;

pub use driver::{Driver, DriverData, DriverId};
