//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod driver_repository;

pub use config::AppConfig;
pub use driver_repository::PostgresDriverRepository;
