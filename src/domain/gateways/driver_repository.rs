//! Driver Repository Gateway
//!
//! Abstract trait defining the contract for driver persistence operations.

use async_trait::async_trait;

use crate::domain::models::driver::{Driver, DriverData, DriverId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
///
/// Implementations perform exactly one store round trip per call and never
/// validate or transform the data they are handed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find every stored driver, in insertion order
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Find a driver by its ID
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Insert a new driver; the store assigns the ID
    async fn create(&self, data: &DriverData) -> Result<Driver, RepositoryError>;

    /// Replace the fields of an existing driver, returning the stored result
    async fn update(&self, id: &DriverId, data: &DriverData) -> Result<Option<Driver>, RepositoryError>;

    /// Remove a driver, returning the removed record
    async fn delete(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError>;
}
