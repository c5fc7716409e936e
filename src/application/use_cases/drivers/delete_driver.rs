//! Delete Driver Use Case
//!
//! Permanently removes a driver record.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a driver
pub struct DeleteDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl DeleteDriverUseCase {
    /// Create a new DeleteDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case, returning the removed driver
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &DriverId) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Deleting driver");

        let deleted = self.driver_repository.delete(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for deletion");
            UseCaseError::driver_not_found(id.to_string())
        })?;

        tracing::info!(driver_id = %id, "Driver deleted successfully");
        Ok(deleted)
    }
}
