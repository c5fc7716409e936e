//! Create Driver Use Case

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverData};
use crate::shared::errors::UseCaseError;

/// Use case for registering a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// Not idempotent: submitting the same data twice stores two drivers.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: DriverData) -> Result<Driver, UseCaseError> {
        tracing::info!("Creating new driver");

        let created = self.driver_repository.create(&data).await?;

        tracing::info!(driver_id = %created.id(), "Driver created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::models::driver::DriverId;
    use crate::shared::errors::RepositoryError;
    use uuid::Uuid;

    fn create_test_data() -> DriverData {
        DriverData {
            name: "Jane Doe".to_string(),
            id_number: "12345678".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "+1 555 0100".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_driver_with_store_assigned_id() {
        let id = DriverId::from_uuid(Uuid::new_v4());
        let mut repo = MockDriverRepository::new();
        repo.expect_create()
            .withf(|data| data.name == "Jane Doe")
            .times(1)
            .returning(move |data| Ok(Driver::new(id, data.clone())));

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let driver = use_case.execute(create_test_data()).await.unwrap();

        assert_eq!(driver.id(), &id);
        assert_eq!(driver.into_data(), create_test_data());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockDriverRepository::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let result = use_case.execute(create_test_data()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
