//! Get All Drivers Use Case

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;

/// Use case for listing every driver
pub struct GetAllDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetAllDriversUseCase {
    /// Create a new GetAllDriversUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Driver>, UseCaseError> {
        tracing::debug!("Getting all drivers");

        let drivers = self.driver_repository.find_all().await?;

        tracing::debug!(count = drivers.len(), "Found drivers");
        Ok(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::domain::models::driver::{DriverData, DriverId};
    use crate::shared::errors::RepositoryError;
    use uuid::Uuid;

    fn create_test_driver(name: &str) -> Driver {
        Driver::new(
            DriverId::from_uuid(Uuid::new_v4()),
            DriverData {
                name: name.to_string(),
                id_number: "12345678".to_string(),
                email: "driver@example.com".to_string(),
                phone_number: "555-0100".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_drivers() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let use_case = GetAllDriversUseCase::new(Arc::new(repo));
        let result = use_case.execute().await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_all_drivers() {
        let drivers = vec![create_test_driver("Alice"), create_test_driver("Bob")];
        let expected = drivers.clone();
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(move || Ok(drivers.clone()));

        let use_case = GetAllDriversUseCase::new(Arc::new(repo));
        let result = use_case.execute().await.unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let use_case = GetAllDriversUseCase::new(Arc::new(repo));
        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
