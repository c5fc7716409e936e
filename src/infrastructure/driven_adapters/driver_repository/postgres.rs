//! PostgreSQL Driver Repository Implementation
//!
//! Implements the DriverRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverData, DriverId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    id: Uuid,
    name: String,
    id_number: String,
    email: String,
    phone_number: String,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::new(
            DriverId::from_uuid(row.id),
            DriverData {
                name: row.name,
                id_number: row.id_number,
                email: row.email,
                phone_number: row.phone_number,
            },
        )
    }
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    /// Create a new PostgresDriverRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, name, id_number, email, phone_number
            FROM drivers
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, name, id_number, email, phone_number
            FROM drivers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn create(&self, data: &DriverData) -> Result<Driver, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            INSERT INTO drivers (name, id_number, email, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, id_number, email, phone_number
            "#,
        )
        .bind(&data.name)
        .bind(&data.id_number)
        .bind(&data.email)
        .bind(&data.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(Driver::from(row))
    }

    async fn update(&self, id: &DriverId, data: &DriverData) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            UPDATE drivers
            SET name = $2,
                id_number = $3,
                email = $4,
                phone_number = $5
            WHERE id = $1
            RETURNING id, name, id_number, email, phone_number
            "#,
        )
        .bind(id.as_uuid())
        .bind(&data.name)
        .bind(&data.id_number)
        .bind(&data.email)
        .bind(&data.phone_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn delete(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            DELETE FROM drivers
            WHERE id = $1
            RETURNING id, name, id_number, email, phone_number
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }
}
