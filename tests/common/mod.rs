//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use driver_registry::infrastructure::driven_adapters::database;
use driver_registry::infrastructure::driven_adapters::driver_repository::PostgresDriverRepository;
use driver_registry::infrastructure::driving_adapters::api_rest::{app, App, AppState};

/// Test application context
pub struct TestApp {
    pub router: App,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let driver_repository = Arc::new(PostgresDriverRepository::new(pool.clone()));
        let router = app(AppState::new(driver_repository));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Send a request with an optional JSON body
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        uri: &str,
        body: Option<&B>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request::<()>(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request::<()>(Method::DELETE, uri, None).await
    }

    /// Create a driver through the API and return the stored representation
    pub async fn create_driver(&self, body: &DriverRequest) -> DriverResponse {
        let (status, json) = self.request(Method::POST, "/api/drivers", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected create response: {json}");
        serde_json::from_value(json).unwrap()
    }

    /// Count rows directly in the store
    pub async fn count_drivers(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count drivers")
    }
}

/// Helper struct for driver request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    pub name: String,
    pub id_number: String,
    pub email: String,
    pub phone_number: String,
}

impl Default for DriverRequest {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            id_number: "12345678".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "+1 555 0100".to_string(),
        }
    }
}

impl DriverRequest {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

/// Driver response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: String,
    pub name: String,
    pub id_number: String,
    pub email: String,
    pub phone_number: String,
}
