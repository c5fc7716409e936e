//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetAllDriversUseCase, GetDriverByIdUseCase,
    UpdateDriverUseCase,
};
use crate::domain::gateways::DriverRepository;

/// Path prefix all driver routes are mounted under
pub const DRIVERS_PATH: &str = "/api/drivers";

/// The served application: the router behind trailing-slash normalization
pub type App = NormalizePath<Router>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub get_all_drivers_use_case: Arc<GetAllDriversUseCase>,
    pub get_driver_by_id_use_case: Arc<GetDriverByIdUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub update_driver_use_case: Arc<UpdateDriverUseCase>,
    pub delete_driver_use_case: Arc<DeleteDriverUseCase>,
}

impl AppState {
    /// Wire every use case to the same repository
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self {
            get_all_drivers_use_case: Arc::new(GetAllDriversUseCase::new(driver_repository.clone())),
            get_driver_by_id_use_case: Arc::new(GetDriverByIdUseCase::new(driver_repository.clone())),
            create_driver_use_case: Arc::new(CreateDriverUseCase::new(driver_repository.clone())),
            update_driver_use_case: Arc::new(UpdateDriverUseCase::new(driver_repository.clone())),
            delete_driver_use_case: Arc::new(DeleteDriverUseCase::new(driver_repository)),
        }
    }
}

/// Build the full application with its middleware stack
///
/// Trailing slashes are trimmed before routing, so `/api/drivers/` serves
/// the same handler as `/api/drivers`.
pub fn app(state: AppState) -> App {
    let router = Router::new()
        .nest(DRIVERS_PATH, handlers::drivers::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}
